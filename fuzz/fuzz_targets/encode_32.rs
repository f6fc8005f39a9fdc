#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 32]| {
    let correct = bs58::encode(data).into_string();
    let encoded = fixed58::encode_32_to_string(&data);

    if correct != encoded {
        panic!("encode_32 fuzz encoding failed: {:?}, {:?}", correct, encoded);
    }

    let decoded = fixed58::decode_32_to_array(&encoded).unwrap();
    if decoded != data {
        panic!("encode_32 round trip failed: {:?}, {:?}", data, decoded);
    }
});
