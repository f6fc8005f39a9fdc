#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 64]| {
    let correct = bs58::encode(data).into_string();
    let mut buf = [0u8; fixed58::BASE58_ENCODED_64_MAX_LEN];
    let len = fixed58::encode_64(&data, &mut buf);
    let encoded = &buf[..len as usize];

    if correct.as_bytes() != encoded {
        panic!("encode_64 fuzz encoding failed: {:?}, {:?}", correct, encoded);
    }

    let mut decoded = [0u8; 64];
    fixed58::decode_64(encoded, &mut decoded).unwrap();
    if decoded != data {
        panic!("encode_64 round trip failed: {:?}, {:?}", data, decoded);
    }
});
