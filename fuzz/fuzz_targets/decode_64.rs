#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let ours = fixed58::decode_64_to_array(data);
    match (ours, bs58::decode(data).into_vec()) {
        (Ok(out), Ok(theirs)) => {
            if theirs.as_slice() != out {
                panic!("decode_64 gave different result: {:?}, {:?}", theirs, out);
            }
        }
        (Ok(out), Err(err)) => panic!("bs58 errored when fixed58 was ok: {:?}, {:?}", err, out),
        // bs58 also decodes strings of other lengths
        (Err(err), Ok(theirs)) => {
            if theirs.len() == 64 {
                panic!("fixed58 errored when bs58 was ok: {:?}, {:?}", theirs, err);
            }
        }
        (Err(_), Err(_)) => {}
    }
});
