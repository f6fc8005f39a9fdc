#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut out = [0u8; 32];
    let ours = fixed58::decode_32(data, &mut out);
    match (ours, bs58::decode(data).into_vec()) {
        (Ok(()), Ok(theirs)) => {
            if theirs.as_slice() != out {
                panic!("decode_32 gave different result: {:?}, {:?}", theirs, out);
            }
        }
        (Ok(()), Err(err)) => panic!("bs58 errored when fixed58 was ok: {:?}, {:?}", err, out),
        // bs58 also decodes strings of other lengths
        (Err(err), Ok(theirs)) => {
            if theirs.len() == 32 {
                panic!("fixed58 errored when bs58 was ok: {:?}, {:?}", theirs, err);
            }
        }
        (Err(_), Err(_)) => {}
    }
});
