#![no_main]

use fixed58::DecodeError;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoded = [0u8; 64];
    match fixed58::decode_64(data, &mut decoded) {
        Ok(()) => {
            let b = bs58::decode(data)
                .into_vec()
                .expect("Failed to decode base58 that fixed58 decoded");
            assert_eq!(&decoded.to_vec(), &b);

            let mut buf = [0u8; 88];
            let len = fixed58::encode_64(&decoded, &mut buf);
            assert_eq!(&buf[..len as usize], data);
            assert_eq!(data, bs58::encode(decoded).into_vec());
        }
        Err(DecodeError::NonCanonical) => {
            if let Ok(b) = bs58::decode(data).into_vec() {
                assert_ne!(b.len(), 64);
            }
        }
        Err(DecodeError::NumericOverflow) | Err(DecodeError::InvalidLength) => {
            if let Ok(b) = bs58::decode(data).into_vec() {
                assert!(b.len() > 64);
            }
        }
        Err(DecodeError::InvalidChar { position, .. }) => {
            let err = bs58::decode(data).into_vec().unwrap_err();
            if let bs58::decode::Error::InvalidCharacter { index, .. }
            | bs58::decode::Error::NonAsciiCharacter { index } = err
            {
                assert_eq!(index, position);
            }
        }
    }

    let mut decoded = [0u8; 32];
    match fixed58::decode_32(data, &mut decoded) {
        Ok(()) => {
            let b = bs58::decode(data)
                .into_vec()
                .expect("Failed to decode base58 that fixed58 decoded");
            assert_eq!(&decoded.to_vec(), &b);

            let mut buf = [0u8; 44];
            let len = fixed58::encode_32(&decoded, &mut buf);
            assert_eq!(&buf[..len as usize], data);
            assert_eq!(data, bs58::encode(decoded).into_vec());
        }
        Err(DecodeError::NonCanonical) => {
            if let Ok(b) = bs58::decode(data).into_vec() {
                assert_ne!(b.len(), 32);
            }
        }
        Err(DecodeError::NumericOverflow) | Err(DecodeError::InvalidLength) => {
            if let Ok(b) = bs58::decode(data).into_vec() {
                assert!(b.len() > 32);
            }
        }
        Err(DecodeError::InvalidChar { position, .. }) => {
            let err = bs58::decode(data).into_vec().unwrap_err();
            if let bs58::decode::Error::InvalidCharacter { index, .. }
            | bs58::decode::Error::NonAsciiCharacter { index } = err
            {
                assert_eq!(index, position);
            }
        }
    }
});
