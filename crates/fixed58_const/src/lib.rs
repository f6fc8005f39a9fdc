#![doc = include_str!("../README.md")]
#![no_std]
use fixed58_core::{
    base58_digit, BASE58_ENCODED_32_MAX_LEN, BASE58_ENCODED_64_MAX_LEN, BASE58_INVALID_CHAR,
    BINARY_SZ_32, BINARY_SZ_64, DEC_TABLE_32, DEC_TABLE_64, INTERMEDIATE_SZ_32,
    INTERMEDIATE_SZ_64, N_32, N_64, RAW58_SZ_32, RAW58_SZ_64,
};

const fn decode_const<
    const ENCODED_LEN: usize,
    const RAW58_SZ: usize,
    const INTERMEDIATE_SZ: usize,
    const BINARY_SZ: usize,
    const N: usize,
>(
    encoded: &[u8],
    dec_table: &[[u32; BINARY_SZ]; INTERMEDIATE_SZ],
) -> [u8; N] {
    let char_cnt = encoded.len();
    if char_cnt > ENCODED_LEN {
        panic!("Base58 string too long");
    }
    let prepend_0 = RAW58_SZ - char_cnt;
    let mut raw_base58 = [0u8; RAW58_SZ];
    let mut j = 0;
    while j < char_cnt {
        let digit = base58_digit(encoded[j]);
        if digit == BASE58_INVALID_CHAR {
            panic!("Illegal base58 char");
        }
        raw_base58[prepend_0 + j] = digit;
        j += 1;
    }

    let mut intermediate = [0u64; INTERMEDIATE_SZ];
    let mut i = 0;
    while i < INTERMEDIATE_SZ {
        intermediate[i] = raw_base58[5 * i] as u64 * 11316496
            + raw_base58[5 * i + 1] as u64 * 195112
            + raw_base58[5 * i + 2] as u64 * 3364
            + raw_base58[5 * i + 3] as u64 * 58
            + raw_base58[5 * i + 4] as u64;
        i += 1;
    }

    let mut binary = [0u64; BINARY_SZ];
    let mut j = 0;
    while j < BINARY_SZ {
        let mut acc = 0u64;
        let mut i = 0;
        while i < INTERMEDIATE_SZ {
            acc += intermediate[i] * dec_table[i][j] as u64;
            i += 1;
        }
        binary[j] = acc;
        j += 1;
    }

    let mut i = BINARY_SZ - 1;
    while i > 0 {
        binary[i - 1] += binary[i] >> 32;
        binary[i] &= 0xFFFFFFFF;
        i -= 1;
    }
    if binary[0] > 0xFFFFFFFF {
        panic!("Decoded value does not fit in the output array");
    }

    let mut out = [0u8; N];
    let mut i = 0;
    while i < BINARY_SZ {
        let be = (binary[i] as u32).to_be_bytes();
        out[4 * i] = be[0];
        out[4 * i + 1] = be[1];
        out[4 * i + 2] = be[2];
        out[4 * i + 3] = be[3];
        i += 1;
    }

    let mut leading_zero_cnt = 0;
    while leading_zero_cnt < N && out[leading_zero_cnt] == 0 {
        leading_zero_cnt += 1;
    }
    let mut leading_one_cnt = 0;
    while leading_one_cnt < char_cnt && encoded[leading_one_cnt] == b'1' {
        leading_one_cnt += 1;
    }
    if leading_one_cnt != leading_zero_cnt {
        panic!("Leading '1' count does not match the leading zero byte count");
    }
    out
}

/// Decode base58 onto a 32-byte array at compile time.
///
/// Panics on any input the runtime decoder would reject, which makes the
/// constant fail to compile.
///
/// # Examples
///
/// ```
/// use fixed58_const::decode_32_const;
///
/// const SYSTEM_PROGRAM: [u8; 32] = decode_32_const("11111111111111111111111111111111");
/// const KEY: [u8; 32] = decode_32_const("G9L2SYsfcuFt3eQKHQwG7JVNztdv1bwLaPFAnm1v3Pre");
/// assert_eq!(SYSTEM_PROGRAM, [0; 32]);
/// assert_eq!(KEY[..4], [225u8, 1, 118, 57]);
/// ```
///
/// ```compile_fail
/// const BAD: [u8; 32] = fixed58_const::decode_32_const("0OIl");
/// ```
pub const fn decode_32_const(encoded: &str) -> [u8; N_32] {
    decode_const::<BASE58_ENCODED_32_MAX_LEN, RAW58_SZ_32, INTERMEDIATE_SZ_32, BINARY_SZ_32, N_32>(
        encoded.as_bytes(),
        &DEC_TABLE_32,
    )
}

/// Decode base58 onto a 64-byte array at compile time.
///
/// Panics on any input the runtime decoder would reject.
pub const fn decode_64_const(encoded: &str) -> [u8; N_64] {
    decode_const::<BASE58_ENCODED_64_MAX_LEN, RAW58_SZ_64, INTERMEDIATE_SZ_64, BINARY_SZ_64, N_64>(
        encoded.as_bytes(),
        &DEC_TABLE_64,
    )
}
