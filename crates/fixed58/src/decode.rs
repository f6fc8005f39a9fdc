use core::array::from_fn;

use fixed58_core::{
    base58_digit, DecodeError, BASE58_ENCODED_32_MAX_LEN, BASE58_ENCODED_64_MAX_LEN,
    BASE58_INVALID_CHAR, BINARY_SZ_32, BINARY_SZ_64, DEC_TABLE_32, DEC_TABLE_64,
    INTERMEDIATE_SZ_32, INTERMEDIATE_SZ_64, N_32, N_64, RAW58_SZ_32, RAW58_SZ_64,
};

use crate::unlikely::unlikely;

#[inline(always)]
fn validate<const ENCODED_LEN: usize>(encoded: &[u8]) -> Result<(), DecodeError> {
    if unlikely(encoded.len() > ENCODED_LEN) {
        return Err(DecodeError::InvalidLength);
    }
    for (position, &byte) in encoded.iter().enumerate() {
        if unlikely(base58_digit(byte) == BASE58_INVALID_CHAR) {
            return Err(DecodeError::InvalidChar { position, byte });
        }
    }
    Ok(())
}

/// Returns the value as 32-bit limbs held in `u64`s, most significant first.
#[inline(always)]
fn base58_decode_to_limbs<
    const ENCODED_LEN: usize,
    const RAW58_SZ: usize,
    const INTERMEDIATE_SZ: usize,
    const BINARY_SZ: usize,
>(
    encoded: &[u8],
    dec_table: &[[u32; BINARY_SZ]; INTERMEDIATE_SZ],
) -> Result<[u64; BINARY_SZ], DecodeError> {
    validate::<ENCODED_LEN>(encoded)?;

    /* Prepend enough 0s to make it exactly RAW58_SZ digits */
    let prepend_0 = RAW58_SZ - encoded.len();
    let raw_base58: [u8; RAW58_SZ] = from_fn(|j| {
        if j < prepend_0 {
            0
        } else {
            base58_digit(encoded[j - prepend_0])
        }
    });

    /* X = sum_i intermediate[i] * 58^(5*(INTERMEDIATE_SZ-1-i)) */
    let intermediate: [u64; INTERMEDIATE_SZ] = from_fn(|i| {
        let digits = &raw_base58[5 * i..5 * i + 5];
        digits[0] as u64 * 11316496
            + digits[1] as u64 * 195112
            + digits[2] as u64 * 3364
            + digits[3] as u64 * 58
            + digits[4] as u64
    });

    let mut binary: [u64; BINARY_SZ] = from_fn(|j| {
        intermediate
            .iter()
            .zip(dec_table)
            .map(|(limb, row)| limb * row[j] as u64)
            .sum()
    });

    /* Make sure each term is less than 2^32.

    For N==32 there is plenty of headroom in binary.  For N==64, even
    after adding 2^32 to binary[13] it is still 2^63.998, so this can't
    overflow either. */
    for i in (1..BINARY_SZ).rev() {
        binary[i - 1] += binary[i] >> 32;
        binary[i] &= 0xFFFFFFFF;
    }

    /* If the largest term is 2^32 or bigger, X is larger than what fits in
    N bytes.  A string of all 'z's does this, for example. */
    if unlikely(binary[0] > 0xFFFFFFFF) {
        return Err(DecodeError::NumericOverflow);
    }
    Ok(binary)
}

#[inline(always)]
fn limbs_to_be_bytes<const BINARY_SZ: usize, const N: usize>(
    out: &mut [u8; N],
    binary: &[u64; BINARY_SZ],
) {
    for (chunk, limb) in out.chunks_exact_mut(4).zip(binary) {
        chunk.copy_from_slice(&(*limb as u32).to_be_bytes());
    }
}

/// The encoding must have exactly as many leading `'1'`s as the value has
/// leading zero bytes. Both runs are counted up to their own ends, so an
/// all-`'1'` input is compared without reading past it.
#[inline(always)]
fn check_leading_ones<const N: usize>(out: &[u8; N], encoded: &[u8]) -> Result<(), DecodeError> {
    let leading_zero_cnt = out.iter().take_while(|b| **b == 0).count();
    let leading_one_cnt = encoded.iter().take_while(|c| **c == b'1').count();
    if unlikely(leading_one_cnt != leading_zero_cnt) {
        return Err(DecodeError::NonCanonical);
    }
    Ok(())
}

#[inline(always)]
fn base58_decode<
    const ENCODED_LEN: usize,
    const RAW58_SZ: usize,
    const INTERMEDIATE_SZ: usize,
    const BINARY_SZ: usize,
    const N: usize,
>(
    encoded: &[u8],
    out: &mut [u8; N],
    dec_table: &[[u32; BINARY_SZ]; INTERMEDIATE_SZ],
) -> Result<(), DecodeError> {
    let binary = base58_decode_to_limbs::<ENCODED_LEN, RAW58_SZ, INTERMEDIATE_SZ, BINARY_SZ>(
        encoded, dec_table,
    )?;
    let mut decoded = [0u8; N];
    limbs_to_be_bytes(&mut decoded, &binary);
    check_leading_ones(&decoded, encoded)?;
    *out = decoded;
    Ok(())
}

/// Decode base58 data onto a 32-byte array.
///
/// `out` is only written when decoding succeeds.
///
/// # Examples
///
/// ```
/// let encoded = b"G9L2SYsfcuFt3eQKHQwG7JVNztdv1bwLaPFAnm1v3Pre";
/// let mut out = [0u8; 32];
/// fixed58::decode_32(encoded, &mut out).unwrap();
/// assert_eq!(
///     out,
///     [
///         225, 1, 118, 57, 196, 60, 117, 207, 131, 118, 39, 114, 43, 183, 110, 103, 209, 162,
///         104, 207, 202, 190, 194, 24, 165, 53, 95, 24, 51, 245, 133, 119
///     ]
/// );
/// ```
#[inline]
pub fn decode_32<I: AsRef<[u8]>>(encoded: I, out: &mut [u8; N_32]) -> Result<(), DecodeError> {
    base58_decode::<BASE58_ENCODED_32_MAX_LEN, RAW58_SZ_32, INTERMEDIATE_SZ_32, BINARY_SZ_32, N_32>(
        encoded.as_ref(),
        out,
        &DEC_TABLE_32,
    )
}

/// Decode base58 data onto a 64-byte array.
///
/// `out` is only written when decoding succeeds.
///
/// # Examples
///
/// ```
/// let bytes = b"11cgTH4D5e8S3snD444WbbGrkepjTvWMj2jkmCGJtgn3H7qrPb1BnwapxpbGdRtHQh9t9Wbn9t6ZDGHzWpL4df";
/// let mut out = [0u8; 64];
/// fixed58::decode_64(bytes, &mut out).unwrap();
/// assert_eq!(
///     out,
///     [
///         0, 0, 10, 85, 198, 191, 71, 18, 5, 54, 6, 255, 181, 32, 227, 150, 208, 3, 157, 135, 222, 67, 50,
///         23, 237, 51, 240, 123, 34, 148, 111, 84, 98, 162, 236, 133, 31, 93, 185, 142, 108, 41, 191, 1, 138,
///         6, 192, 0, 46, 93, 25, 65, 243, 223, 225, 225, 85, 55, 82, 251, 109, 132, 165, 2
///     ]
/// );
/// ```
#[inline]
pub fn decode_64<I: AsRef<[u8]>>(encoded: I, out: &mut [u8; N_64]) -> Result<(), DecodeError> {
    base58_decode::<BASE58_ENCODED_64_MAX_LEN, RAW58_SZ_64, INTERMEDIATE_SZ_64, BINARY_SZ_64, N_64>(
        encoded.as_ref(),
        out,
        &DEC_TABLE_64,
    )
}

/// Decode base58 data into a new 32-byte array.
///
/// ```
/// let key = fixed58::decode_32_to_array("11111111111111111111111111111112").unwrap();
/// assert_eq!(key[31], 1);
/// ```
#[inline]
pub fn decode_32_to_array<I: AsRef<[u8]>>(encoded: I) -> Result<[u8; N_32], DecodeError> {
    let mut out = [0u8; N_32];
    decode_32(encoded, &mut out)?;
    Ok(out)
}

/// Decode base58 data into a new 64-byte array.
#[inline]
pub fn decode_64_to_array<I: AsRef<[u8]>>(encoded: I) -> Result<[u8; N_64], DecodeError> {
    let mut out = [0u8; N_64];
    decode_64(encoded, &mut out)?;
    Ok(out)
}
