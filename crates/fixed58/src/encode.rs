use core::array::from_fn;

use fixed58_core::{
    BASE58_CHARS, BASE58_ENCODED_32_MAX_LEN, BASE58_ENCODED_64_MAX_LEN, BINARY_SZ_32,
    BINARY_SZ_64, ENC_TABLE_32, ENC_TABLE_64, INTERMEDIATE_SZ_32, INTERMEDIATE_SZ_64, N_32, N_64,
    R1DIV, RAW58_SZ_32, RAW58_SZ_64,
};

/// The value as base-58^5 limbs, most significant first:
///   X = sum_i intermediate[i] * 58^(5*(INTERMEDIATE_SZ-1-i))
struct Intermediate<const INTERMEDIATE_SZ: usize>([u64; INTERMEDIATE_SZ]);

#[inline(always)]
fn in_leading_0s<const N: usize>(bytes: &[u8; N]) -> usize {
    bytes.iter().take_while(|b| **b == 0).count()
}

/* X = sum_i bytes[i] * 2^(8*(N-1-i))
Convert to 32-bit limbs:
  X = sum_i binary[i] * 2^(32*(BINARY_SZ-1-i)) */
#[inline(always)]
fn make_binary_array<const N: usize, const BINARY_SZ: usize>(bytes: &[u8; N]) -> [u32; BINARY_SZ] {
    from_fn(|i| {
        let idx = i * 4;
        u32::from_be_bytes([bytes[idx], bytes[idx + 1], bytes[idx + 2], bytes[idx + 3]])
    })
}

/// Adds `binary[i] * table[i]` into `intermediate[1..]` for every `i` in `rows`.
#[inline(always)]
fn add_binary_to_intermediate<
    const INTERMEDIATE_SZ: usize,
    const BINARY_SZ: usize,
    const TABLE_COLS: usize,
>(
    intermediate: &mut Intermediate<INTERMEDIATE_SZ>,
    binary: &[u32; BINARY_SZ],
    table: &[[u32; TABLE_COLS]; BINARY_SZ],
    rows: core::ops::Range<usize>,
) {
    for i in rows {
        let limb = binary[i] as u64;
        for (acc, multiplier) in intermediate.0[1..].iter_mut().zip(table[i]) {
            *acc += limb * multiplier as u64;
        }
    }
}

#[inline(always)]
fn adjust_intermediate_array<const INTERMEDIATE_SZ: usize>(
    intermediate: &mut Intermediate<INTERMEDIATE_SZ>,
) {
    /* Now we make sure each term is less than 58^5. Again, we have to be
    a bit careful of overflow.

    For N==32, in the worst case, intermediate[8] will be just over 2^63
    and intermediate[7] will be just over 2^62.6.  In the first step,
    we add floor(intermediate[8]/58^5) to intermediate[7], which barely
    moves it.

    For N==64, in the worst case, the biggest entry at this point is
    2^63.87, and in the worst case we add (2^64-1)/58^5, which is still
    about 2^63.87. */
    for i in (1..INTERMEDIATE_SZ).rev() {
        intermediate.0[i - 1] += intermediate.0[i] / R1DIV;
        intermediate.0[i] %= R1DIV;
    }
}

#[inline(always)]
fn make_intermediate_array_32(binary: &[u32; BINARY_SZ_32]) -> Intermediate<INTERMEDIATE_SZ_32> {
    /* Initially, we don't require intermediate[i] < 58^5, but we do want
    to make sure the sums don't overflow.  The worst case is
    binary[7] == 2^32-1, which leaves intermediate[8] just over 2^63. */
    let mut intermediate = Intermediate([0u64; INTERMEDIATE_SZ_32]);
    add_binary_to_intermediate(&mut intermediate, binary, &ENC_TABLE_32, 0..BINARY_SZ_32);
    adjust_intermediate_array(&mut intermediate);
    intermediate
}

#[inline(always)]
fn make_intermediate_array_64(binary: &[u32; BINARY_SZ_64]) -> Intermediate<INTERMEDIATE_SZ_64> {
    let mut intermediate = Intermediate([0u64; INTERMEDIATE_SZ_64]);

    /* Folding all 16 limbs in one go can overflow intermediate[16] for
    large inputs, so we reduce it once after the first 8 limbs.  After
    those, intermediate[16] is at most 2^63.87; the reduction brings it
    below 58^5 and the remaining limbs keep it under 2^63.1.
    intermediate[15] is at most 2^63.05 before the reduction, which
    adds at most 2^64/58^5, and it ends below 2^63.69. */
    add_binary_to_intermediate(&mut intermediate, binary, &ENC_TABLE_64, 0..8);
    intermediate.0[15] += intermediate.0[16] / R1DIV;
    intermediate.0[16] %= R1DIV;
    add_binary_to_intermediate(&mut intermediate, binary, &ENC_TABLE_64, 8..BINARY_SZ_64);

    adjust_intermediate_array(&mut intermediate);
    intermediate
}

/// Writes the text for `intermediate` to the front of `out` and returns
/// how many raw digits were skipped.
#[inline(always)]
fn intermediate_to_base58<const INTERMEDIATE_SZ: usize, const RAW58_SZ: usize>(
    intermediate: &Intermediate<INTERMEDIATE_SZ>,
    in_leading_0s: usize,
    out: &mut [u8],
) -> usize {
    /*  X = sum_i raw_base58[i] * 58^(RAW58_SZ-1-i) */
    let mut raw_base58 = [0u8; RAW58_SZ];
    for (digits, limb) in raw_base58.chunks_exact_mut(5).zip(intermediate.0) {
        /* limb < 58^5 < 2^32, so narrowing is lossless and keeps the
        divisions 32-bit. */
        let v = limb as u32;
        digits[4] = (v % 58) as u8;
        digits[3] = ((v / 58) % 58) as u8;
        digits[2] = ((v / 3364) % 58) as u8;
        digits[1] = ((v / 195112) % 58) as u8;
        digits[0] = (v / 11316496) as u8; /* We know this one is less than 58 */
    }
    /* Drop the leading zeros of raw_base58 and keep exactly in_leading_0s
    of them to become the leading '1's.

    In base b, X has floor(log_b X)+1 digits, so in_leading_0s =
    N-1-floor(log_256 X) and raw_leading_0s = RAW58_SZ-1-floor(log_58 X).
    For X < 256^N:

    raw_leading_0s - in_leading_0s
      =  RAW58_SZ-N + floor( log_256 X ) - floor( log_58 X )
      >= RAW58_SZ-N-1 + ( log_256 X - log_58 X )

    log_256 X - log_58 X decreases in X, so the bound is tightest at
    X = 256^N-1, where it gives skip >= 0.29 for N==32 (RAW58_SZ 45) and
    skip >= 1.59 for N==64 (RAW58_SZ 90).  The text therefore always fits
    in 44 and 88 bytes respectively. */
    let raw_leading_0s = raw_base58.iter().take_while(|d| **d == 0).count();
    let skip = raw_leading_0s - in_leading_0s;
    debug_assert!(RAW58_SZ - skip <= out.len());
    for (c, digit) in out.iter_mut().zip(&raw_base58[skip..]) {
        *c = BASE58_CHARS[*digit as usize];
    }
    skip
}

/// Encode a 32-byte array.
///
/// Writes the text to the front of `out` and returns how many bytes were
/// written. The rest of `out` is left untouched, so the result is
/// `out[..len as usize]`.
///
/// # Examples
/// ```
/// let mut buf = [0u8; 44];
/// let bytes = &[
///     225, 1, 118, 57, 196, 60, 117, 207, 131, 118, 39, 114, 43, 183, 110, 103, 209, 162, 104,
///     207, 202, 190, 194, 24, 165, 53, 95, 24, 51, 245, 133, 119,
/// ];
/// let len = fixed58::encode_32(bytes, &mut buf);
/// assert_eq!(&buf[..len as usize], b"G9L2SYsfcuFt3eQKHQwG7JVNztdv1bwLaPFAnm1v3Pre");
/// assert_eq!(len, 44);
/// ```
#[inline]
pub fn encode_32(bytes: &[u8; N_32], out: &mut [u8; BASE58_ENCODED_32_MAX_LEN]) -> u8 {
    let in_leading_0s = in_leading_0s(bytes);
    let binary = make_binary_array::<N_32, BINARY_SZ_32>(bytes);
    let intermediate = make_intermediate_array_32(&binary);
    let skip = intermediate_to_base58::<INTERMEDIATE_SZ_32, RAW58_SZ_32>(
        &intermediate,
        in_leading_0s,
        out,
    );
    (RAW58_SZ_32 - skip) as u8
}

/// Encode a 64-byte array.
///
/// Writes the text to the front of `out` and returns how many bytes were
/// written. The rest of `out` is left untouched, so the result is
/// `out[..len as usize]`.
///
/// # Examples
/// ```
/// let mut buf = [0u8; 88];
/// let bytes = &[
///     0, 0, 10, 85, 198, 191, 71, 18, 5, 54, 6, 255, 181, 32, 227, 150, 208, 3, 157, 135, 222,
///     67, 50, 23, 237, 51, 240, 123, 34, 148, 111, 84, 98, 162, 236, 133, 31, 93, 185, 142, 108,
///     41, 191, 1, 138, 6, 192, 0, 46, 93, 25, 65, 243, 223, 225, 225, 85, 55, 82, 251, 109, 132,
///     165, 2,
/// ];
/// let len = fixed58::encode_64(bytes, &mut buf);
/// assert_eq!(
///     &buf[..len as usize],
///     b"11cgTH4D5e8S3snD444WbbGrkepjTvWMj2jkmCGJtgn3H7qrPb1BnwapxpbGdRtHQh9t9Wbn9t6ZDGHzWpL4df"
/// );
/// assert_eq!(len, 86);
/// ```
#[inline]
pub fn encode_64(bytes: &[u8; N_64], out: &mut [u8; BASE58_ENCODED_64_MAX_LEN]) -> u8 {
    let in_leading_0s = in_leading_0s(bytes);
    let binary = make_binary_array::<N_64, BINARY_SZ_64>(bytes);
    let intermediate = make_intermediate_array_64(&binary);
    let skip = intermediate_to_base58::<INTERMEDIATE_SZ_64, RAW58_SZ_64>(
        &intermediate,
        in_leading_0s,
        out,
    );
    (RAW58_SZ_64 - skip) as u8
}

/// Encode a 32-byte array into a new `String`.
///
/// ```
/// assert_eq!(fixed58::encode_32_to_string(&[0; 32]), "1".repeat(32));
/// ```
#[cfg(feature = "alloc")]
pub fn encode_32_to_string(bytes: &[u8; N_32]) -> alloc::string::String {
    let mut buf = [0u8; BASE58_ENCODED_32_MAX_LEN];
    let len = encode_32(bytes, &mut buf);
    buf[..len as usize].iter().map(|c| *c as char).collect()
}

/// Encode a 64-byte array into a new `String`.
#[cfg(feature = "alloc")]
pub fn encode_64_to_string(bytes: &[u8; N_64]) -> alloc::string::String {
    let mut buf = [0u8; BASE58_ENCODED_64_MAX_LEN];
    let len = encode_64(bytes, &mut buf);
    buf[..len as usize].iter().map(|c| *c as char).collect()
}

#[cfg(test)]
mod tests {
    use crate::{decode_32, decode_64};
    use fixed58_const::{decode_32_const, decode_64_const};
    #[cfg(not(miri))]
    use prop::array::uniform32;
    #[cfg(not(miri))]
    use proptest::prelude::*;
    use std::string::String;

    use super::*;

    fn encode_32_to_string(bytes: &[u8; 32], buf: &mut [u8; BASE58_ENCODED_32_MAX_LEN]) -> String {
        let len = encode_32(bytes, buf);
        buf[..len as usize].iter().map(|c| *c as char).collect()
    }

    fn encode_64_to_string(bytes: &[u8; 64], buf: &mut [u8; BASE58_ENCODED_64_MAX_LEN]) -> String {
        let len = encode_64(bytes, buf);
        buf[..len as usize].iter().map(|c| *c as char).collect()
    }

    fn check_encode_decode_32(
        bytes: &[u8; 32],
        buf: &mut [u8; BASE58_ENCODED_32_MAX_LEN],
        encoded: &str,
    ) {
        assert_eq!(&encode_32_to_string(bytes, buf), encoded);
        let mut decoded = [0u8; 32];
        decode_32(encoded, &mut decoded).unwrap();
        assert_eq!(&decoded, bytes);
        assert_eq!(&decode_32_const(encoded), bytes);
    }

    fn check_encode_decode_64(
        bytes: &[u8; 64],
        buf: &mut [u8; BASE58_ENCODED_64_MAX_LEN],
        encoded: &str,
    ) {
        assert_eq!(&encode_64_to_string(bytes, buf), encoded);
        let mut decoded = [0u8; 64];
        decode_64(encoded, &mut decoded).unwrap();
        assert_eq!(&decoded, bytes);
        assert_eq!(&decode_64_const(encoded), bytes);
    }

    #[test]
    fn test_encode_decode_32() {
        let mut buf = [0u8; BASE58_ENCODED_32_MAX_LEN];
        let mut bytes = [0u8; 32];
        check_encode_decode_32(&bytes, &mut buf, "11111111111111111111111111111111");
        bytes[31] += 1;
        check_encode_decode_32(&bytes, &mut buf, "11111111111111111111111111111112");
        bytes[30] += 1;
        check_encode_decode_32(&bytes, &mut buf, "1111111111111111111111111111115S");
        let mut bytes = [255u8; 32];
        check_encode_decode_32(
            &bytes,
            &mut buf,
            "JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFG",
        );
        bytes[31] -= 1;
        check_encode_decode_32(
            &bytes,
            &mut buf,
            "JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFF",
        );
        let bytes = [1u8; 32];
        check_encode_decode_32(
            &bytes,
            &mut buf,
            "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi",
        );
    }

    #[test]
    fn test_reference_vector_32() {
        let bytes = [
            225, 1, 118, 57, 196, 60, 117, 207, 131, 118, 39, 114, 43, 183, 110, 103, 209, 162,
            104, 207, 202, 190, 194, 24, 165, 53, 95, 24, 51, 245, 133, 119,
        ];
        let mut buf = [0u8; BASE58_ENCODED_32_MAX_LEN];
        check_encode_decode_32(
            &bytes,
            &mut buf,
            "G9L2SYsfcuFt3eQKHQwG7JVNztdv1bwLaPFAnm1v3Pre",
        );
    }

    #[test]
    fn test_reference_vector_64() {
        let bytes = [
            28, 123, 237, 119, 222, 241, 46, 210, 51, 192, 180, 7, 20, 50, 209, 32, 208, 94, 170,
            188, 192, 98, 202, 12, 14, 242, 63, 118, 142, 225, 147, 147, 174, 253, 6, 142, 12, 172,
            66, 207, 254, 29, 84, 35, 22, 161, 190, 154, 109, 12, 191, 23, 95, 120, 140, 44, 51,
            57, 123, 40, 61, 186, 225, 5,
        ];
        let mut buf = [0u8; BASE58_ENCODED_64_MAX_LEN];
        check_encode_decode_64(
            &bytes,
            &mut buf,
            "a2kzMdVRfi2Q6oGKFC3ewWdpZfmGwNACGh3HJK4hsp8DeENS7wz4ZiwM4nJ4xr21EwVoa2TtHE87if7Paiv1aha",
        );
    }

    #[test]
    fn test_encode_decode_64() {
        let mut buf = [0u8; BASE58_ENCODED_64_MAX_LEN];
        let mut bytes = [0u8; 64];
        check_encode_decode_64(
            &bytes,
            &mut buf,
            "1111111111111111111111111111111111111111111111111111111111111111",
        );
        bytes[63] += 1;
        check_encode_decode_64(
            &bytes,
            &mut buf,
            "1111111111111111111111111111111111111111111111111111111111111112",
        );
        bytes[62] += 1;
        check_encode_decode_64(
            &bytes,
            &mut buf,
            "111111111111111111111111111111111111111111111111111111111111115S",
        );
        let mut bytes = [255; 64];
        check_encode_decode_64(
            &bytes,
            &mut buf,
            "67rpwLCuS5DGA8KGZXKsVQ7dnPb9goRLoKfgGbLfQg9WoLUgNY77E2jT11fem3coV9nAkguBACzrU1iyZM4B8roQ",
        );
        bytes[63] -= 1;
        check_encode_decode_64(
            &bytes,
            &mut buf,
            "67rpwLCuS5DGA8KGZXKsVQ7dnPb9goRLoKfgGbLfQg9WoLUgNY77E2jT11fem3coV9nAkguBACzrU1iyZM4B8roP",
        );
    }

    #[test]
    fn test_encode_leaves_tail_of_buffer_untouched() {
        let mut buf = [b'#'; BASE58_ENCODED_32_MAX_LEN];
        let len = encode_32(&[0u8; 32], &mut buf);
        assert_eq!(len, 32);
        assert!(buf[len as usize..].iter().all(|c| *c == b'#'));
    }

    #[test]
    fn test_make_binary_array_is_big_endian() {
        let bytes: [u8; 32] = from_fn(|i| i as u8);
        let binary = make_binary_array::<N_32, BINARY_SZ_32>(&bytes);
        assert_eq!(binary[0], 0x00010203);
        assert_eq!(binary[7], 0x1c1d1e1f);
    }

    #[test]
    fn test_intermediate_limbs_are_reduced() {
        let binary = [u32::MAX; BINARY_SZ_64];
        let intermediate = make_intermediate_array_64(&binary);
        assert!(intermediate.0.iter().all(|limb| *limb < R1DIV));
        let binary = [u32::MAX; BINARY_SZ_32];
        let intermediate = make_intermediate_array_32(&binary);
        assert!(intermediate.0.iter().all(|limb| *limb < R1DIV));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_encode_to_string() {
        assert_eq!(super::encode_32_to_string(&[0u8; 32]).len(), 32);
        assert_eq!(super::encode_64_to_string(&[0u8; 64]), "1".repeat(64));
        assert_eq!(
            super::encode_32_to_string(&[255u8; 32]),
            "JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFG"
        );
    }

    #[cfg(not(miri))]
    proptest! {
        #[test]
        fn proptest_encode_32(key in uniform32(0u8..)) {
            let bs58_res = bs58::encode(key).into_vec();
            let mut out = [0u8; BASE58_ENCODED_32_MAX_LEN];
            let len = encode_32(&key, &mut out);
            assert_eq!(bs58_res, out[..len as usize].to_vec());
        }
    }

    #[cfg(not(miri))]
    proptest! {
        #[test]
        fn proptest_encode_64(first_half in uniform32(0u8..), second_half in uniform32(0u8..)) {
            let mut combined = [0u8; 64];
            combined[..32].copy_from_slice(&first_half);
            combined[32..].copy_from_slice(&second_half);
            let bs58_res = bs58::encode(combined).into_vec();
            let mut out = [0u8; BASE58_ENCODED_64_MAX_LEN];
            let len = encode_64(&combined, &mut out);
            assert_eq!(bs58_res, out[..len as usize].to_vec());
        }
    }
}
