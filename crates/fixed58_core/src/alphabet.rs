pub const BASE58_CHARS: [u8; 58] = *b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub const BASE58_INVALID_CHAR: u8 = 255;
pub const BASE58_INVERSE_TABLE_OFFSET: u8 = b'1';
pub const BASE58_INVERSE_TABLE_SENTINEL: u8 = 1 + b'z' - BASE58_INVERSE_TABLE_OFFSET;

const BAD: u8 = BASE58_INVALID_CHAR;
/// Digit value of every byte from `'1'` to `'z'`, followed by the sentinel slot.
pub const BASE58_INVERSE: [u8; BASE58_INVERSE_TABLE_SENTINEL as usize + 1] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, BAD, BAD, BAD, BAD, BAD, BAD, BAD, 9, 10, 11, 12, 13, 14, 15, 16,
    BAD, 17, 18, 19, 20, 21, BAD, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, BAD, BAD, BAD, BAD,
    BAD, BAD, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, BAD, 44, 45, 46, 47, 48, 49, 50, 51, 52,
    53, 54, 55, 56, 57, BAD,
];

/// Returns the base58 digit value of `c`, or [`BASE58_INVALID_CHAR`].
///
/// Bytes below `'1'` wrap around and bytes above `'z'` are clamped, so both
/// land on the sentinel slot.
#[inline(always)]
pub const fn base58_digit(c: u8) -> u8 {
    let idx = c.wrapping_sub(BASE58_INVERSE_TABLE_OFFSET);
    let idx = if idx > BASE58_INVERSE_TABLE_SENTINEL {
        BASE58_INVERSE_TABLE_SENTINEL
    } else {
        idx
    };
    BASE58_INVERSE[idx as usize]
}
