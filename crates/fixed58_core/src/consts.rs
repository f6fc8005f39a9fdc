pub const N_32: usize = 32;
pub const N_64: usize = 64;
pub const BINARY_SZ_32: usize = N_32 / 4;
pub const BINARY_SZ_64: usize = N_64 / 4;
pub const INTERMEDIATE_SZ_32: usize = 9; /* Computed by ceil(log_(58^5) (256^32-1)) */
pub const INTERMEDIATE_SZ_64: usize = 18; /* Computed by ceil(log_(58^5) (256^64-1)) */
pub const RAW58_SZ_32: usize = INTERMEDIATE_SZ_32 * 5;
pub const RAW58_SZ_64: usize = INTERMEDIATE_SZ_64 * 5;
/// Longest possible encoding of a 32-byte array, `ceil(log_58(256^32 - 1))`.
pub const BASE58_ENCODED_32_MAX_LEN: usize = 44;
/// Longest possible encoding of a 64-byte array, `ceil(log_58(256^64 - 1))`.
pub const BASE58_ENCODED_64_MAX_LEN: usize = 88;
/// 58^5, the radix of one intermediate limb.
pub const R1DIV: u64 = 656356768;
