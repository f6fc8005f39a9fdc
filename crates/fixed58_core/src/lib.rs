#![doc = include_str!("../README.md")]
#![no_std]
mod alphabet;
mod consts;
mod error;
mod tables;

pub use alphabet::{
    base58_digit, BASE58_CHARS, BASE58_INVALID_CHAR, BASE58_INVERSE,
    BASE58_INVERSE_TABLE_OFFSET, BASE58_INVERSE_TABLE_SENTINEL,
};
pub use consts::{
    BASE58_ENCODED_32_MAX_LEN, BASE58_ENCODED_64_MAX_LEN, BINARY_SZ_32, BINARY_SZ_64,
    INTERMEDIATE_SZ_32, INTERMEDIATE_SZ_64, N_32, N_64, R1DIV, RAW58_SZ_32, RAW58_SZ_64,
};
pub use error::DecodeError;
pub use tables::{DEC_TABLE_32, DEC_TABLE_64, ENC_TABLE_32, ENC_TABLE_64};
