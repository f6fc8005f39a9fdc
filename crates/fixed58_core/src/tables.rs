use crate::consts::{BINARY_SZ_32, BINARY_SZ_64, INTERMEDIATE_SZ_32, INTERMEDIATE_SZ_64};

// ENC_TABLE_32, ENC_TABLE_64, DEC_TABLE_32, DEC_TABLE_64
include!(concat!(env!("OUT_DIR"), "/tables.rs"));
