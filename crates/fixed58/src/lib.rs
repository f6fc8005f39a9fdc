#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]
#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod decode;
mod encode;
pub use decode::{decode_32, decode_32_to_array, decode_64, decode_64_to_array};
#[cfg(feature = "alloc")]
pub use encode::{encode_32_to_string, encode_64_to_string};
pub use encode::{encode_32, encode_64};
pub use fixed58_core::{DecodeError, BASE58_ENCODED_32_MAX_LEN, BASE58_ENCODED_64_MAX_LEN};
mod unlikely;
