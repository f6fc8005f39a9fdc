/// Reasons a base58 string is rejected by the decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The string is longer than any encoding of the target width.
    InvalidLength,
    /// `byte` at zero-based `position` is not in the base58 alphabet.
    InvalidChar { position: usize, byte: u8 },
    /// The encoded number does not fit in the target width.
    NumericOverflow,
    /// The number of leading `'1'`s differs from the number of leading zero
    /// bytes in the decoded value.
    NonCanonical,
}

impl core::error::Error for DecodeError {}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            DecodeError::InvalidLength => formatter.write_str("Base58 string too long"),
            DecodeError::InvalidChar { position, byte } => {
                ::core::write!(
                    formatter,
                    "Illegal base58 char number {} at position {}",
                    byte,
                    position
                )
            }
            DecodeError::NumericOverflow => {
                formatter.write_str("Decoded value does not fit in the output array")
            }
            DecodeError::NonCanonical => formatter
                .write_str("Leading '1' count does not match the leading zero byte count"),
        }
    }
}
