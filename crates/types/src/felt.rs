use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Starknet field modulus `p = 2^251 + 17 * 2^192 + 1`, big-endian.
const FIELD_MODULUS: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x01,
];

/// A Starknet field element, stored as 32 big-endian bytes.
///
/// Every positional calldata value ultimately travels as a felt; this type
/// carries addresses, class hashes and pool identifiers. A felt remembers the
/// hex width it was written with, so a full-width address like `0x03fe…`
/// keeps its leading zero on output while a short identifier stays short.
/// Equality and hashing consider only the numeric value.
#[derive(Copy, Clone)]
pub struct Felt {
    bytes: [u8; 32],
    /// Hex digit count of the source string; 0 for felts built from
    /// integers, which render at minimal width.
    width: u8,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FeltParseError {
    #[error("felt hex string is empty")]
    Empty,
    #[error("felt hex string has {0} digits, maximum is 64")]
    TooLong(usize),
    #[error("invalid hex digit in felt string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("value does not fit in the Starknet field")]
    Overflow,
}

impl Felt {
    pub const ZERO: Felt = Felt {
        bytes: [0u8; 32],
        width: 0,
    };

    /// Parses an optionally `0x`-prefixed hex string. Odd-length strings are
    /// accepted and left-padded with a zero nibble. The digit count is
    /// retained for display.
    pub fn from_hex(s: &str) -> Result<Self, FeltParseError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            return Err(FeltParseError::Empty);
        }
        if digits.len() > 64 {
            return Err(FeltParseError::TooLong(digits.len()));
        }
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_owned()
        };
        let decoded = hex::decode(padded)?;
        let mut bytes = [0u8; 32];
        bytes[32 - decoded.len()..].copy_from_slice(&decoded);
        if bytes >= FIELD_MODULUS {
            return Err(FeltParseError::Overflow);
        }
        Ok(Felt {
            bytes,
            width: digits.len() as u8,
        })
    }

    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Felt { bytes, width: 0 }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = hex::encode(self.bytes);
        if self.width > 0 {
            // Reproduce the width the value was written with.
            return write!(f, "0x{}", &encoded[64 - self.width as usize..]);
        }
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            f.write_str("0x0")
        } else {
            write!(f, "0x{trimmed}")
        }
    }
}

impl fmt::Debug for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({self})")
    }
}

impl PartialEq for Felt {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Felt {}

impl Hash for Felt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl FromStr for Felt {
    type Err = FeltParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Felt::from_hex(s)
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Felt::from_u64(value)
    }
}

impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = Deserialize::deserialize(deserializer)?;
        Felt::from_hex(&s).map_err(D::Error::custom)
    }
}
