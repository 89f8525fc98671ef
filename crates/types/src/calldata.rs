use crate::{Bytes31, Felt};
use std::fmt;

/// One positional constructor argument.
///
/// Meaning is carried entirely by position in the flat list, so the type only
/// needs to know how each value renders: felts as minimal hex, byte-array
/// words at full width, counters and lengths as decimal integers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CalldataValue {
    Felt(Felt),
    Word(Bytes31),
    Int(u64),
}

impl fmt::Display for CalldataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalldataValue::Felt(felt) => felt.fmt(f),
            CalldataValue::Word(word) => word.fmt(f),
            CalldataValue::Int(n) => n.fmt(f),
        }
    }
}

impl From<Felt> for CalldataValue {
    fn from(felt: Felt) -> Self {
        CalldataValue::Felt(felt)
    }
}

impl From<Bytes31> for CalldataValue {
    fn from(word: Bytes31) -> Self {
        CalldataValue::Word(word)
    }
}

impl From<u64> for CalldataValue {
    fn from(n: u64) -> Self {
        CalldataValue::Int(n)
    }
}
