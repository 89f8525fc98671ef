mod bytes31;
mod calldata;
mod felt;

pub use self::{
    bytes31::Bytes31,
    calldata::CalldataValue,
    felt::{Felt, FeltParseError},
};
