//! Encoding and assembly of the vault constructor calldata.
//!
//! The only real algorithm here is the Cairo `ByteArray` serialization in
//! [`byte_array`]; [`assembler`] flattens the configured arguments into the
//! positional list and [`command`] wraps that list into the `sncast` argv.

pub mod assembler;
pub mod byte_array;
pub mod command;

pub use assembler::{build_constructor_calldata, render_calldata_file};
pub use byte_array::ByteArray;
pub use command::sncast_deploy_command;
