use std::fmt;

/// One Cairo `bytes31` word: up to 31 bytes of payload, zero-padded on the
/// right. Unlike [`Felt`](crate::Felt), a `Bytes31` always displays at its
/// full 62-hex-digit width because the padding is part of the wire layout of
/// a serialized `ByteArray` chunk.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bytes31([u8; 31]);

impl Bytes31 {
    pub const LEN: usize = 31;

    pub const ZERO: Bytes31 = Bytes31([0u8; 31]);

    /// Builds a word from at most 31 bytes, right-padding with zeros.
    ///
    /// # Panics
    /// Panics if `chunk` is longer than 31 bytes.
    pub fn padded(chunk: &[u8]) -> Self {
        assert!(
            chunk.len() <= Self::LEN,
            "bytes31 chunk is {} bytes, maximum is {}",
            chunk.len(),
            Self::LEN
        );
        let mut buf = [0u8; 31];
        buf[..chunk.len()].copy_from_slice(chunk);
        Bytes31(buf)
    }

    pub fn as_bytes(&self) -> &[u8; 31] {
        &self.0
    }
}

impl fmt::Display for Bytes31 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Bytes31 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes31({self})")
    }
}
