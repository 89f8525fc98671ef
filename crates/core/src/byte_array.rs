use strk_calldata_types::{Bytes31, CalldataValue};

/// A Cairo `ByteArray`: an arbitrary byte sequence split into full 31-byte
/// words plus a zero-padded pending word carrying the trailing `len % 31`
/// bytes.
///
/// The serialized form is positional: `data_len`, each full word, the pending
/// word, `pending_word_len`. The pending word is emitted even when it is
/// empty, otherwise the consuming constructor would misalign every following
/// argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArray {
    data: Vec<Bytes31>,
    pending_word: Bytes31,
    pending_word_len: usize,
}

impl ByteArray {
    /// Encodes a byte sequence. Total over all finite inputs: there is no
    /// content restriction, embedded NUL bytes included.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut chunks = bytes.chunks_exact(Bytes31::LEN);
        let data = chunks.by_ref().map(Bytes31::padded).collect();
        let pending = chunks.remainder();
        ByteArray {
            data,
            pending_word: Bytes31::padded(pending),
            pending_word_len: pending.len(),
        }
    }

    /// Full 31-byte words.
    pub fn data(&self) -> &[Bytes31] {
        &self.data
    }

    pub fn pending_word(&self) -> Bytes31 {
        self.pending_word
    }

    /// Number of meaningful bytes in the pending word, in `[0, 31)`.
    pub fn pending_word_len(&self) -> usize {
        self.pending_word_len
    }

    /// Reassembles the original byte sequence.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * Bytes31::LEN + self.pending_word_len);
        for word in &self.data {
            out.extend_from_slice(word.as_bytes());
        }
        out.extend_from_slice(&self.pending_word.as_bytes()[..self.pending_word_len]);
        out
    }

    /// Appends the positional serialization: `data_len`, the full words, the
    /// pending word, `pending_word_len`.
    pub fn extend_calldata(&self, out: &mut Vec<CalldataValue>) {
        out.push((self.data.len() as u64).into());
        for word in &self.data {
            out.push((*word).into());
        }
        out.push(self.pending_word.into());
        out.push((self.pending_word_len as u64).into());
    }
}

impl From<&str> for ByteArray {
    fn from(text: &str) -> Self {
        ByteArray::from_bytes(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn flattened(bytes: &[u8]) -> Vec<CalldataValue> {
        let mut out = Vec::new();
        ByteArray::from_bytes(bytes).extend_calldata(&mut out);
        out
    }

    #[test_case(0; "empty")]
    #[test_case(1; "single byte")]
    #[test_case(6; "short symbol")]
    #[test_case(30; "one short of a word")]
    #[test_case(31; "exactly one word")]
    #[test_case(32; "one word plus one")]
    #[test_case(62; "exactly two words")]
    #[test_case(100; "several words")]
    fn length_arithmetic_and_round_trip(len: usize) {
        let input: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let encoded = ByteArray::from_bytes(&input);

        assert_eq!(encoded.data().len(), len / 31);
        assert_eq!(encoded.pending_word_len(), len % 31);
        assert_eq!(
            encoded.data().len() * 31 + encoded.pending_word_len(),
            len
        );
        assert_eq!(encoded.bytes(), input);
    }

    #[test]
    fn short_symbol_lives_entirely_in_the_pending_word() {
        let encoded = ByteArray::from_bytes(b"NVwBTC");
        assert!(encoded.data().is_empty());
        assert_eq!(encoded.pending_word_len(), 6);
        assert_eq!(
            encoded.pending_word().to_string(),
            "0x4e567742544300000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn exact_multiple_still_emits_a_zero_pending_word() {
        let input = [0x61u8; 31];
        let encoded = ByteArray::from_bytes(&input);
        assert_eq!(encoded.data().len(), 1);
        assert_eq!(encoded.data()[0].as_bytes(), &input);
        assert_eq!(encoded.pending_word_len(), 0);
        assert_eq!(encoded.pending_word(), Bytes31::ZERO);

        // The degenerate pending word still occupies its two positions.
        let values = flattened(&input);
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], CalldataValue::Int(1));
        assert_eq!(values[2], CalldataValue::Word(Bytes31::ZERO));
        assert_eq!(values[3], CalldataValue::Int(0));
    }

    #[test]
    fn empty_input_flattens_to_three_values() {
        let values = flattened(b"");
        assert_eq!(
            values,
            vec![
                CalldataValue::Int(0),
                CalldataValue::Word(Bytes31::ZERO),
                CalldataValue::Int(0),
            ]
        );
    }

    #[test]
    fn multi_word_input_emits_words_in_order() {
        let mut input = Vec::new();
        input.extend_from_slice(&[0x11u8; 31]);
        input.extend_from_slice(&[0x22u8; 31]);
        input.extend_from_slice(b"tail");

        let values = flattened(&input);
        assert_eq!(values[0], CalldataValue::Int(2));
        assert_eq!(values[1], CalldataValue::Word(Bytes31::padded(&[0x11; 31])));
        assert_eq!(values[2], CalldataValue::Word(Bytes31::padded(&[0x22; 31])));
        assert_eq!(values[3], CalldataValue::Word(Bytes31::padded(b"tail")));
        assert_eq!(values[4], CalldataValue::Int(4));
    }

    #[test]
    fn embedded_nul_bytes_are_preserved() {
        let input = b"a\x00b\x00c";
        let encoded = ByteArray::from_bytes(input);
        assert_eq!(encoded.bytes(), input);
        assert_eq!(encoded.pending_word_len(), 5);
    }
}
