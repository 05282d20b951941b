//! Primitive encoding/decoding for the Clarity wire format.
//!
//! All multi-byte integers and length prefixes are big-endian.

use crate::error::DecodeError;
use crate::limits::{MAX_CLARITY_NAME_LEN, MAX_VALUE_SIZE};
use crate::model::ClarityName;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a big-endian u32, the wire format's length prefix.
    #[inline]
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4, context)?;
        // SAFETY: read_bytes guarantees exactly 4 bytes, try_into always succeeds
        Ok(u32::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Reads a big-endian u128.
    #[inline]
    pub fn read_u128(&mut self, context: &'static str) -> Result<u128, DecodeError> {
        let bytes = self.read_bytes(16, context)?;
        // SAFETY: read_bytes guarantees exactly 16 bytes, try_into always succeeds
        Ok(u128::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Reads a big-endian two's-complement i128.
    #[inline]
    pub fn read_i128(&mut self, context: &'static str) -> Result<i128, DecodeError> {
        let bytes = self.read_bytes(16, context)?;
        // SAFETY: read_bytes guarantees exactly 16 bytes, try_into always succeeds
        Ok(i128::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Reads a u32 length prefix, bounded by both `max_len` and the
    /// bytes actually remaining so a hostile prefix cannot force a
    /// huge allocation.
    pub fn read_length(&mut self, max_len: usize, field: &'static str) -> Result<usize, DecodeError> {
        let len = self.read_u32(field)? as usize;
        if len > max_len {
            return Err(DecodeError::LengthExceedsLimit {
                field,
                len,
                max: max_len,
            });
        }
        Ok(len)
    }

    /// Reads a name with a 1-byte length prefix, as used for tuple
    /// fields and contract names.
    pub fn read_clarity_name(&mut self, field: &'static str) -> Result<ClarityName, DecodeError> {
        let len = self.read_byte(field)? as usize;
        if len > MAX_CLARITY_NAME_LEN {
            return Err(DecodeError::LengthExceedsLimit {
                field,
                len,
                max: MAX_CLARITY_NAME_LEN,
            });
        }
        let bytes = self.read_bytes(len, field)?;
        let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { field })?;
        text.parse().map_err(|_| DecodeError::InvalidClarityName {
            name: text.to_owned(),
        })
    }

    /// Reads a byte array with a u32 length prefix.
    pub fn read_bytes_prefixed(
        &mut self,
        field: &'static str,
    ) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_length(MAX_VALUE_SIZE, field)?;
        let bytes = self.read_bytes(len, field)?;
        Ok(bytes.to_vec())
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a big-endian u32.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian u128.
    #[inline]
    pub fn write_u128(&mut self, value: u128) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian two's-complement i128.
    #[inline]
    pub fn write_i128(&mut self, value: i128) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a name with a 1-byte length prefix.
    ///
    /// Names are validated at construction to be at most 128 bytes, so
    /// the length always fits.
    pub fn write_clarity_name(&mut self, name: &ClarityName) {
        let bytes = name.as_str().as_bytes();
        self.buf.push(bytes.len() as u8);
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a byte array with a u32 length prefix.
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) {
        self.write_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_roundtrip() {
        for v in [0u32, 1, 255, 256, 65535, u32::MAX] {
            let mut writer = Writer::new();
            writer.write_u32(v);
            assert_eq!(writer.len(), 4);

            let mut reader = Reader::new(writer.as_bytes());
            assert_eq!(reader.read_u32("test").unwrap(), v);
        }
    }

    #[test]
    fn test_u32_is_big_endian() {
        let mut writer = Writer::new();
        writer.write_u32(0x0000_03e8);
        assert_eq!(writer.as_bytes(), &[0x00, 0x00, 0x03, 0xe8]);
    }

    #[test]
    fn test_u128_roundtrip() {
        for v in [0u128, 1000, u128::MAX] {
            let mut writer = Writer::new();
            writer.write_u128(v);
            assert_eq!(writer.len(), 16);

            let mut reader = Reader::new(writer.as_bytes());
            assert_eq!(reader.read_u128("test").unwrap(), v);
        }
    }

    #[test]
    fn test_i128_twos_complement() {
        let mut writer = Writer::new();
        writer.write_i128(-5);
        assert_eq!(
            writer.as_bytes(),
            &crate::util::hex_to_bytes("fffffffffffffffffffffffffffffffb").unwrap()[..]
        );

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_i128("test").unwrap(), -5);
    }

    #[test]
    fn test_clarity_name_roundtrip() {
        let name: ClarityName = "reserve-a".parse().unwrap();
        let mut writer = Writer::new();
        writer.write_clarity_name(&name);
        assert_eq!(writer.as_bytes()[0], 9);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_clarity_name("test").unwrap(), name);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_invalid_name_rejected() {
        // length 2, bytes "1a": not a valid identifier
        let data = [0x02, b'1', b'a'];
        let mut reader = Reader::new(&data);
        assert!(matches!(
            reader.read_clarity_name("test"),
            Err(DecodeError::InvalidClarityName { .. })
        ));
    }

    #[test]
    fn test_length_bounded() {
        let mut writer = Writer::new();
        writer.write_u32(1000);

        let mut reader = Reader::new(writer.as_bytes());
        assert!(matches!(
            reader.read_length(100, "test"),
            Err(DecodeError::LengthExceedsLimit { max: 100, .. })
        ));
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        assert!(matches!(
            reader.read_bytes(10, "test"),
            Err(DecodeError::UnexpectedEof { .. })
        ));
        let mut reader = Reader::new(&data);
        assert!(matches!(
            reader.read_u128("test"),
            Err(DecodeError::UnexpectedEof { .. })
        ));
    }
}
