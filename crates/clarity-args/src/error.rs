//! Error types for argument parsing and value encoding/decoding.

use thiserror::Error;

/// Error while interpreting a hex string as bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex string has odd length {len}")]
    OddLength { len: usize },

    #[error("invalid hex digit {byte:#04x} at offset {offset}")]
    InvalidDigit { byte: u8, offset: usize },
}

/// Error while interpreting a c32check address string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address does not start with 'S'")]
    MissingPrefix,

    #[error("address is too short to carry a version and checksum")]
    TooShort,

    #[error("invalid c32 character {char:?}")]
    InvalidCharacter { char: char },

    #[error("principal version {version} out of range (must be < 32)")]
    InvalidVersion { version: u8 },

    #[error("address payload is {len} bytes, expected 20")]
    BadHashLength { len: usize },

    #[error("address checksum mismatch")]
    ChecksumMismatch,
}

/// Error while parsing a row's raw text against its declared kind.
///
/// These are row-local: one bad row never aborts encoding of its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{input:?} is not a valid integer literal")]
    IntLiteral { input: String },

    #[error("{input:?} does not fit in a 128-bit integer")]
    IntOutOfRange { input: String },

    #[error("{input:?} is negative but the declared kind is unsigned")]
    UintNegative { input: String },

    #[error("ascii string contains non-ASCII characters")]
    NotAscii,

    #[error("invalid name {name:?}")]
    InvalidName { name: String },

    #[error("unknown value kind label {label:?}")]
    UnknownKind { label: String },

    #[error("malformed hex buffer: {0}")]
    Hex(#[from] HexError),

    #[error("malformed principal: {0}")]
    Address(#[from] AddressError),
}

/// Error during binary encoding of a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("value nesting exceeds maximum depth {max}")]
    DepthLimitExceeded { max: usize },
}

/// Error during binary decoding of a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("invalid type prefix {prefix:#04x}")]
    InvalidTypePrefix { prefix: u8 },

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("non-ASCII bytes in {field}")]
    NotAscii { field: &'static str },

    #[error("invalid clarity name {name:?}")]
    InvalidClarityName { name: String },

    #[error("principal version {version} out of range (must be < 32)")]
    InvalidPrincipalVersion { version: u8 },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("value nesting exceeds maximum depth {max}")]
    DepthLimitExceeded { max: usize },

    #[error("{remaining} trailing bytes after value")]
    TrailingBytes { remaining: usize },

    #[error("malformed hex input: {0}")]
    Hex(#[from] HexError),
}
