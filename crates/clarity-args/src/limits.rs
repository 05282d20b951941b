//! Security limits for decoding untrusted input.
//!
//! Responses come back from a remote chain API; every length prefix is
//! bounded before allocation and nesting depth is capped on both the
//! encode and decode paths.

/// Maximum serialized size of a single value (1 MiB, the Clarity cap).
pub const MAX_VALUE_SIZE: usize = 1_048_576;

/// Maximum nesting depth of optionals, responses, lists, and tuples.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Maximum length of a tuple-field name in bytes.
pub const MAX_CLARITY_NAME_LEN: usize = 128;

/// Maximum length of a contract name in bytes.
pub const MAX_CONTRACT_NAME_LEN: usize = 40;
