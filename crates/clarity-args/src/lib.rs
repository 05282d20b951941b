//! Clarity value codec and contract-call argument builder.
//!
//! This crate provides the typed-value plumbing a Stacks dashboard
//! needs around read-only contract calls: encoding user-entered
//! arguments to consensus-serialized hex, and decoding result hex back
//! into a typed value tree.
//!
//! # Overview
//!
//! Three layers build on each other:
//! - A typed value model covering everything the wire format carries
//! - An encoder/decoder for the Clarity consensus serialization
//!   (1-byte type prefix + big-endian payload)
//! - A row-based argument builder that re-derives encodings on every
//!   edit and keeps failures row-local
//!
//! # Quick Start
//!
//! ```rust
//! use clarity_args::{ArgBuilder, BaseKind, ValueKind};
//! use clarity_args::codec::decode_result_hex;
//!
//! // Build arguments for a read-only call
//! let mut builder = ArgBuilder::new();
//! builder.add_row_with(ValueKind::Base(BaseKind::UInt), "1000");
//! builder.add_row_with(ValueKind::Base(BaseKind::Bool), "true");
//!
//! let args = builder.hex_args().unwrap();
//! assert_eq!(args[0], "0x01000000000000000000000000000003e8");
//!
//! // Decode the call's result
//! let result = decode_result_hex("0x0701000000000000000000000000000009c4").unwrap();
//! assert!(result.ok);
//! assert_eq!(result.value.as_uint(), Some(2500));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Value, ValueKind, PrincipalData)
//! - [`codec`]: Binary encoding/decoding and hex conversion
//! - [`args`]: Argument rows, parsing, and the list builder
//! - [`util`]: Hex and c32check address helpers
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! Result hex comes from a remote chain API and is treated as
//! untrusted: every length prefix is bounded before allocation,
//! nesting depth is capped, and the read path never panics on
//! malformed input.

pub mod args;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;

// Re-export commonly used types at crate root
pub use args::{ArgBuilder, ArgumentRow, BuiltArg, PresetArg, RowError, RowId, RowPatch, parse_value};
pub use codec::{decode_result_hex, value_from_hex, value_to_hex, DecodedResult};
pub use error::{AddressError, DecodeError, EncodeError, HexError, ParseError};
pub use model::{
    BaseKind, ClarityName, OptionalMode, PrincipalData, StandardPrincipal, TypePrefix, Value,
    ValueKind,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
