//! Utility modules for clarity-args.

pub mod c32;
pub mod hex;

pub use c32::{c32_address, c32_address_decode};
pub use hex::{bytes_to_hex, hex_to_bytes};
