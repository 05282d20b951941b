//! Wire codec: primitive reader/writer and value serialization.

pub mod primitives;
pub mod value;

pub use primitives::{Reader, Writer};
pub use value::{
    decode_result_hex, decode_value, encode_value, value_from_hex, value_to_hex, DecodedResult,
};
