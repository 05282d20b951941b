//! Clarity value serialization.
//!
//! Every value is one type-prefix byte followed by its payload. The
//! hex forms used at the API boundary are `0x`-prefixed lowercase;
//! decoding additionally accepts unprefixed and uppercase input.

use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_CONTRACT_NAME_LEN, MAX_NESTING_DEPTH, MAX_VALUE_SIZE};
use crate::model::{ClarityName, PrincipalData, StandardPrincipal, TypePrefix, Value};
use crate::codec::primitives::{Reader, Writer};
use crate::util::{bytes_to_hex, hex_to_bytes};

/// Serializes a value to wire bytes.
pub fn encode_value(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(64);
    encode_into(value, &mut writer, 0)?;
    Ok(writer.into_bytes())
}

/// Serializes a value to a `0x`-prefixed lowercase hex string.
pub fn value_to_hex(value: &Value) -> Result<String, EncodeError> {
    let bytes = encode_value(value)?;
    Ok(format!("0x{}", bytes_to_hex(&bytes)))
}

fn encode_into(value: &Value, writer: &mut Writer, depth: usize) -> Result<(), EncodeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(EncodeError::DepthLimitExceeded {
            max: MAX_NESTING_DEPTH,
        });
    }
    writer.write_byte(value.type_prefix() as u8);
    match value {
        Value::Int(n) => writer.write_i128(*n),
        Value::UInt(n) => writer.write_u128(*n),
        Value::Bool(_) => {} // the prefix byte is the whole payload
        Value::Buffer(bytes) => {
            check_len("buffer", bytes.len())?;
            writer.write_bytes_prefixed(bytes);
        }
        Value::StringAscii(s) => {
            check_len("string-ascii", s.len())?;
            writer.write_bytes_prefixed(s.as_bytes());
        }
        Value::StringUtf8(s) => {
            check_len("string-utf8", s.len())?;
            writer.write_bytes_prefixed(s.as_bytes());
        }
        Value::Principal(principal) => encode_principal(principal, writer),
        Value::OptionalNone => {}
        Value::OptionalSome(inner) | Value::ResponseOk(inner) | Value::ResponseErr(inner) => {
            encode_into(inner, writer, depth + 1)?;
        }
        Value::List(items) => {
            check_len("list", items.len())?;
            writer.write_u32(items.len() as u32);
            for item in items {
                encode_into(item, writer, depth + 1)?;
            }
        }
        Value::Tuple(entries) => {
            check_len("tuple", entries.len())?;
            writer.write_u32(entries.len() as u32);
            for (name, field) in entries {
                writer.write_clarity_name(name);
                encode_into(field, writer, depth + 1)?;
            }
        }
    }
    Ok(())
}

fn encode_principal(principal: &PrincipalData, writer: &mut Writer) {
    match principal {
        PrincipalData::Standard(issuer) => {
            writer.write_byte(issuer.version);
            writer.write_bytes(&issuer.hash);
        }
        PrincipalData::Contract { issuer, name } => {
            writer.write_byte(issuer.version);
            writer.write_bytes(&issuer.hash);
            writer.write_clarity_name(name);
        }
    }
}

fn check_len(field: &'static str, len: usize) -> Result<(), EncodeError> {
    if len > MAX_VALUE_SIZE {
        return Err(EncodeError::LengthExceedsLimit {
            field,
            len,
            max: MAX_VALUE_SIZE,
        });
    }
    Ok(())
}

/// Deserializes a single value, leaving the reader positioned after it.
pub fn decode_value(reader: &mut Reader<'_>) -> Result<Value, DecodeError> {
    decode_at_depth(reader, 0)
}

/// Deserializes a value from hex, requiring the input to be fully consumed.
pub fn value_from_hex(hex: &str) -> Result<Value, DecodeError> {
    let bytes = hex_to_bytes(hex)?;
    let mut reader = Reader::new(&bytes);
    let value = decode_value(&mut reader)?;
    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: reader.remaining_len(),
        });
    }
    Ok(value)
}

fn decode_at_depth(reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(DecodeError::DepthLimitExceeded {
            max: MAX_NESTING_DEPTH,
        });
    }
    let byte = reader.read_byte("type prefix")?;
    let prefix =
        TypePrefix::from_u8(byte).ok_or(DecodeError::InvalidTypePrefix { prefix: byte })?;
    let value = match prefix {
        TypePrefix::Int => Value::Int(reader.read_i128("int")?),
        TypePrefix::UInt => Value::UInt(reader.read_u128("uint")?),
        TypePrefix::BoolTrue => Value::Bool(true),
        TypePrefix::BoolFalse => Value::Bool(false),
        TypePrefix::Buffer => Value::Buffer(reader.read_bytes_prefixed("buffer")?),
        TypePrefix::StringAscii => {
            let bytes = reader.read_bytes_prefixed("string-ascii")?;
            if !bytes.is_ascii() {
                return Err(DecodeError::NotAscii {
                    field: "string-ascii",
                });
            }
            // SAFETY: ASCII is always valid UTF-8
            Value::StringAscii(String::from_utf8(bytes).unwrap_or_default())
        }
        TypePrefix::StringUtf8 => {
            let bytes = reader.read_bytes_prefixed("string-utf8")?;
            let text = String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 {
                field: "string-utf8",
            })?;
            Value::StringUtf8(text)
        }
        TypePrefix::PrincipalStandard => {
            Value::Principal(PrincipalData::Standard(decode_standard(reader)?))
        }
        TypePrefix::PrincipalContract => {
            let issuer = decode_standard(reader)?;
            let name = reader.read_clarity_name("contract name")?;
            // Contract names are capped tighter than tuple fields; the
            // text parser enforces the same bound.
            if name.as_str().len() > MAX_CONTRACT_NAME_LEN {
                return Err(DecodeError::LengthExceedsLimit {
                    field: "contract name",
                    len: name.as_str().len(),
                    max: MAX_CONTRACT_NAME_LEN,
                });
            }
            Value::Principal(PrincipalData::Contract { issuer, name })
        }
        TypePrefix::OptionalNone => Value::OptionalNone,
        TypePrefix::OptionalSome => Value::some(decode_at_depth(reader, depth + 1)?),
        TypePrefix::ResponseOk => Value::ok(decode_at_depth(reader, depth + 1)?),
        TypePrefix::ResponseErr => Value::err(decode_at_depth(reader, depth + 1)?),
        TypePrefix::List => {
            let count = reader.read_length(MAX_VALUE_SIZE, "list")?;
            // Each element costs at least one prefix byte; reject a
            // count the remaining input cannot possibly satisfy.
            if count > reader.remaining_len() {
                return Err(DecodeError::UnexpectedEof { context: "list" });
            }
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(decode_at_depth(reader, depth + 1)?);
            }
            Value::List(items)
        }
        TypePrefix::Tuple => {
            let count = reader.read_length(MAX_VALUE_SIZE, "tuple")?;
            if count > reader.remaining_len() {
                return Err(DecodeError::UnexpectedEof { context: "tuple" });
            }
            let mut entries: Vec<(ClarityName, Value)> = Vec::with_capacity(count);
            for _ in 0..count {
                let name = reader.read_clarity_name("tuple field")?;
                let field = decode_at_depth(reader, depth + 1)?;
                entries.push((name, field));
            }
            Value::Tuple(entries)
        }
    };
    Ok(value)
}

fn decode_standard(reader: &mut Reader<'_>) -> Result<StandardPrincipal, DecodeError> {
    let version = reader.read_byte("principal version")?;
    let hash = reader.read_bytes(20, "principal hash")?;
    // SAFETY: read_bytes guarantees exactly 20 bytes, try_into always succeeds
    let hash: [u8; 20] = hash.try_into().unwrap_or_default();
    StandardPrincipal::new(version, hash)
        .map_err(|_| DecodeError::InvalidPrincipalVersion { version })
}

/// A decoded contract-call result, split at the response layer.
///
/// `ok` is true for `(ok v)`, false for `(err v)`; `value` is the
/// payload inside the response. A bare (non-response) value decodes
/// with `ok = true` and itself as the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResult {
    pub ok: bool,
    pub value: Value,
}

/// Decodes a read-only call's result hex, absorbing all failures.
///
/// Dashboards poll for state and render placeholders on any failure,
/// so this returns `None` instead of an error for malformed input.
pub fn decode_result_hex(hex: &str) -> Option<DecodedResult> {
    let value = value_from_hex(hex).ok()?;
    Some(match value {
        Value::ResponseOk(inner) => DecodedResult {
            ok: true,
            value: *inner,
        },
        Value::ResponseErr(inner) => DecodedResult {
            ok: false,
            value: *inner,
        },
        other => DecodedResult {
            ok: true,
            value: other,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TESTNET: &str = "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5";

    fn principal(text: &str) -> Value {
        Value::Principal(text.parse().unwrap())
    }

    fn assert_hex(value: &Value, expected: &str) {
        assert_eq!(value_to_hex(value).unwrap(), expected);
        assert_eq!(&value_from_hex(expected).unwrap(), value);
    }

    #[test]
    fn test_integers() {
        assert_hex(&Value::UInt(1000), "0x01000000000000000000000000000003e8");
        assert_hex(&Value::UInt(0), "0x0100000000000000000000000000000000");
        assert_hex(
            &Value::UInt(u128::MAX),
            "0x01ffffffffffffffffffffffffffffffff",
        );
        assert_hex(&Value::Int(-5), "0x00fffffffffffffffffffffffffffffffb");
        assert_hex(
            &Value::Int(i128::MIN),
            "0x0080000000000000000000000000000000",
        );
    }

    #[test]
    fn test_bools_and_optionals() {
        assert_hex(&Value::Bool(true), "0x03");
        assert_hex(&Value::Bool(false), "0x04");
        assert_hex(&Value::OptionalNone, "0x09");
        assert_hex(&Value::some(Value::Bool(true)), "0x0a03");
    }

    #[test]
    fn test_buffers_and_strings() {
        assert_hex(
            &Value::Buffer(vec![0xde, 0xad, 0xbe, 0xef]),
            "0x0200000004deadbeef",
        );
        assert_hex(
            &Value::StringAscii("swap".to_owned()),
            "0x0d0000000473776170",
        );
        assert_hex(
            &Value::StringUtf8("stäcks".to_owned()),
            "0x0e000000077374c3a4636b73",
        );
    }

    #[test]
    fn test_principals() {
        assert_hex(
            &principal(TESTNET),
            "0x051a7321b74e2b6a7e949e6c4ad313035b1665095017",
        );
        assert_hex(
            &principal(&format!("{TESTNET}.vault")),
            "0x061a7321b74e2b6a7e949e6c4ad313035b1665095017057661756c74",
        );
        assert_hex(
            &principal("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"),
            "0x0516a46ff88886c2ef9762d970b4d2c63678835bd39d",
        );
        assert_hex(
            &Value::some(principal(TESTNET)),
            "0x0a051a7321b74e2b6a7e949e6c4ad313035b1665095017",
        );
    }

    #[test]
    fn test_contract_name_capped_on_decode() {
        let issuer_hex = "1a7321b74e2b6a7e949e6c4ad313035b1665095017";
        let overlong = "a".repeat(50);
        let hex = format!(
            "0x06{issuer_hex}{:02x}{}",
            overlong.len(),
            bytes_to_hex(overlong.as_bytes())
        );
        assert!(matches!(
            value_from_hex(&hex),
            Err(DecodeError::LengthExceedsLimit { max: 40, .. })
        ));

        // a 40-byte name is accepted and round-trips through the text form
        let longest = "a".repeat(40);
        let hex = format!(
            "0x06{issuer_hex}{:02x}{}",
            longest.len(),
            bytes_to_hex(longest.as_bytes())
        );
        let value = value_from_hex(&hex).unwrap();
        let text = value.as_principal().unwrap().to_string();
        assert_eq!(
            text.parse::<PrincipalData>().unwrap(),
            *value.as_principal().unwrap()
        );
    }

    #[test]
    fn test_list() {
        assert_hex(
            &Value::List(vec![Value::UInt(1), Value::UInt(2)]),
            "0x0b0000000201000000000000000000000000000000010100000000000000000000000000000002",
        );
    }

    #[test]
    fn test_tuples_and_responses() {
        assert_hex(
            &Value::ok(Value::Tuple(vec![(
                "pool".parse().unwrap(),
                principal(&format!("{TESTNET}.amm-pool")),
            )])),
            "0x070c0000000104706f6f6c061a7321b74e2b6a7e949e6c4ad313035b166509501708616d6d2d706f6f6c",
        );
        assert_hex(
            &Value::ok(Value::Tuple(vec![
                ("reserve-a".parse().unwrap(), Value::UInt(100)),
                ("reserve-b".parse().unwrap(), Value::UInt(200)),
            ])),
            "0x070c0000000209726573657276652d61010000000000000000000000000000006409726573657276652d6201000000000000000000000000000000c8",
        );
        assert_hex(
            &Value::err(Value::UInt(401)),
            "0x080100000000000000000000000000000191",
        );
        assert_hex(
            &Value::some(Value::Tuple(vec![(
                "price".parse().unwrap(),
                Value::some(Value::UInt(42)),
            )])),
            "0x0a0c000000010570726963650a010000000000000000000000000000002a",
        );
    }

    #[test]
    fn test_decode_accepts_unprefixed_and_uppercase() {
        assert_eq!(
            value_from_hex("0100000000000000000000000000000001").unwrap(),
            Value::UInt(1)
        );
        assert_eq!(
            value_from_hex("0x0200000002DEAD").unwrap(),
            Value::Buffer(vec![0xde, 0xad])
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        // odd hex length
        assert!(matches!(
            value_from_hex("0x0"),
            Err(DecodeError::Hex(_))
        ));
        // unknown type prefix
        assert!(matches!(
            value_from_hex("0x0f"),
            Err(DecodeError::InvalidTypePrefix { prefix: 0x0f })
        ));
        // truncated uint payload
        assert!(matches!(
            value_from_hex("0x01000000"),
            Err(DecodeError::UnexpectedEof { .. })
        ));
        // trailing garbage after a complete value
        assert!(matches!(
            value_from_hex("0x03ff"),
            Err(DecodeError::TrailingBytes { remaining: 1 })
        ));
        // principal version out of range
        assert!(matches!(
            value_from_hex("0x05ff7321b74e2b6a7e949e6c4ad313035b1665095017"),
            Err(DecodeError::InvalidPrincipalVersion { version: 0xff })
        ));
        // non-ASCII bytes under the ascii prefix
        assert!(matches!(
            value_from_hex("0x0d00000001ff"),
            Err(DecodeError::NotAscii { .. })
        ));
        // list count larger than the remaining input could hold
        assert!(matches!(
            value_from_hex("0x0b00000010"),
            Err(DecodeError::UnexpectedEof { .. })
        ));
        // list count past the hard limit
        assert!(matches!(
            value_from_hex("0x0bffffffff"),
            Err(DecodeError::LengthExceedsLimit { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut deep = Value::UInt(0);
        for _ in 0..40 {
            deep = Value::some(deep);
        }
        assert!(matches!(
            encode_value(&deep),
            Err(EncodeError::DepthLimitExceeded { .. })
        ));

        // 40 nested `some` prefixes on the wire
        let hex = format!("0x{}03", "0a".repeat(40));
        assert!(matches!(
            value_from_hex(&hex),
            Err(DecodeError::DepthLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_decode_result_hex() {
        let ok = decode_result_hex("0x0701000000000000000000000000000009c4").unwrap();
        assert!(ok.ok);
        assert_eq!(ok.value.as_uint(), Some(2500));

        let err = decode_result_hex("0x080100000000000000000000000000000191").unwrap();
        assert!(!err.ok);
        assert_eq!(err.value.as_uint(), Some(401));

        // bare value counts as ok
        let bare = decode_result_hex("0x03").unwrap();
        assert!(bare.ok);
        assert_eq!(bare.value, Value::Bool(true));

        // all failure modes collapse to None
        assert_eq!(decode_result_hex(""), None);
        assert_eq!(decode_result_hex("0x0"), None);
        assert_eq!(decode_result_hex("0xzz"), None);
        assert_eq!(decode_result_hex("0x0f"), None);
        assert_eq!(decode_result_hex("0x03ff"), None);
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            any::<i128>().prop_map(Value::Int),
            any::<u128>().prop_map(Value::UInt),
            any::<bool>().prop_map(Value::Bool),
            prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Buffer),
            "[ -~]{0,32}".prop_map(Value::StringAscii),
            "\\PC{0,16}".prop_map(Value::StringUtf8),
            (0u8..32, prop::array::uniform20(any::<u8>())).prop_map(|(version, hash)| {
                Value::Principal(PrincipalData::Standard(StandardPrincipal {
                    version,
                    hash,
                }))
            }),
            Just(Value::OptionalNone),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                inner.clone().prop_map(Value::some),
                inner.clone().prop_map(Value::ok),
                inner.clone().prop_map(Value::err),
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
                prop::collection::vec(
                    ("[a-z][a-z0-9-]{0,12}".prop_map(|s| s.parse::<ClarityName>().unwrap()), inner),
                    0..4
                )
                .prop_map(Value::Tuple),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_roundtrip(value in arb_value()) {
            let hex = value_to_hex(&value).unwrap();
            prop_assert_eq!(value_from_hex(&hex).unwrap(), value);
        }

        #[test]
        fn prop_truncation_never_panics(value in arb_value(), cut in 0usize..64) {
            let bytes = encode_value(&value).unwrap();
            let cut = cut.min(bytes.len());
            let mut reader = Reader::new(&bytes[..bytes.len() - cut]);
            let _ = decode_value(&mut reader);
        }
    }
}
