//! The typed value tree.
//!
//! [`Value`] covers everything the wire format can carry. The builder
//! only ever constructs the seven base kinds plus optionals, but the
//! decode path must handle whatever a contract returns, so responses,
//! lists, and tuples are first-class here.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::limits::MAX_CLARITY_NAME_LEN;
use crate::model::principal::PrincipalData;

/// A validated Clarity identifier, used for tuple fields and contract names.
///
/// Non-empty ASCII, at most 128 bytes, first character alphabetic, the
/// rest alphanumeric or one of `- _ ! ? + < > = / *`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClarityName(String);

impl ClarityName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(s: &str) -> bool {
        if s.is_empty() || s.len() > MAX_CLARITY_NAME_LEN {
            return false;
        }
        let mut chars = s.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '!' | '?' | '+' | '<' | '>' | '=' | '/' | '*')
        })
    }
}

impl fmt::Display for ClarityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClarityName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(ClarityName(s.to_owned()))
        } else {
            Err(ParseError::InvalidName { name: s.to_owned() })
        }
    }
}

impl AsRef<str> for ClarityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wire type prefix, the first byte of every serialized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypePrefix {
    Int = 0x00,
    UInt = 0x01,
    Buffer = 0x02,
    BoolTrue = 0x03,
    BoolFalse = 0x04,
    PrincipalStandard = 0x05,
    PrincipalContract = 0x06,
    ResponseOk = 0x07,
    ResponseErr = 0x08,
    OptionalNone = 0x09,
    OptionalSome = 0x0a,
    List = 0x0b,
    Tuple = 0x0c,
    StringAscii = 0x0d,
    StringUtf8 = 0x0e,
}

impl TypePrefix {
    pub fn from_u8(byte: u8) -> Option<TypePrefix> {
        match byte {
            0x00 => Some(TypePrefix::Int),
            0x01 => Some(TypePrefix::UInt),
            0x02 => Some(TypePrefix::Buffer),
            0x03 => Some(TypePrefix::BoolTrue),
            0x04 => Some(TypePrefix::BoolFalse),
            0x05 => Some(TypePrefix::PrincipalStandard),
            0x06 => Some(TypePrefix::PrincipalContract),
            0x07 => Some(TypePrefix::ResponseOk),
            0x08 => Some(TypePrefix::ResponseErr),
            0x09 => Some(TypePrefix::OptionalNone),
            0x0a => Some(TypePrefix::OptionalSome),
            0x0b => Some(TypePrefix::List),
            0x0c => Some(TypePrefix::Tuple),
            0x0d => Some(TypePrefix::StringAscii),
            0x0e => Some(TypePrefix::StringUtf8),
            _ => None,
        }
    }
}

/// A Clarity value.
///
/// Tuples keep their wire order; field lookup is by linear scan since
/// contract return tuples are small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i128),
    UInt(u128),
    Bool(bool),
    Buffer(Vec<u8>),
    StringAscii(String),
    StringUtf8(String),
    Principal(PrincipalData),
    OptionalNone,
    OptionalSome(Box<Value>),
    ResponseOk(Box<Value>),
    ResponseErr(Box<Value>),
    List(Vec<Value>),
    Tuple(Vec<(ClarityName, Value)>),
}

impl Value {
    pub fn some(value: Value) -> Value {
        Value::OptionalSome(Box::new(value))
    }

    pub fn ok(value: Value) -> Value {
        Value::ResponseOk(Box::new(value))
    }

    pub fn err(value: Value) -> Value {
        Value::ResponseErr(Box::new(value))
    }

    pub fn type_prefix(&self) -> TypePrefix {
        match self {
            Value::Int(_) => TypePrefix::Int,
            Value::UInt(_) => TypePrefix::UInt,
            Value::Bool(true) => TypePrefix::BoolTrue,
            Value::Bool(false) => TypePrefix::BoolFalse,
            Value::Buffer(_) => TypePrefix::Buffer,
            Value::StringAscii(_) => TypePrefix::StringAscii,
            Value::StringUtf8(_) => TypePrefix::StringUtf8,
            Value::Principal(PrincipalData::Standard(_)) => TypePrefix::PrincipalStandard,
            Value::Principal(PrincipalData::Contract { .. }) => TypePrefix::PrincipalContract,
            Value::OptionalNone => TypePrefix::OptionalNone,
            Value::OptionalSome(_) => TypePrefix::OptionalSome,
            Value::ResponseOk(_) => TypePrefix::ResponseOk,
            Value::ResponseErr(_) => TypePrefix::ResponseErr,
            Value::List(_) => TypePrefix::List,
            Value::Tuple(_) => TypePrefix::Tuple,
        }
    }

    /// Looks up a tuple field by name. Returns `None` when this is not
    /// a tuple or the field is absent.
    pub fn tuple_field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Tuple(entries) => entries
                .iter()
                .find(|(field, _)| field.as_str() == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u128> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            Value::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_ascii(&self) -> Option<&str> {
        match self {
            Value::StringAscii(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_utf8(&self) -> Option<&str> {
        match self {
            Value::StringUtf8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_principal(&self) -> Option<&PrincipalData> {
        match self {
            Value::Principal(p) => Some(p),
            _ => None,
        }
    }

    /// Unwraps one optional layer: `Some(Some(v))` for `(some v)`,
    /// `Some(None)` for `none`, `None` for non-optional values.
    pub fn as_optional(&self) -> Option<Option<&Value>> {
        match self {
            Value::OptionalSome(inner) => Some(Some(inner)),
            Value::OptionalNone => Some(None),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}
