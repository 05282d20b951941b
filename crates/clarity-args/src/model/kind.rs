//! Value kinds as selected in an argument row.
//!
//! A row declares a [`ValueKind`]: either a base kind or an optional
//! wrapping of one. The optional-none variant still carries the base
//! kind it would wrap, so toggling a row between none and some never
//! loses the underlying type selection.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// The seven encodable base kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    UInt,
    Int,
    Bool,
    Principal,
    StringAscii,
    StringUtf8,
    Buffer,
}

impl BaseKind {
    pub const ALL: [BaseKind; 7] = [
        BaseKind::UInt,
        BaseKind::Int,
        BaseKind::Bool,
        BaseKind::Principal,
        BaseKind::StringAscii,
        BaseKind::StringUtf8,
        BaseKind::Buffer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BaseKind::UInt => "uint",
            BaseKind::Int => "int",
            BaseKind::Bool => "bool",
            BaseKind::Principal => "principal",
            BaseKind::StringAscii => "string-ascii",
            BaseKind::StringUtf8 => "string-utf8",
            BaseKind::Buffer => "buffer",
        }
    }
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BaseKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uint" => Ok(BaseKind::UInt),
            "int" => Ok(BaseKind::Int),
            "bool" => Ok(BaseKind::Bool),
            "principal" => Ok(BaseKind::Principal),
            "string-ascii" | "ascii" => Ok(BaseKind::StringAscii),
            "string-utf8" | "utf8" => Ok(BaseKind::StringUtf8),
            "buffer" | "buffer-hex" => Ok(BaseKind::Buffer),
            _ => Err(ParseError::UnknownKind {
                label: s.to_owned(),
            }),
        }
    }
}

/// Which optional constructor a row encodes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalMode {
    /// Encode `none`; the row's raw text is ignored.
    None,
    /// Encode `(some v)` where `v` parses as the base kind.
    Some,
}

/// A row's full kind selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Base(BaseKind),
    OptionalNone(BaseKind),
    OptionalSome(BaseKind),
}

impl ValueKind {
    pub fn is_optional(&self) -> bool {
        !matches!(self, ValueKind::Base(_))
    }

    /// The base kind underneath any optional wrapping.
    pub fn base_kind(&self) -> BaseKind {
        match *self {
            ValueKind::Base(base)
            | ValueKind::OptionalNone(base)
            | ValueKind::OptionalSome(base) => base,
        }
    }

    pub fn optional_mode(&self) -> Option<OptionalMode> {
        match self {
            ValueKind::Base(_) => None,
            ValueKind::OptionalNone(_) => Some(OptionalMode::None),
            ValueKind::OptionalSome(_) => Some(OptionalMode::Some),
        }
    }

    /// Rewraps the base kind with the given optional mode, or unwraps it.
    pub fn with_optional_mode(base: BaseKind, mode: Option<OptionalMode>) -> ValueKind {
        match mode {
            None => ValueKind::Base(base),
            Some(OptionalMode::None) => ValueKind::OptionalNone(base),
            Some(OptionalMode::Some) => ValueKind::OptionalSome(base),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Base(base) => base.fmt(f),
            ValueKind::OptionalNone(_) => f.write_str("optional-none"),
            ValueKind::OptionalSome(base) => write!(f, "optional-some-{base}"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "optional-none" {
            // The label does not name a base kind; default the hint to
            // uint so a later toggle to some starts somewhere sensible.
            return Ok(ValueKind::OptionalNone(BaseKind::UInt));
        }
        if let Some(base) = s.strip_prefix("optional-some-") {
            return Ok(ValueKind::OptionalSome(base.parse()?));
        }
        Ok(ValueKind::Base(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_labels_roundtrip() {
        for base in BaseKind::ALL {
            assert_eq!(base.label().parse::<BaseKind>().unwrap(), base);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("ascii".parse::<BaseKind>().unwrap(), BaseKind::StringAscii);
        assert_eq!("utf8".parse::<BaseKind>().unwrap(), BaseKind::StringUtf8);
        assert_eq!("buffer-hex".parse::<BaseKind>().unwrap(), BaseKind::Buffer);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(
            "optional-some-principal".parse::<ValueKind>().unwrap(),
            ValueKind::OptionalSome(BaseKind::Principal)
        );
        assert_eq!(
            "optional-none".parse::<ValueKind>().unwrap(),
            ValueKind::OptionalNone(BaseKind::UInt)
        );
        assert_eq!(
            "uint".parse::<ValueKind>().unwrap(),
            ValueKind::Base(BaseKind::UInt)
        );
        assert_eq!(
            ValueKind::OptionalSome(BaseKind::Buffer).to_string(),
            "optional-some-buffer"
        );
        assert_eq!(ValueKind::OptionalNone(BaseKind::Bool).to_string(), "optional-none");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(matches!(
            "optional-some-list".parse::<ValueKind>(),
            Err(ParseError::UnknownKind { .. })
        ));
        assert!(matches!(
            "tuple".parse::<ValueKind>(),
            Err(ParseError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_optional_mode_rewrapping() {
        let kind = ValueKind::OptionalSome(BaseKind::Int);
        assert!(kind.is_optional());
        assert_eq!(kind.base_kind(), BaseKind::Int);
        assert_eq!(kind.optional_mode(), Some(OptionalMode::Some));
        assert_eq!(
            ValueKind::with_optional_mode(kind.base_kind(), Some(OptionalMode::None)),
            ValueKind::OptionalNone(BaseKind::Int)
        );
        assert_eq!(
            ValueKind::with_optional_mode(kind.base_kind(), None),
            ValueKind::Base(BaseKind::Int)
        );
    }
}
