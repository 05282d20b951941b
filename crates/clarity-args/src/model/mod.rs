//! Data model: value kinds, principals, and the typed value tree.

pub mod kind;
pub mod principal;
pub mod value;

pub use kind::{BaseKind, OptionalMode, ValueKind};
pub use principal::{PrincipalData, StandardPrincipal};
pub use value::{ClarityName, TypePrefix, Value};
