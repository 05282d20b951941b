//! The contract-call argument list builder.
//!
//! An [`ArgBuilder`] holds an ordered list of rows, each declaring a
//! kind and carrying raw text. Every mutation re-derives the encoded
//! form of all rows; failures stay row-local so one bad field never
//! hides its siblings. The fully-encoded hex list is only available
//! when every row encodes cleanly.

pub mod parse;

pub use parse::parse_value;

use crate::codec::value_to_hex;
use crate::error::{EncodeError, ParseError};
use crate::model::{BaseKind, OptionalMode, Value, ValueKind};
use thiserror::Error;

/// Stable row identifier, unique for the lifetime of a builder.
pub type RowId = u64;

/// One argument row as the user edits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentRow {
    id: RowId,
    kind: ValueKind,
    raw: String,
    optional: Option<OptionalMode>,
}

impl ArgumentRow {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn optional(&self) -> Option<OptionalMode> {
        self.optional
    }

    /// The kind this row actually encodes as: the declared kind with
    /// the optional toggle applied on top.
    pub fn effective_kind(&self) -> ValueKind {
        if self.kind.is_optional() {
            self.kind
        } else {
            ValueKind::with_optional_mode(self.kind.base_kind(), self.optional)
        }
    }
}

/// A partial update to a row. Unset fields leave the row untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPatch {
    kind: Option<ValueKind>,
    raw: Option<String>,
    optional: Option<Option<OptionalMode>>,
}

impl RowPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Sets or clears the optional toggle.
    pub fn optional(mut self, mode: Option<OptionalMode>) -> Self {
        self.optional = Some(mode);
        self
    }
}

/// A successfully encoded row: the structured value and its hex form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArg {
    pub value: Value,
    pub hex: String,
}

/// Why a row failed to encode. Row-local; siblings are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// One entry of a predefined argument template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetArg {
    pub kind: ValueKind,
    pub raw: String,
}

impl PresetArg {
    pub fn new(kind: ValueKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }
}

/// Ordered argument-list builder with derived encodings.
#[derive(Debug, Clone, Default)]
pub struct ArgBuilder {
    rows: Vec<ArgumentRow>,
    built: Vec<Result<BuiltArg, RowError>>,
    next_id: RowId,
    revision: u64,
}

impl ArgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a default row (a bare uint with empty text) and returns
    /// its id.
    pub fn add_row(&mut self) -> RowId {
        self.add_row_with(ValueKind::Base(BaseKind::UInt), "")
    }

    /// Appends a row with the given kind and raw text. Ids are
    /// monotonic and never reused, even after removals.
    pub fn add_row_with(&mut self, kind: ValueKind, raw: impl Into<String>) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(ArgumentRow {
            id,
            kind,
            raw: raw.into(),
            optional: kind.optional_mode(),
        });
        self.recompute();
        id
    }

    /// Removes a row by id. Removing an absent id is a no-op.
    pub fn remove_row(&mut self, id: RowId) {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        if self.rows.len() != before {
            self.recompute();
        }
    }

    /// Applies a patch to a row. Returns false when the id is absent.
    ///
    /// Changing the kind resets the optional toggle to match: an
    /// optional kind carries its own mode, a base kind clears it.
    /// Patching the toggle directly demotes the declared kind to its
    /// base so the two never disagree.
    pub fn update_row(&mut self, id: RowId, patch: RowPatch) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        if let Some(kind) = patch.kind {
            row.kind = kind;
            row.optional = kind.optional_mode();
        }
        if let Some(raw) = patch.raw {
            row.raw = raw;
        }
        if let Some(mode) = patch.optional {
            row.kind = ValueKind::Base(row.kind.base_kind());
            row.optional = mode;
        }
        self.recompute();
        true
    }

    /// Replaces all rows with a template's entries, under fresh ids.
    pub fn apply_preset(&mut self, preset: &[PresetArg]) {
        self.rows.clear();
        for arg in preset {
            let id = self.next_id;
            self.next_id += 1;
            self.rows.push(ArgumentRow {
                id,
                kind: arg.kind,
                raw: arg.raw.clone(),
                optional: arg.kind.optional_mode(),
            });
        }
        self.recompute();
    }

    pub fn rows(&self) -> &[ArgumentRow] {
        &self.rows
    }

    /// Per-row encoding outcomes, in row order.
    pub fn args(&self) -> &[Result<BuiltArg, RowError>] {
        &self.built
    }

    /// The complete hex argument list, or `None` while any row fails.
    pub fn hex_args(&self) -> Option<Vec<String>> {
        self.built
            .iter()
            .map(|result| result.as_ref().ok().map(|arg| arg.hex.clone()))
            .collect()
    }

    /// The ids and errors of currently failing rows.
    pub fn errors(&self) -> Vec<(RowId, &RowError)> {
        self.rows
            .iter()
            .zip(&self.built)
            .filter_map(|(row, result)| result.as_ref().err().map(|e| (row.id, e)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Bumped on every state change; lets a caller detect staleness
    /// without diffing rows.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        self.revision += 1;
        self.built = self
            .rows
            .iter()
            .map(|row| {
                let value = parse_value(row.effective_kind(), &row.raw)?;
                let hex = value_to_hex(&value)?;
                Ok(BuiltArg { value, hex })
            })
            .collect();
    }
}
