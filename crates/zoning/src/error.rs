// ---------------------------------------------------------------------------
// Boundary errors: catalog references and scenario input validation
// ---------------------------------------------------------------------------
//
// The evaluator itself never fails. These errors only surface where untrusted
// ids or user-edited lots enter the system.

use std::fmt;

/// Which catalog a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    LotPreset,
    Ruleset,
    PresetForm,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::LotPreset => f.write_str("lot preset"),
            CatalogKind::Ruleset => f.write_str("ruleset"),
            CatalogKind::PresetForm => f.write_str("preset form"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry with this id.
    NotFound { kind: CatalogKind, id: String },
    /// The catalog has no entries of this kind at all.
    Empty(CatalogKind),
    /// A catalog file could not be parsed.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { kind, id } => write!(f, "Unknown {kind} id: '{id}'"),
            CatalogError::Empty(kind) => write!(f, "Catalog has no {kind} entries"),
            CatalogError::Parse(msg) => write!(f, "Invalid catalog JSON: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Rejections for lot values edited outside the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// A lot dimension or setback is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// A lot dimension or setback is below zero.
    Negative { field: &'static str, value: f64 },
    Catalog(CatalogError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::NonFinite { field, value } => {
                write!(f, "Lot field '{field}' must be finite (got {value})")
            }
            ScenarioError::Negative { field, value } => {
                write!(f, "Lot field '{field}' must not be negative (got {value})")
            }
            ScenarioError::Catalog(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for ScenarioError {
    fn from(e: CatalogError) -> Self {
        ScenarioError::Catalog(e)
    }
}
