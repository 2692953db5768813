//! Mutation input inference for `updateProjectV2ItemFieldValue`.
//!
//! The mutation takes a one-of `ProjectV2FieldValue` input whose member must
//! match the field's data type. The field's type is not fetched; it is read
//! off the node-id prefix GitHub currently uses for each field kind.
//!
//! This is a naming-convention heuristic, not a schema contract. Ids with an
//! unrecognized prefix fall back to text. Looking the field up first would be
//! the robust alternative.

use serde::Serialize;
use tracing::warn;

use crate::errors::{ProjectsError, ProjectsResult};
use crate::FieldId;

/// A caller-supplied value before it is matched to a field type.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Command-line text that reads as a finite number. The text is kept
    /// verbatim for fields that take strings.
    Numeric { raw: String, value: f64 },
}

impl InputValue {
    /// Reads a raw command-line value: finite numbers become
    /// [`Self::Numeric`]; everything else is text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Numeric {
                raw: raw.to_string(),
                value,
            },
            _ => Self::Text(raw.to_string()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Numeric { .. } => "number",
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Numeric { value, .. } => Some(*value),
            Self::Text(_) | Self::Bool(_) => None,
        }
    }

    /// The value as a string, if it was given as one.
    fn into_string(self) -> Result<String, Self> {
        match self {
            Self::Text(s) | Self::Numeric { raw: s, .. } => Ok(s),
            other => Err(other),
        }
    }

    fn into_text(self) -> String {
        match self.into_string() {
            Ok(s) => s,
            Err(other) => other.to_string(),
        }
    }
}

impl std::fmt::Display for InputValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) | Self::Numeric { raw: s, .. } => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The `ProjectV2FieldValue` input object. Serializes as a single-member
/// object, e.g. `{"number": 42.0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValueInput {
    Text(String),
    Date(String),
    Number(f64),
    SingleSelectOptionId(String),
    IterationId(String),
}

/// Field kind implied by a field id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIdKind {
    SingleSelect,
    Iteration,
    Date,
    Number,
    Text,
}

impl FieldIdKind {
    fn label(self) -> &'static str {
        match self {
            Self::SingleSelect => "single select",
            Self::Iteration => "iteration",
            Self::Date => "date",
            Self::Number => "number",
            Self::Text => "text",
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::SingleSelect => "an option id string",
            Self::Iteration => "an iteration id string",
            Self::Date => "a date string (YYYY-MM-DD)",
            Self::Number => "an integer or float",
            Self::Text => "any value",
        }
    }
}

// Longest prefixes first.
const PREFIXES: [(&str, FieldIdKind); 5] = [
    ("PVTSSF_", FieldIdKind::SingleSelect),
    ("PVTIF_", FieldIdKind::Iteration),
    ("PVTDF_", FieldIdKind::Date),
    ("PVTNU_", FieldIdKind::Number),
    ("PVTF_", FieldIdKind::Text),
];

/// Classifies a field id by prefix. `None` when no prefix is recognized.
pub fn classify_field_id(field_id: &FieldId) -> Option<FieldIdKind> {
    PREFIXES
        .iter()
        .find(|(prefix, _)| field_id.as_str().starts_with(*prefix))
        .map(|&(_, kind)| kind)
}

/// Chooses the mutation input member for `value` on `field_id`.
///
/// Recognized prefixes require a compatible value and fail with
/// [`ProjectsError::InvalidInput`] otherwise; text fields and unrecognized
/// prefixes accept anything, stringified.
pub fn infer_mutation_input(
    field_id: &FieldId,
    value: InputValue,
) -> ProjectsResult<FieldValueInput> {
    let Some(kind) = classify_field_id(field_id) else {
        warn!(field_id = %field_id, "unknown field type, setting value as text");
        return Ok(FieldValueInput::Text(value.into_text()));
    };

    let string_input: fn(String) -> FieldValueInput = match kind {
        FieldIdKind::Text => return Ok(FieldValueInput::Text(value.into_text())),
        FieldIdKind::Number => {
            return match value.as_number() {
                Some(n) => Ok(FieldValueInput::Number(n)),
                None => Err(mismatch(field_id, kind, &value)),
            }
        }
        FieldIdKind::SingleSelect => FieldValueInput::SingleSelectOptionId,
        FieldIdKind::Iteration => FieldValueInput::IterationId,
        FieldIdKind::Date => FieldValueInput::Date,
    };
    value
        .into_string()
        .map(string_input)
        .map_err(|value| mismatch(field_id, kind, &value))
}

fn mismatch(field_id: &FieldId, kind: FieldIdKind, value: &InputValue) -> ProjectsError {
    ProjectsError::invalid_input(format!(
        "invalid value type for {} field {field_id}: expected {}, got {}",
        kind.label(),
        kind.expected(),
        value.kind()
    ))
}

#[cfg(test)]
#[path = "inference_tests.rs"]
mod tests;
