//! Discriminator decoding and field-value flattening.
//!
//! GraphQL interface/union payloads carry a `__typename` discriminator. Each
//! polymorphic payload is decoded in exactly one place here, mapping the
//! discriminator to a variant; anything unrecognized becomes an explicit
//! catch-all variant instead of being dropped.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::types::{
    DraftIssueContent, FieldScalar, FieldValue, ItemContent, LinkedContent, RepositoryRef,
};
use crate::ContentId;

/// Key used when a field value does not name its field.
pub const UNKNOWN_FIELD: &str = "UnknownField";

/// Display value for missing or unrecognized values.
pub const NOT_AVAILABLE: &str = "N/A";

const TEXT_VALUE: &str = "ProjectV2ItemFieldTextValue";
const DATE_VALUE: &str = "ProjectV2ItemFieldDateValue";
const SINGLE_SELECT_VALUE: &str = "ProjectV2ItemFieldSingleSelectValue";
const NUMBER_VALUE: &str = "ProjectV2ItemFieldNumberValue";
const ITERATION_VALUE: &str = "ProjectV2ItemFieldIterationValue";

const ISSUE: &str = "Issue";
const PULL_REQUEST: &str = "PullRequest";
const DRAFT_ISSUE: &str = "DraftIssue";

fn typename_of(value: &Value) -> Option<String> {
    value
        .get("__typename")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// Decodes one raw field-value node by its own discriminator.
///
/// Nodes that matched none of the query's fragments arrive as `{}` and decode
/// to [`FieldValue::Unspecified`].
pub fn decode_field_value(value: &Value) -> FieldValue {
    let field_name = value
        .get("field")
        .and_then(|field| field.get("name"))
        .and_then(Value::as_str)
        .map(str::to_owned);
    let string = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);

    match typename_of(value).as_deref() {
        Some(TEXT_VALUE) => FieldValue::Text {
            field_name,
            text: string("text"),
        },
        Some(DATE_VALUE) => FieldValue::Date {
            field_name,
            date: string("date"),
        },
        Some(SINGLE_SELECT_VALUE) => FieldValue::SingleSelect {
            field_name,
            name: string("name"),
        },
        Some(NUMBER_VALUE) => FieldValue::Number {
            field_name,
            number: value.get("number").and_then(Value::as_f64),
        },
        Some(ITERATION_VALUE) => FieldValue::Iteration {
            field_name,
            title: string("title"),
            start_date: string("startDate"),
        },
        other => FieldValue::Unspecified {
            field_name,
            typename: other.map(str::to_owned),
        },
    }
}

impl FieldValue {
    /// Name of the field this value belongs to, or [`UNKNOWN_FIELD`].
    pub fn field_name(&self) -> &str {
        let name = match self {
            Self::Text { field_name, .. }
            | Self::Date { field_name, .. }
            | Self::SingleSelect { field_name, .. }
            | Self::Number { field_name, .. }
            | Self::Iteration { field_name, .. }
            | Self::Unspecified { field_name, .. } => field_name,
        };
        name.as_deref().unwrap_or(UNKNOWN_FIELD)
    }

    /// Flattens this value to its display scalar.
    pub fn scalar(&self) -> FieldScalar {
        let or_na = |v: &Option<String>| {
            FieldScalar::Text(v.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()))
        };
        match self {
            Self::Text { text, .. } => or_na(text),
            Self::Date { date, .. } => or_na(date),
            Self::SingleSelect { name, .. } => or_na(name),
            Self::Number { number, .. } => number.map_or_else(
                || FieldScalar::Text(NOT_AVAILABLE.to_string()),
                FieldScalar::Number,
            ),
            Self::Iteration {
                title, start_date, ..
            } => FieldScalar::Text(format!(
                "{} (Start: {})",
                title.as_deref().unwrap_or(NOT_AVAILABLE),
                start_date.as_deref().unwrap_or(NOT_AVAILABLE)
            )),
            Self::Unspecified { .. } => FieldScalar::Text(NOT_AVAILABLE.to_string()),
        }
    }
}

/// Flattens field values into a field-name → scalar map.
///
/// A repeated field name keeps its first position and its last value.
pub fn normalize_field_values<'a, I>(values: I) -> IndexMap<String, FieldScalar>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut flattened = IndexMap::new();
    for raw in values {
        let value = decode_field_value(raw);
        flattened.insert(value.field_name().to_string(), value.scalar());
    }
    flattened
}

// ---------------------------------------------------------------------------
// Item content
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawLinkedContent {
    id: ContentId,
    number: u64,
    title: String,
    state: String,
    url: String,
    repository: RawRepository,
}

#[derive(Deserialize)]
struct RawRepository {
    name: String,
    owner: RawLogin,
}

#[derive(Deserialize)]
struct RawLogin {
    login: String,
}

impl From<RawLinkedContent> for LinkedContent {
    fn from(raw: RawLinkedContent) -> Self {
        Self {
            id: raw.id,
            number: raw.number,
            title: raw.title,
            state: raw.state,
            url: raw.url,
            repository: RepositoryRef {
                owner: raw.repository.owner.login,
                name: raw.repository.name,
            },
        }
    }
}

/// Decodes item content by its discriminator.
///
/// Null content and unrecognized types become [`ItemContent::Unknown`]. A
/// recognized type with missing members is a decode error.
pub fn decode_content(value: Option<Value>) -> Result<ItemContent, serde_json::Error> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(ItemContent::Unknown {
            typename: None,
            raw: Value::Null,
        });
    };
    let content = match typename_of(&value).as_deref() {
        Some(ISSUE) => {
            ItemContent::Issue(serde_json::from_value::<RawLinkedContent>(value)?.into())
        }
        Some(PULL_REQUEST) => {
            ItemContent::PullRequest(serde_json::from_value::<RawLinkedContent>(value)?.into())
        }
        Some(DRAFT_ISSUE) => {
            ItemContent::DraftIssue(serde_json::from_value::<DraftIssueContent>(value)?)
        }
        _ => ItemContent::Unknown {
            typename: typename_of(&value),
            raw: value,
        },
    };
    Ok(content)
}

/// `true` for search results that can be project item content.
pub(crate) fn is_linked_content(value: &Value) -> bool {
    matches!(typename_of(value).as_deref(), Some(ISSUE | PULL_REQUEST))
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
