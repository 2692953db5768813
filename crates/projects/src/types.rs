//! Normalized records returned by the engine.
//!
//! Every value here is built fresh from a response payload and handed to the
//! caller; nothing is cached or mutated after construction. Polymorphic
//! payloads (field definitions, item content, field values) are closed enums
//! with an explicit catch-all variant, decoded in [`crate::normalize`].

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ContentId, FieldId, ItemId, OwnerId, ProjectId};

// ---------------------------------------------------------------------------
// Owners and projects
// ---------------------------------------------------------------------------

/// Which kind of account a login resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    Organization,
    User,
}

impl std::fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organization => write!(f, "organization"),
            Self::User => write!(f, "user"),
        }
    }
}

/// An organization or user account, resolved from its login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub kind: OwnerKind,
    pub id: OwnerId,
    pub login: String,
}

/// A Projects V2 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub url: String,
    pub closed: bool,
    pub public: bool,
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// A field (column) defined on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    /// The GraphQL type name this field was decoded from.
    pub fn typename(&self) -> &str {
        match &self.kind {
            FieldKind::Plain => "ProjectV2Field",
            FieldKind::Iteration { .. } => "ProjectV2IterationField",
            FieldKind::SingleSelect { .. } => "ProjectV2SingleSelectField",
            FieldKind::Unknown { typename } => typename,
        }
    }
}

/// Variant-specific part of a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Text, number, date and built-in fields: id and name only.
    Plain,
    /// Iteration field with its configured iterations, in server order.
    Iteration { iterations: Vec<Iteration> },
    /// Single-select field with its options, in server order.
    SingleSelect { options: Vec<SelectOption> },
    /// A field type this engine does not know about.
    Unknown { typename: String },
}

/// One iteration of an iteration field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iteration {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    /// Length in days.
    pub duration: u32,
}

/// One option of a single-select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: String,
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A project item with its content and flattened field values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    /// `ISSUE`, `PULL_REQUEST`, `DRAFT_ISSUE` or `REDACTED`, when reported.
    pub item_type: Option<String>,
    pub content: ItemContent,
    /// Field name to display value, in first-seen order.
    pub field_values: IndexMap<String, FieldScalar>,
}

/// What a project item wraps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemContent {
    Issue(LinkedContent),
    PullRequest(LinkedContent),
    DraftIssue(DraftIssueContent),
    /// Content whose type is missing or not recognized; the raw payload is kept.
    Unknown {
        typename: Option<String>,
        raw: serde_json::Value,
    },
}

impl ItemContent {
    /// Issue or pull request state (`OPEN`, `CLOSED`, `MERGED`); `None` for
    /// drafts and unknown content.
    pub fn state(&self) -> Option<&str> {
        match self {
            Self::Issue(c) | Self::PullRequest(c) => Some(&c.state),
            Self::DraftIssue(_) | Self::Unknown { .. } => None,
        }
    }

    /// Content title, where the variant has one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Issue(c) | Self::PullRequest(c) => Some(&c.title),
            Self::DraftIssue(d) => Some(&d.title),
            Self::Unknown { .. } => None,
        }
    }
}

/// Issue or pull request content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedContent {
    pub id: ContentId,
    pub number: u64,
    pub title: String,
    pub state: String,
    pub url: String,
    pub repository: RepositoryRef,
}

/// `owner/name` of the repository holding an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Draft issue content. Drafts live only inside the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftIssueContent {
    pub id: String,
    pub title: String,
}

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// A value bound to one (item, field) pair, typed by its own discriminator.
///
/// `field_name` is read from the value's nested field reference and is
/// `None` when the server did not provide it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldValue {
    Text {
        field_name: Option<String>,
        text: Option<String>,
    },
    Date {
        field_name: Option<String>,
        date: Option<String>,
    },
    SingleSelect {
        field_name: Option<String>,
        name: Option<String>,
    },
    Number {
        field_name: Option<String>,
        number: Option<f64>,
    },
    Iteration {
        field_name: Option<String>,
        title: Option<String>,
        start_date: Option<String>,
    },
    /// Any other value type, or a node the query's fragments did not match.
    Unspecified {
        field_name: Option<String>,
        typename: Option<String>,
    },
}

/// Display-ready scalar produced by flattening a [`FieldValue`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldScalar {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for FieldScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Listing options
// ---------------------------------------------------------------------------

/// Items returned by a listing when the caller does not say otherwise.
pub const DEFAULT_ITEM_LIMIT: u32 = 20;

/// Search matches returned when the caller does not say otherwise.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Case-insensitive filter on issue/pull request state (e.g. `open`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStateFilter(String);

impl ItemStateFilter {
    /// Normalizes `state` to upper case. Returns `None` for a blank string.
    pub fn new(state: &str) -> Option<Self> {
        let state = state.trim();
        if state.is_empty() {
            None
        } else {
            Some(Self(state.to_ascii_uppercase()))
        }
    }

    /// Drafts and unknown content never match.
    pub fn matches(&self, content: &ItemContent) -> bool {
        content
            .state()
            .is_some_and(|state| state.eq_ignore_ascii_case(&self.0))
    }
}

impl std::fmt::Display for ItemStateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options for [`crate::ProjectsEngine::list_items`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    /// Items fetched (the `first:` argument). Filtering happens afterwards.
    pub limit: u32,
    pub state: Option<ItemStateFilter>,
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ITEM_LIMIT,
            state: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Mutation results
// ---------------------------------------------------------------------------

/// An issue as returned by `createIssue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: ContentId,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub state: String,
}

/// A project item created from an existing issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedItem {
    pub id: ItemId,
    pub content_title: Option<String>,
    pub content_number: Option<u64>,
}

/// Project settings to change. `None` leaves a setting untouched; it is
/// omitted from the mutation input rather than sent as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "shortDescription", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

/// Project state as returned by `updateProjectV2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProject {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub public: bool,
    pub url: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
