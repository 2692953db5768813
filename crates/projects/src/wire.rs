//! Response shapes of the fixed queries, before normalization.
//!
//! Every nullable GraphQL member is an `Option` here; the engine decides
//! which absences are failures.

use serde::Deserialize;
use serde_json::Value;

use crate::normalize::{decode_content, normalize_field_values};
use crate::types::{
    AddedItem, Field, FieldKind, Item, ItemContent, Iteration, Project, SelectOption,
};
use crate::{ContentId, FieldId, ItemId, OwnerId, ProjectId, RepositoryId};

/// A `{ nodes: [...] }` connection. GraphQL list entries may be null.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Connection<T> {
    #[serde(default)]
    nodes: Vec<Option<T>>,
}

impl<T> Connection<T> {
    pub(crate) fn into_nodes(self) -> impl Iterator<Item = T> {
        self.nodes.into_iter().flatten()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdNode<T> {
    pub id: T,
}

// ---------------------------------------------------------------------------
// Identity lookups
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerNode {
    pub id: OwnerId,
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerLookup {
    pub organization: Option<OwnerNode>,
    pub user: Option<OwnerNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectHolder {
    #[serde(rename = "projectV2")]
    pub project: Option<IdNode<ProjectId>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectIdLookup {
    pub organization: Option<ProjectHolder>,
    pub user: Option<ProjectHolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryLookup {
    pub repository: Option<IdNode<RepositoryId>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueHolder {
    pub issue: Option<IdNode<ContentId>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueLookup {
    pub repository: Option<IssueHolder>,
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectsHolder {
    #[serde(rename = "projectsV2")]
    pub projects: Option<Connection<Project>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrganizationProjects {
    pub organization: Option<ProjectsHolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserProjects {
    pub user: Option<ProjectsHolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldsHolder {
    pub fields: Option<Connection<RawField>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectFields {
    pub node: Option<FieldsHolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsHolder {
    pub items: Option<Connection<RawItem>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectItems {
    pub node: Option<ItemsHolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResults {
    pub search: Option<Connection<Value>>,
}

/// A search hit's `projectItems` connection.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHitItems {
    #[serde(rename = "projectItems")]
    pub project_items: Option<Connection<RawItem>>,
}

// ---------------------------------------------------------------------------
// Mutation results
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RawAddedItem {
    pub id: ItemId,
    #[serde(default)]
    pub content: Option<Value>,
}

impl From<RawAddedItem> for AddedItem {
    fn from(raw: RawAddedItem) -> Self {
        let content = raw.content.unwrap_or_default();
        Self {
            id: raw.id,
            content_title: content
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_owned),
            content_number: content.get("number").and_then(Value::as_u64),
        }
    }
}

// ---------------------------------------------------------------------------
// Polymorphic nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RawIterationConfiguration {
    #[serde(default)]
    iterations: Vec<Iteration>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawField {
    id: FieldId,
    name: String,
    #[serde(rename = "__typename")]
    typename: String,
    #[serde(default)]
    configuration: Option<RawIterationConfiguration>,
    #[serde(default)]
    options: Option<Vec<SelectOption>>,
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        let kind = match raw.typename.as_str() {
            "ProjectV2Field" => FieldKind::Plain,
            "ProjectV2IterationField" => FieldKind::Iteration {
                iterations: raw.configuration.map(|c| c.iterations).unwrap_or_default(),
            },
            "ProjectV2SingleSelectField" => FieldKind::SingleSelect {
                options: raw.options.unwrap_or_default(),
            },
            _ => FieldKind::Unknown {
                typename: raw.typename,
            },
        };
        Self {
            id: raw.id,
            name: raw.name,
            kind,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    pub id: ItemId,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(rename = "fieldValues", default)]
    pub field_values: Option<Connection<Value>>,
    #[serde(default)]
    pub content: Option<Value>,
    /// Only selected by search, to match items to the project.
    #[serde(default)]
    pub project: Option<IdNode<ProjectId>>,
}

impl RawItem {
    /// Decodes this item's own content and flattens its field values.
    pub(crate) fn into_item(mut self) -> Result<Item, serde_json::Error> {
        let content = decode_content(self.content.take())?;
        Ok(self.with_content(content))
    }

    /// Flattens field values and attaches content decoded elsewhere.
    pub(crate) fn with_content(self, content: ItemContent) -> Item {
        let values: Vec<Value> = self
            .field_values
            .map(|c| c.into_nodes().collect())
            .unwrap_or_default();
        Item {
            id: self.id,
            item_type: self.item_type,
            content,
            field_values: normalize_field_values(&values),
        }
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
