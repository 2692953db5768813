//! Resolution and normalization engine for GitHub Projects V2.
//!
//! Turns human-friendly coordinates (owner login, project number, repository
//! name, issue number) into GitHub node ids, issues the fixed set of GraphQL
//! queries and mutations against a [`GraphQlTransport`], and reshapes the
//! deeply nested, polymorphic responses into the flat records in [`types`].
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! The `github` crate supplies the HTTP implementation of [`GraphQlTransport`].
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`engine`] | [`ProjectsEngine`] and every public operation |
//! | [`queries`] | The fixed GraphQL documents and page sizes |
//! | [`normalize`] | Field-value and item-content decoding |
//! | [`inference`] | Field-id prefix heuristic for mutation inputs |
//! | [`identifiers`] | Node-id newtypes (`ProjectId`, `FieldId`, etc.) |
//! | [`types`] | Normalized records returned to callers |
//! | [`transport`] | The [`GraphQlTransport`] port |
//! | [`errors`] | [`ProjectsError`] and [`TransportError`] |

pub mod engine;
pub mod errors;
pub mod identifiers;
pub mod inference;
pub mod normalize;
pub mod queries;
pub mod transport;
pub mod types;

mod wire;

#[cfg(test)]
mod test_support;

pub use engine::ProjectsEngine;
pub use errors::{ProjectsError, ProjectsResult, ResultExt, TransportError};
pub use identifiers::{
    ContentId, FieldId, InvocationId, ItemId, OwnerId, ProjectId, RepositoryId,
};
pub use inference::{FieldValueInput, InputValue};
pub use transport::{GraphQlTransport, Operation};
pub use types::{
    AddedItem, CreatedIssue, DraftIssueContent, Field, FieldKind, FieldScalar, FieldValue, Item,
    ItemContent, ItemQuery, ItemStateFilter, Iteration, LinkedContent, Owner, OwnerKind, Project,
    ProjectSettingsUpdate, RepositoryRef, SelectOption, UpdatedProject, DEFAULT_ITEM_LIMIT,
    DEFAULT_SEARCH_LIMIT,
};
