//! Newtype identifiers for GitHub node ids and local correlation ids.
//!
//! GitHub hands out opaque global node ids for every object (`PVT_...` for
//! projects, `PVTI_...` for items, `PVTSSF_...` for single-select fields).
//! They are all strings on the wire, so each concept gets its own newtype to
//! keep a [`ProjectId`] from being passed where an [`ItemId`] is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// GitHub node ids
// ---------------------------------------------------------------------------

string_id! {
    /// Node id of an organization or user account.
    OwnerId
}

string_id! {
    /// Node id of a Projects V2 board (`PVT_...`).
    ///
    /// Never known up front: always resolved from an `(owner, number)` pair.
    ProjectId
}

string_id! {
    /// Node id of a project item (`PVTI_...`).
    ItemId
}

string_id! {
    /// Node id of a project field.
    ///
    /// The prefix encodes the field's data type by convention
    /// (`PVTSSF_`, `PVTIF_`, `PVTF_`, `PVTDF_`, `PVTNU_`); see
    /// [`crate::inference`].
    FieldId
}

string_id! {
    /// Node id of a repository.
    RepositoryId
}

string_id! {
    /// Node id of an issue or pull request.
    ContentId
}

// ---------------------------------------------------------------------------
// Locally generated ids
// ---------------------------------------------------------------------------

/// Identifies a single command invocation.
///
/// Generated fresh for every CLI run and recorded on the root span so all
/// remote calls made on behalf of one command can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(Uuid);

impl InvocationId {
    /// Generates a new random invocation identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
