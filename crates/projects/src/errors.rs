//! Error types for the Projects V2 engine.
//!
//! [`TransportError`] is what a [`crate::GraphQlTransport`] implementation
//! reports for a single failed call. [`ProjectsError`] is the one failure type
//! every engine operation returns; transport failures are wrapped into it
//! unchanged, and each re-raise boundary may prepend context with
//! [`ResultExt::context`].

use thiserror::Error;

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Classified failure of a single GraphQL call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP error executing GraphQL operation {operation}: {status} - {body}")]
    Status {
        /// Operation name (e.g. `GetProjectId`).
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the server.
        body: String,
    },

    /// The request never produced a response (connect failure, timeout,
    /// session construction failure).
    #[error("request for GraphQL operation {operation} failed: {message}")]
    Request {
        /// Operation name.
        operation: String,
        /// Description of the underlying I/O failure.
        message: String,
    },

    /// The body was not a GraphQL response envelope.
    #[error("GraphQL operation {operation} returned an unreadable body: {message}")]
    InvalidBody {
        /// Operation name.
        operation: String,
        /// Parser message.
        message: String,
    },

    /// The server reported errors for the operation. Any partial `data` is
    /// discarded.
    #[error("GraphQL operation {operation} returned errors: {}", messages.join("; "))]
    OperationErrors {
        /// Operation name.
        operation: String,
        /// The `message` of every reported error, in order.
        messages: Vec<String>,
    },

    /// The response had neither `data` nor `errors`.
    #[error("GraphQL operation {operation} returned no data and no errors")]
    EmptyData {
        /// Operation name.
        operation: String,
    },
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

/// The single failure type surfaced by [`crate::ProjectsEngine`].
///
/// Callers that need to branch on the underlying condition use
/// [`ProjectsError::root`], which looks through any [`ProjectsError::Context`]
/// layers.
#[derive(Debug, Error)]
pub enum ProjectsError {
    /// A remote call failed in transport, or the server reported errors.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A nominally successful response did not have the expected shape.
    #[error("unexpected response shape from {operation}: {message}")]
    MalformedResponse {
        /// Operation name.
        operation: String,
        /// Decoder message.
        message: String,
    },

    /// An owner, project, repository, issue, or scoped collection did not
    /// resolve.
    #[error("{entity} not found")]
    NotFound {
        /// Human-readable description of what was looked up.
        entity: String,
    },

    /// A mutation returned without its nested result object.
    #[error("{action} failed: {mutation} returned no result")]
    MutationFailed {
        /// What the caller was trying to do (e.g. `delete item PVTI_1`).
        action: String,
        /// Mutation field name (e.g. `deleteProjectV2Item`).
        mutation: String,
    },

    /// Caller-supplied input was rejected before any remote call.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected.
        message: String,
    },

    /// The engine or its transport could not be constructed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// Another failure with context prepended.
    #[error("{context}: {source}")]
    Context {
        /// What was being attempted when `source` occurred.
        context: String,
        /// The failure being re-raised.
        #[source]
        source: Box<ProjectsError>,
    },
}

impl ProjectsError {
    /// Wraps this error with a context message.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping [`ProjectsError::Context`] layers.
    pub fn root(&self) -> &ProjectsError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// `true` when the root cause is [`ProjectsError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::NotFound { .. })
    }

    /// `true` when the root cause is [`ProjectsError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.root(), Self::InvalidInput { .. })
    }

    pub(crate) fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the engine.
pub type ProjectsResult<T> = Result<T, ProjectsError>;

/// Adds context to the error side of a [`ProjectsResult`].
pub trait ResultExt<T> {
    /// Prepends `context` to the error message when `self` is `Err`.
    fn context<C: Into<String>>(self, context: C) -> ProjectsResult<T>;

    /// Like [`ResultExt::context`], but only builds the message on failure.
    fn with_context<C: Into<String>, F: FnOnce() -> C>(self, f: F) -> ProjectsResult<T>;
}

impl<T, E: Into<ProjectsError>> ResultExt<T> for Result<T, E> {
    fn context<C: Into<String>>(self, context: C) -> ProjectsResult<T> {
        self.map_err(|e| e.into().context(context))
    }

    fn with_context<C: Into<String>, F: FnOnce() -> C>(self, f: F) -> ProjectsResult<T> {
        self.map_err(|e| e.into().context(f()))
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
