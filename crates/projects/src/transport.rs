//! Port trait for executing GraphQL documents.
//!
//! The engine never talks HTTP itself. Infrastructure crates implement
//! [`GraphQlTransport`]; tests substitute a scripted implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;

/// A fixed, named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name as declared in `text` (sent as `operationName`).
    pub name: &'static str,
    /// Full document text.
    pub text: &'static str,
}

/// Executes one GraphQL operation and returns its `data` object.
///
/// Implementations must classify every failure into a [`TransportError`]:
/// transport/HTTP problems, server-reported `errors`, or a response with no
/// `data`. Partial data accompanying `errors` is never returned.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Runs `operation` with the given variables object.
    async fn execute(&self, operation: &Operation, variables: Value)
        -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: GraphQlTransport + ?Sized> GraphQlTransport for std::sync::Arc<T> {
    async fn execute(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<Value, TransportError> {
        (**self).execute(operation, variables).await
    }
}
