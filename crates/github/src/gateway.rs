//! HTTPS implementation of [`GraphQlTransport`].

use async_trait::async_trait;
use projects::{GraphQlTransport, Operation, TransportError};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::config::{GatewayConfig, ACCEPT_MEDIA_TYPE};

/// The GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

/// Sends each operation as one authenticated `POST` to the configured endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlGateway {
    config: GatewayConfig,
}

impl GraphQlGateway {
    /// Creates a gateway for an already validated configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    // A fresh session per call; it is dropped on every exit path.
    fn client(&self, operation: &Operation) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .timeout(self.config.timeout())
            .user_agent(self.config.user_agent())
            .build()
            .map_err(|e| request_failed(operation, &e))
    }
}

/// Request body for `operation`.
pub fn request_body(operation: &Operation, variables: Value) -> Value {
    json!({
        "query": operation.text,
        "operationName": operation.name,
        "variables": variables,
    })
}

/// Classifies a raw HTTP response.
///
/// Non-success statuses win over everything else. A present `errors` member
/// discards any partial `data`.
pub fn interpret_response(
    operation: &str,
    status: StatusCode,
    body: &str,
) -> Result<Value, TransportError> {
    if !status.is_success() {
        return Err(TransportError::Status {
            operation: operation.to_string(),
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    let envelope: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| TransportError::InvalidBody {
            operation: operation.to_string(),
            message: e.to_string(),
        })?;
    if let Some(errors) = envelope.errors {
        return Err(TransportError::OperationErrors {
            operation: operation.to_string(),
            messages: errors.into_iter().map(|e| e.message).collect(),
        });
    }
    match envelope.data {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(TransportError::EmptyData {
            operation: operation.to_string(),
        }),
    }
}

fn request_failed(operation: &Operation, err: &reqwest::Error) -> TransportError {
    TransportError::Request {
        operation: operation.name.to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl GraphQlTransport for GraphQlGateway {
    #[instrument(skip(self, operation, variables), fields(operation = operation.name))]
    async fn execute(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<Value, TransportError> {
        let client = self.client(operation)?;
        debug!(endpoint = self.config.endpoint(), "sending GraphQL request");

        let response = client
            .post(self.config.endpoint())
            .bearer_auth(self.config.token().expose())
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .json(&request_body(operation, variables))
            .send()
            .await
            .map_err(|e| request_failed(operation, &e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| request_failed(operation, &e))?;

        let result = interpret_response(operation.name, status, &body);
        if let Err(err) = &result {
            warn!(error = %err, "GraphQL operation failed");
        }
        result
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
