//! GitHub GraphQL transport adapter.
//!
//! Implements the [`projects::GraphQlTransport`] port over HTTPS using
//! `reqwest`, and wires it into a ready [`ProjectsEngine`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. It knows
//! how to reach the endpoint and how to classify what comes back; the
//! [`projects`] crate decides what the data means.

pub mod config;
pub mod gateway;

pub use config::{ApiToken, GatewayConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use gateway::{interpret_response, GraphQlGateway};

use projects::ProjectsEngine;

/// Builds an engine that talks to GitHub through a [`GraphQlGateway`].
pub fn connect(config: GatewayConfig) -> ProjectsEngine<GraphQlGateway> {
    ProjectsEngine::new(GraphQlGateway::new(config))
}
