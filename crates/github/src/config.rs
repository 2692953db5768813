//! Gateway configuration: credential, endpoint, and per-call timeout.

use std::fmt;
use std::time::Duration;

use projects::{ProjectsError, ProjectsResult};

/// Public GitHub GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Per-call timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Media type requested from the GraphQL API.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v4+json";

/// A GitHub personal access token.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// The secret itself, for the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

/// Everything the gateway needs to reach the API.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    token: ApiToken,
    endpoint: String,
    timeout: Duration,
    user_agent: String,
}

impl GatewayConfig {
    /// Validates the credential and applies defaults.
    ///
    /// Fails with [`ProjectsError::Configuration`] when the token is absent
    /// or blank.
    pub fn new(token: Option<String>) -> ProjectsResult<Self> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProjectsError::Configuration {
                message: "a GitHub token is required (set GITHUB_TOKEN or pass --token)"
                    .to_string(),
            })?;
        Ok(Self {
            token: ApiToken(token),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("ghprojects/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Targets another GraphQL endpoint, e.g. GitHub Enterprise Server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replaces the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The validated credential.
    pub fn token(&self) -> &ApiToken {
        &self.token
    }

    /// URL every operation is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `User-Agent` header value (`ghprojects/<version>`).
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
