//! Scripted in-memory transport for engine tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;
use crate::transport::{GraphQlTransport, Operation};
use crate::ProjectsEngine;

/// One recorded `execute` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub variables: Value,
}

/// Returns queued responses in order and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a successful `data` payload.
    pub fn respond(&self, data: Value) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(data));
        self
    }

    /// Queues a failure.
    pub fn fail(&self, err: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|c| c.operation).collect()
    }

    /// Variables of the most recent call to `operation`.
    pub fn variables_of(&self, operation: &str) -> Value {
        self.calls()
            .into_iter()
            .rev()
            .find(|c| c.operation == operation)
            .map(|c| c.variables)
            .expect("operation was not called")
    }
}

#[async_trait]
impl GraphQlTransport for ScriptedTransport {
    async fn execute(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation: operation.name,
            variables,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request {
                    operation: operation.name.to_string(),
                    message: "no scripted response left".to_string(),
                })
            })
    }
}

/// An engine sharing `transport` with the test.
pub fn engine(transport: &Arc<ScriptedTransport>) -> ProjectsEngine<Arc<ScriptedTransport>> {
    ProjectsEngine::new(Arc::clone(transport))
}
