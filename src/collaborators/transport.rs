// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::either::Either;

/// A remote method invocation: method path plus ordered parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCall {
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

impl RemoteCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: Vec::new(),
        }
    }

    /// Append a positional parameter.
    pub fn param(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// The completed result of a remote call.
///
/// Exactly one of `payload` / `error` is meaningful, selected by `succeeded`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteOutcome {
    pub succeeded: bool,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub error: Value,
}

impl RemoteOutcome {
    pub fn success(payload: impl Into<Value>) -> Self {
        Self {
            succeeded: true,
            payload: payload.into(),
            error: Value::Null,
        }
    }

    pub fn failure(error: impl Into<Value>) -> Self {
        Self {
            succeeded: false,
            payload: Value::Null,
            error: error.into(),
        }
    }

    /// `Right(payload)` on success, `Left(error)` on failure.
    pub fn into_either(self) -> Either<Value, Value> {
        if self.succeeded {
            Either::Right(self.payload)
        } else {
            Either::Left(self.error)
        }
    }
}

impl From<RemoteOutcome> for Either<Value, Value> {
    fn from(outcome: RemoteOutcome) -> Self {
        outcome.into_either()
    }
}

/// Sends a [`RemoteCall`] to a peer host.
///
/// Timeouts, retries and cancellation belong to the implementation; callers
/// only see the completed outcome.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    async fn invoke(&self, host_id: i64, call: RemoteCall) -> RemoteOutcome;

    fn name(&self) -> &'static str;
}
