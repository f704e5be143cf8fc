// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory collaborators for tests and local runs.
//!
//! - **MemoryStore**: tables of JSON records with per-table auto-increment ids
//! - **RecordingNotifier**: keeps every notified event in order
//! - **ScriptedTransport**: replays queued outcomes and records the calls made

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex as AsyncMutex;

use super::{Criteria, EventNotifier, Record, RecordStore, RemoteCall, RemoteOutcome, RemoteTransport};
use crate::errors::{ServiceError, ServiceResult};
use crate::maybe::Maybe;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Record>,
    next_id: i64,
}

/// A [`RecordStore`] backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `table`.
    pub fn count(&self, table: &str) -> usize {
        self.tables
            .read()
            .map(|tables| tables.get(table).map_or(0, |t| t.rows.len()))
            .unwrap_or(0)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> ServiceError {
    ServiceError::Store("store lock poisoned".to_string())
}

fn record_id(record: &Record) -> ServiceResult<i64> {
    record
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| ServiceError::MalformedRecord("record has no integer 'id'".to_string()))
}

impl RecordStore for MemoryStore {
    fn find_one(&self, table: &str, criteria: &Criteria) -> ServiceResult<Maybe<Record>> {
        let tables = self.tables.read().map_err(poisoned)?;
        let found = tables
            .get(table)
            .and_then(|t| t.rows.iter().find(|row| criteria.matches(row)))
            .cloned();
        Ok(found.into())
    }

    fn find_many(&self, table: &str, criteria: &Criteria) -> ServiceResult<Vec<Record>> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables
            .get(table)
            .map(|t| {
                t.rows
                    .iter()
                    .filter(|row| criteria.matches(row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn insert(&self, table: &str, mut record: Record) -> ServiceResult<i64> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        let table = tables.entry(table.to_string()).or_default();

        table.next_id += 1;
        let id = table.next_id;
        record.insert("id".to_string(), json!(id));
        table.rows.push(record);
        Ok(id)
    }

    fn update(&self, table: &str, record: &Record) -> ServiceResult<()> {
        let id = record_id(record)?;
        let mut tables = self.tables.write().map_err(poisoned)?;

        let row = tables
            .get_mut(table)
            .and_then(|t| {
                t.rows
                    .iter_mut()
                    .find(|row| row.get("id").and_then(Value::as_i64) == Some(id))
            })
            .ok_or_else(|| ServiceError::Store(format!("no record {} in '{}'", id, table)))?;

        *row = record.clone();
        Ok(())
    }

    fn delete(&self, table: &str, criteria: &Criteria) -> ServiceResult<bool> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        let Some(table) = tables.get_mut(table) else {
            return Ok(false);
        };

        let before = table.rows.len();
        table.rows.retain(|row| !criteria.matches(row));
        Ok(table.rows.len() < before)
    }
}

/// An [`EventNotifier`] that remembers what it was told.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|(name, _)| name).collect()
    }
}

impl EventNotifier for RecordingNotifier {
    fn notify(&self, event_name: &str, payload: &Value) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event_name.to_string(), payload.clone()));
    }
}

/// A [`RemoteTransport`] that replays queued outcomes in order.
///
/// Once the queue is drained every call fails with a `"no scripted outcome"`
/// error payload.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: AsyncMutex<VecDeque<RemoteOutcome>>,
    calls: AsyncMutex<Vec<(i64, RemoteCall)>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: impl IntoIterator<Item = RemoteOutcome>) -> Self {
        Self {
            outcomes: AsyncMutex::new(outcomes.into_iter().collect()),
            calls: AsyncMutex::new(Vec::new()),
        }
    }

    pub async fn push(&self, outcome: RemoteOutcome) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// Calls received so far, with the host they were sent to.
    pub async fn calls(&self) -> Vec<(i64, RemoteCall)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl RemoteTransport for ScriptedTransport {
    async fn invoke(&self, host_id: i64, call: RemoteCall) -> RemoteOutcome {
        self.calls.lock().await.push((host_id, call));
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| RemoteOutcome::failure("no scripted outcome"))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
