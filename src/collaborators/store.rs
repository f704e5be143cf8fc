// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use crate::errors::ServiceResult;
use crate::maybe::Maybe;

/// A stored row: field name to value. Rows carry their key in `id`.
pub type Record = Map<String, Value>;

/// Newtype wrapper for field-match criteria
///
/// A record matches when every listed field is present and equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria(pub Vec<(String, Value)>);

impl Criteria {
    /// Create empty criteria, which match every record
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a field that must equal `value`
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((field.into(), value.into()));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.0
            .iter()
            .all(|(field, value)| record.get(field) == Some(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.0.iter()
    }
}

impl From<Vec<(String, Value)>> for Criteria {
    fn from(fields: Vec<(String, Value)>) -> Self {
        Self(fields)
    }
}

/// Keyed record storage.
pub trait RecordStore: Send + Sync {
    /// First record matching `criteria`.
    fn find_one(&self, table: &str, criteria: &Criteria) -> ServiceResult<Maybe<Record>>;

    fn find_many(&self, table: &str, criteria: &Criteria) -> ServiceResult<Vec<Record>>;

    /// Store a new record and return its assigned id.
    fn insert(&self, table: &str, record: Record) -> ServiceResult<i64>;

    /// Replace the record with the same `id`.
    fn update(&self, table: &str, record: &Record) -> ServiceResult<()>;

    /// Remove every matching record; true when anything was removed.
    fn delete(&self, table: &str, criteria: &Criteria) -> ServiceResult<bool>;
}
