// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record store writes.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A record was inserted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordInserted<'a> {
    pub table: &'a str,
    pub id: i64,
}

impl Display for RecordInserted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Inserted record {} into '{}'", self.id, self.table)
    }
}

impl StructuredLog for RecordInserted<'_> {
    fn log(&self) {
        tracing::info!(table = self.table, id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("record_inserted", span_name = name, table = self.table, id = self.id)
    }
}

/// An existing record was updated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordUpdated<'a> {
    pub table: &'a str,
    pub id: i64,
}

impl Display for RecordUpdated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Updated record {} in '{}'", self.id, self.table)
    }
}

impl StructuredLog for RecordUpdated<'_> {
    fn log(&self) {
        tracing::info!(table = self.table, id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("record_updated", span_name = name, table = self.table, id = self.id)
    }
}

/// A delete by id was issued.
///
/// # Log Level
/// `info!` when a row went away, `debug!` when nothing matched
///
/// # Example
/// ```
/// use the_monadic::observability::messages::store::RecordDeleted;
///
/// let msg = RecordDeleted {
///     table: "mahara_portfolio",
///     id: 4,
///     removed: false,
/// };
///
/// assert_eq!(msg.to_string(), "Delete of record 4 in 'mahara_portfolio' matched nothing");
/// ```
pub struct RecordDeleted<'a> {
    pub table: &'a str,
    pub id: i64,
    pub removed: bool,
}

impl Display for RecordDeleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.removed {
            write!(f, "Deleted record {} from '{}'", self.id, self.table)
        } else {
            write!(f, "Delete of record {} in '{}' matched nothing", self.id, self.table)
        }
    }
}

impl StructuredLog for RecordDeleted<'_> {
    fn log(&self) {
        if self.removed {
            tracing::info!(table = self.table, id = self.id, "{}", self);
        } else {
            tracing::debug!(table = self.table, id = self.id, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "record_deleted",
            span_name = name,
            table = self.table,
            id = self.id,
            removed = self.removed,
        )
    }
}
