// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A named event was handed to the notifier.
///
/// # Log Level
/// `debug!` - Fire-and-forget, high volume
pub struct EventTriggered<'a> {
    pub event_name: &'a str,
}

impl Display for EventTriggered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Triggered event '{}'", self.event_name)
    }
}

impl StructuredLog for EventTriggered<'_> {
    fn log(&self) {
        tracing::debug!(event_name = self.event_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("event_triggered", span_name = name, event_name = self.event_name)
    }
}
