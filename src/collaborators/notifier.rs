// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

/// Fire-and-forget named event sink.
pub trait EventNotifier: Send + Sync {
    fn notify(&self, event_name: &str, payload: &Value);
}
