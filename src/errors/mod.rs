// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod monad;
mod service;

pub use config::{ConfigError, ValidationError};
pub use monad::{MonadError, MonadResult, EMPTY_VALUE_MESSAGE};
pub use service::{ServiceError, ServiceResult};
