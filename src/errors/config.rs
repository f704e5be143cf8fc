// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

/// Problems found while validating a loaded service configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The record table name is blank
    EmptyPortfolioTable,
    /// A remote method path is blank
    EmptyRemoteMethod {
        /// Which method slot was left empty
        method: String,
    },
    /// The site root used to build jump links is blank
    EmptyWwwroot,
    /// The event name prefix contains characters outside `[a-z0-9_]`
    InvalidEventPrefix {
        /// The offending prefix
        prefix: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyPortfolioTable => {
                write!(f, "portfolio_table must not be empty")
            }
            ValidationError::EmptyRemoteMethod { method } => {
                write!(f, "Remote method '{}' must not be empty", method)
            }
            ValidationError::EmptyWwwroot => write!(f, "wwwroot must not be empty"),
            ValidationError::InvalidEventPrefix { prefix } => {
                write!(
                    f,
                    "Event prefix '{}' may only contain lowercase letters, digits and '_'",
                    prefix
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from reading and validating a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File I/O error while reading the config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML.
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    /// One or more validation rules failed.
    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
