// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for the portfolio service.
//!
//! All rules run and every failure is reported, so a broken config file can be
//! fixed in one pass.
//!
//! # Examples
//!
//! ```rust
//! use the_monadic::config::{validate_config, ServiceConfig};
//! use the_monadic::errors::ValidationError;
//!
//! let mut config = ServiceConfig::new("https://moodle.example.edu");
//! assert!(validate_config(&config).is_ok());
//!
//! config.portfolio_table.clear();
//! assert_eq!(
//!     validate_config(&config),
//!     Err(vec![ValidationError::EmptyPortfolioTable])
//! );
//! ```

use crate::config::ServiceConfig;
use crate::errors::ValidationError;

/// Validate a service configuration.
///
/// Returns every rule violation found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.wwwroot.trim().is_empty() {
        errors.push(ValidationError::EmptyWwwroot);
    }

    if config.portfolio_table.trim().is_empty() {
        errors.push(ValidationError::EmptyPortfolioTable);
    }

    let methods = [
        ("get_views_for_user", &config.remote_methods.get_views_for_user),
        (
            "submit_view_for_assessment",
            &config.remote_methods.submit_view_for_assessment,
        ),
        ("release_submitted_view", &config.remote_methods.release_submitted_view),
    ];
    for (method, path) in methods {
        if path.trim().is_empty() {
            errors.push(ValidationError::EmptyRemoteMethod {
                method: method.to_string(),
            });
        }
    }

    let prefix = &config.events.prefix;
    let prefix_ok = !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !prefix_ok {
        errors.push(ValidationError::InvalidEventPrefix {
            prefix: prefix.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
