// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Portfolio synchronisation built on the value wrappers.
//!
//! Remote outcomes are handled as `Either` projections and record lookups as
//! `Maybe`; see [`PortfolioService`].

mod portfolio;

#[cfg(test)]
mod integration_tests;

pub use portfolio::PortfolioService;
