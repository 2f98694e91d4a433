//! # Eagle Eye Analytics Engine
//!
//! This crate derives the per-account risk and activity metrics from a
//! validated trading series. It acts as the "unbiased judge" of account
//! behaviour: averages, dispersion, limit utilization, and hot-account
//! classification.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `StatisticsEngine` is a stateless
//!   calculator. It takes one `AccountSeries` as input and produces an
//!   `AccountStatistics` as output, with no cross-account state. This makes
//!   it highly reliable, easy to test, and trivially parallelizable.
//!
//! ## Public API
//!
//! - `StatisticsEngine`: the struct that contains the calculation logic.
//! - `AccountStatistics`: the standardized per-account metrics record.
//! - `AnalyticsError`: the specific error types that can be returned.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{StatisticsEngine, HOT_SIGMA_MULTIPLIER, NEAR_LIMIT_THRESHOLD};
pub use error::AnalyticsError;
pub use report::AccountStatistics;
