//! # Eagle Eye Ingestion
//!
//! This crate normalizes raw spreadsheet rows into validated [`core_types`]
//! records. It is the only place where malformed input is handled; the
//! downstream statistics and aggregation crates assume clean data.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   file formats or column layouts — an external collaborator hands over
//!   already-extracted cell text as [`RawAccountRow`]s.
//! - **Reject, don't raise:** An invalid row (missing identity, non-positive
//!   limit) is dropped silently; only the aggregate drop count is reported,
//!   as a log line. Dropping a row is never fatal to the pipeline.
//!
//! ## Public API
//!
//! - `RawAccountRow`: the raw cell text for one account row.
//! - `build_account`: validates one row into an `AccountSeries`.
//! - `build_dataset`: assembles the full `Dataset` from a date axis and rows.
//! - `IngestionError`: the specific error types that can be returned.

// Declare the modules that constitute this crate.
pub mod builder;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use builder::{build_account, build_dataset, RawAccountRow};
pub use error::IngestionError;
