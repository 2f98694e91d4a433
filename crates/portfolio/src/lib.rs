//! # Eagle Eye Portfolio Views
//!
//! This crate combines the per-account statistics into cross-account views:
//! rankings, warning sets, and daily portfolio totals, plus the read-only
//! overview consumed by any presentation layer.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Logic:** Builds strictly on `analytics` (Layer 1) and
//!   `core-types` (Layer 0). Data flows one direction; nothing here mutates
//!   the per-account records it is given.
//! - **Explicit Recomputation:** There is no incremental or reactive state.
//!   [`compute_overview`] is a pure function of the dataset; when the
//!   dataset changes, the caller runs it again and replaces the overview
//!   wholesale.
//!
//! ## Public API
//!
//! - `compute_overview`: the one-shot pipeline entry point.
//! - `PortfolioAggregator`: builds a `PortfolioSummary` from account stats.
//! - `PortfolioOverview`: the read-only query façade over the summary.
//! - `PortfolioError`: the specific error types that can be returned.

// Declare the modules that constitute this crate.
pub mod aggregator;
pub mod error;
pub mod facade;
pub mod summary;

// Re-export the key components to create a clean, public-facing API.
pub use aggregator::PortfolioAggregator;
pub use error::PortfolioError;
pub use facade::PortfolioOverview;
pub use summary::{DailyTotal, PortfolioSummary, RankedAccount};

use analytics::{AccountStatistics, StatisticsEngine};
use core_types::Dataset;

/// Runs the full analytics pipeline over a complete in-memory dataset.
///
/// Per-account statistics have no cross-account dependency, so they are
/// computed account by account; the aggregation step then joins all of them
/// into the portfolio summary, and the façade wraps the result. This is the
/// only entry point callers need: rerun it whenever the dataset changes.
pub fn compute_overview(dataset: &Dataset) -> Result<PortfolioOverview, PortfolioError> {
    let engine = StatisticsEngine::new();
    let accounts: Vec<AccountStatistics> = dataset
        .accounts
        .iter()
        .map(|series| engine.compute(series))
        .collect::<Result<_, _>>()?;

    let summary = PortfolioAggregator::new().aggregate(&accounts, &dataset.date_axis)?;
    Ok(PortfolioOverview::new(accounts, summary))
}
