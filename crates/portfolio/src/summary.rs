use analytics::AccountStatistics;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An account paired with its volume on the most recent axis date, the key
/// used by the top-volume ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAccount {
    pub account: AccountStatistics,
    pub recent_volume: Decimal,
}

/// The portfolio-wide volume total for one date of the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_volume: Decimal,
}

/// All cross-account views derived from one pass over the account
/// statistics. A pure projection: recomputed whenever the underlying
/// dataset changes, never maintained incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Top accounts by volume on the last axis date, descending, at most
    /// ten entries, ties in input order.
    pub top_by_recent_volume: Vec<RankedAccount>,
    /// Hot accounts by hot score, descending, at most ten entries.
    pub hot_accounts: Vec<AccountStatistics>,
    /// Every near-limit account by utilization, descending, uncapped.
    pub limit_warning_accounts: Vec<AccountStatistics>,
    /// Every over-limit account, in input order (set semantics).
    pub over_limit_accounts: Vec<AccountStatistics>,
    /// Per-date portfolio volume totals, aligned to the date axis.
    pub daily_totals: Vec<DailyTotal>,
}
