use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standardized per-account metrics record.
///
/// This struct is the output of the `StatisticsEngine` and serves as the
/// data transfer object for account risk results throughout the system.
/// It carries the account identity and trade series alongside the derived
/// metrics so the aggregation layer can rank and total accounts without
/// going back to the raw dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStatistics {
    // I. Identity
    pub account_id: String,
    pub account_name: String,
    pub notional_limit: Decimal,
    /// The source per-date volumes, kept for date lookups during aggregation.
    pub trades: BTreeMap<NaiveDate, Decimal>,

    // II. Activity Metrics
    /// Sum of all recorded volumes, zeros included.
    pub total_volume: Decimal,
    /// Number of days with a valid trade (volume > 0).
    pub days_active: usize,
    /// Mean volume over valid trades; zero when there are none.
    pub avg_volume: Decimal,
    /// Sample standard deviation (n-1 divisor) over valid trades; zero when
    /// there are fewer than two.
    pub std_dev: Decimal,
    /// Largest valid trade, or zero when there are none.
    pub max_volume: Decimal,

    // III. Hot-Account Classification
    pub is_hot: bool,
    /// Excess of the maximum above the 2.5-sigma threshold; zero when the
    /// account is not hot. Used only for ranking.
    pub hot_score: Decimal,

    // IV. Limit Monitoring
    /// `max_volume / notional_limit`. Always defined: the limit is positive.
    pub current_utilization: Decimal,
    pub is_near_limit: bool,
    pub is_over_limit: bool,
    /// Number of valid-trade days at or above 70% of the limit.
    pub limit_warning_count: usize,
}

impl AccountStatistics {
    /// Returns the volume recorded on `date`, or zero when the account has
    /// no entry for it.
    pub fn volume_on(&self, date: NaiveDate) -> Decimal {
        self.trades.get(&date).copied().unwrap_or(Decimal::ZERO)
    }
}
