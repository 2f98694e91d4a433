use crate::error::AnalyticsError;
use crate::report::AccountStatistics;
use core_types::AccountSeries;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Number of sample standard deviations above the mean at which an account's
/// maximum volume counts as anomalous.
pub const HOT_SIGMA_MULTIPLIER: Decimal = dec!(2.5);

/// Fraction of the notional limit at which an account is "near limit", and
/// at which a single trading day counts toward the limit-warning tally.
pub const NEAR_LIMIT_THRESHOLD: Decimal = dec!(0.70);

/// A stateless calculator for deriving risk metrics from one account's
/// trading series.
#[derive(Debug, Default)]
pub struct StatisticsEngine {}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating per-account statistics.
    ///
    /// # Arguments
    ///
    /// * `series` - One account's validated trading series. The ingestion
    ///   builder guarantees `notional_limit > 0`, so every ratio below is
    ///   defined.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AccountStatistics` or an `AnalyticsError`.
    pub fn compute(&self, series: &AccountSeries) -> Result<AccountStatistics, AnalyticsError> {
        // --- 1. Partition into valid trades (volume > 0), in date order ---
        let valid: Vec<Decimal> = series.valid_trades();
        let total_volume: Decimal = series.trades.values().copied().sum();
        let days_active = valid.len();

        // --- 2. Mean over valid trades ---
        let avg_volume = if days_active > 0 {
            let valid_sum: Decimal = valid.iter().copied().sum();
            valid_sum / Decimal::from(days_active)
        } else {
            Decimal::ZERO
        };

        // --- 3. Sample standard deviation (n-1 divisor) ---
        // The Bessel-corrected divisor is contractual: it keeps the estimator
        // unbiased, and the hot threshold below is calibrated against it.
        let std_dev = if days_active >= 2 {
            let sum_sq_dev: Decimal = valid
                .iter()
                .map(|v| (*v - avg_volume) * (*v - avg_volume))
                .sum();
            let variance = sum_sq_dev / Decimal::from(days_active - 1);
            variance.sqrt().ok_or_else(|| {
                AnalyticsError::Calculation(
                    "failed to take square root of sample variance".to_string(),
                )
            })?
        } else {
            Decimal::ZERO
        };

        // --- 4. Maximum valid trade ---
        let max_volume = valid.iter().copied().max().unwrap_or(Decimal::ZERO);

        // --- 5. Hot-account classification ---
        // The std_dev > 0 guard keeps single-trade and constant-volume
        // accounts from being flagged: a zero-variance series cannot be
        // statistically anomalous. The comparison is strict.
        let hot_threshold = avg_volume + HOT_SIGMA_MULTIPLIER * std_dev;
        let is_hot = std_dev > Decimal::ZERO && max_volume > hot_threshold;
        let hot_score = if is_hot {
            max_volume - hot_threshold
        } else {
            Decimal::ZERO
        };

        // --- 6. Limit utilization ---
        // Exactly 100% utilization is near-limit but not over-limit.
        let current_utilization = max_volume / series.notional_limit;
        let is_near_limit = current_utilization >= NEAR_LIMIT_THRESHOLD;
        let is_over_limit = current_utilization > Decimal::ONE;

        // --- 7. Limit-warning days ---
        let warning_floor = NEAR_LIMIT_THRESHOLD * series.notional_limit;
        let limit_warning_count = valid.iter().filter(|v| **v >= warning_floor).count();

        Ok(AccountStatistics {
            account_id: series.account_id.clone(),
            account_name: series.account_name.clone(),
            notional_limit: series.notional_limit,
            trades: series.trades.clone(),
            total_volume,
            days_active,
            avg_volume,
            std_dev,
            max_volume,
            is_hot,
            hot_score,
            current_utilization,
            is_near_limit,
            is_over_limit,
            limit_warning_count,
        })
    }
}
