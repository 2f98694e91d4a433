use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One trading account's raw input: identity, notional limit, and the
/// per-date volume series.
///
/// Built once per ingestion pass and immutable afterwards. The `trades`
/// keys are expected to match the dataset's shared date axis; a missing or
/// unparseable cell is recorded as volume zero and does not count as a
/// valid trade (a valid trade is a volume strictly greater than zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSeries {
    pub account_id: String,
    pub account_name: String,
    /// The configured ceiling on trading volume. Guaranteed positive by
    /// the ingestion builder, so utilization ratios are always defined.
    pub notional_limit: Decimal,
    /// Per-date volumes. `BTreeMap` keeps iteration in calendar order,
    /// which is the chronological order of the date axis.
    pub trades: BTreeMap<NaiveDate, Decimal>,
}

impl AccountSeries {
    /// Returns the volume recorded on `date`, or zero when the account has
    /// no entry for it.
    pub fn volume_on(&self, date: NaiveDate) -> Decimal {
        self.trades.get(&date).copied().unwrap_or(Decimal::ZERO)
    }

    /// The valid trades (volume > 0) of this series, in date order.
    pub fn valid_trades(&self) -> Vec<Decimal> {
        self.trades
            .values()
            .copied()
            .filter(|v| *v > Decimal::ZERO)
            .collect()
    }
}

/// A complete in-memory trading dataset: all accounts plus the shared,
/// ordered date axis that forms the columns of the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub accounts: Vec<AccountSeries>,
    pub date_axis: Vec<NaiveDate>,
}

impl Dataset {
    /// Verifies that every account's trade dates agree exactly with the
    /// shared date axis.
    ///
    /// The ingestion builder establishes this invariant by construction,
    /// so the check is only needed for datasets assembled elsewhere. It
    /// exists so that an inconsistent dataset fails fast instead of
    /// silently producing skewed aggregates.
    pub fn verify_integrity(&self) -> Result<(), CoreError> {
        for account in &self.accounts {
            if account.trades.len() != self.date_axis.len() {
                return Err(CoreError::DataIntegrity {
                    account_id: account.account_id.clone(),
                    detail: format!(
                        "account has {} trade dates, date axis has {}",
                        account.trades.len(),
                        self.date_axis.len()
                    ),
                });
            }
            for date in &self.date_axis {
                if !account.trades.contains_key(date) {
                    return Err(CoreError::DataIntegrity {
                        account_id: account.account_id.clone(),
                        detail: format!("missing trade entry for axis date {date}"),
                    });
                }
            }
        }
        Ok(())
    }
}
