use analytics::AccountStatistics;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::summary::PortfolioSummary;

/// The read-only query façade over one pipeline run.
///
/// Owns the per-account statistics and the portfolio summary, and exposes
/// the scalar rollups a presentation layer needs. There are no mutation
/// methods: when the dataset changes, the caller reruns the pipeline and
/// replaces the overview wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    accounts: Vec<AccountStatistics>,
    summary: PortfolioSummary,
}

impl PortfolioOverview {
    pub fn new(accounts: Vec<AccountStatistics>, summary: PortfolioSummary) -> Self {
        Self { accounts, summary }
    }

    pub fn summary(&self) -> &PortfolioSummary {
        &self.summary
    }

    /// All per-account statistics, in ingestion order.
    pub fn accounts(&self) -> &[AccountStatistics] {
        &self.accounts
    }

    /// Looks up one account by its stable id.
    pub fn account(&self, account_id: &str) -> Option<&AccountStatistics> {
        self.accounts.iter().find(|a| a.account_id == account_id)
    }

    pub fn total_accounts(&self) -> usize {
        self.accounts.len()
    }

    pub fn total_hot_accounts(&self) -> usize {
        self.summary.hot_accounts.len()
    }

    pub fn total_limit_warning_accounts(&self) -> usize {
        self.summary.limit_warning_accounts.len()
    }

    pub fn total_over_limit_accounts(&self) -> usize {
        self.summary.over_limit_accounts.len()
    }

    /// Percentage of accounts at risk: the limit-warning count plus the
    /// over-limit count, relative to the total. An over-limit account is
    /// also near-limit, so it contributes to both counts.
    ///
    /// `None` when the portfolio is empty: the ratio is undefined there,
    /// and callers are expected to render it as "not applicable" rather
    /// than divide by zero.
    pub fn accounts_at_risk_pct(&self) -> Option<Decimal> {
        if self.accounts.is_empty() {
            return None;
        }
        let at_risk = Decimal::from(
            self.total_limit_warning_accounts() + self.total_over_limit_accounts(),
        );
        Some(at_risk / Decimal::from(self.total_accounts()) * dec!(100))
    }
}
