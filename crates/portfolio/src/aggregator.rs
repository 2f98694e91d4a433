use analytics::AccountStatistics;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::PortfolioError;
use crate::summary::{DailyTotal, PortfolioSummary, RankedAccount};

/// Maximum number of entries in the capped rankings.
const TOP_K: usize = 10;

/// A stateless builder for the cross-account portfolio views.
#[derive(Debug, Default)]
pub struct PortfolioAggregator {}

impl PortfolioAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combines all per-account statistics into a `PortfolioSummary`.
    ///
    /// # Arguments
    ///
    /// * `accounts` - The per-account statistics, in ingestion order. That
    ///   order is the tie-break for every ranking, so it must be stable
    ///   across runs for the output to be deterministic.
    /// * `date_axis` - The shared, ordered trading dates. Must be non-empty;
    ///   its last entry is the "most recent date" used for the top-volume
    ///   ranking.
    pub fn aggregate(
        &self,
        accounts: &[AccountStatistics],
        date_axis: &[NaiveDate],
    ) -> Result<PortfolioSummary, PortfolioError> {
        let most_recent_date = *date_axis.last().ok_or(PortfolioError::EmptyDateAxis)?;

        // --- 1. Most-recent-volume ranking ---
        let ranked: Vec<RankedAccount> = accounts
            .iter()
            .map(|account| RankedAccount {
                recent_volume: account.volume_on(most_recent_date),
                account: account.clone(),
            })
            .collect();
        let top_by_recent_volume = top_k_by(&ranked, TOP_K, |r| r.recent_volume);

        // --- 2. Hot ranking ---
        let hot: Vec<AccountStatistics> = accounts
            .iter()
            .filter(|a| a.is_hot)
            .cloned()
            .collect();
        let hot_accounts = top_k_by(&hot, TOP_K, |a| a.hot_score);

        // --- 3. Limit-warning set, by utilization, uncapped ---
        let near: Vec<AccountStatistics> = accounts
            .iter()
            .filter(|a| a.is_near_limit)
            .cloned()
            .collect();
        let limit_warning_accounts = top_k_by(&near, near.len(), |a| a.current_utilization);

        // --- 4. Over-limit set ---
        let over_limit_accounts: Vec<AccountStatistics> = accounts
            .iter()
            .filter(|a| a.is_over_limit)
            .cloned()
            .collect();

        // --- 5. Daily portfolio totals, in axis order ---
        let daily_totals: Vec<DailyTotal> = date_axis
            .iter()
            .map(|date| DailyTotal {
                date: *date,
                total_volume: accounts
                    .iter()
                    .map(|a| a.volume_on(*date))
                    .sum::<Decimal>(),
            })
            .collect();

        Ok(PortfolioSummary {
            top_by_recent_volume,
            hot_accounts,
            limit_warning_accounts,
            over_limit_accounts,
            daily_totals,
        })
    }
}

/// Sorts `items` descending by `key` and keeps the first `k`.
///
/// The sort is stable, so items with equal keys stay in their input order.
/// Every ranking goes through this one helper so the tie-break policy is
/// uniform.
fn top_k_by<T, K, F>(items: &[T], k: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted: Vec<T> = items.to_vec();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted.truncate(k);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::StatisticsEngine;
    use core_types::AccountSeries;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn axis(len: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..len)
            .map(|i| start + chrono::Days::new(i as u64))
            .collect()
    }

    fn stats(id: &str, limit: Decimal, volumes: &[Decimal]) -> AccountStatistics {
        let dates = axis(volumes.len());
        let trades: BTreeMap<NaiveDate, Decimal> =
            dates.into_iter().zip(volumes.iter().copied()).collect();
        let series = AccountSeries {
            account_id: id.to_string(),
            account_name: format!("Account {id}"),
            notional_limit: limit,
            trades,
        };
        StatisticsEngine::new().compute(&series).unwrap()
    }

    #[test]
    fn top_ranking_is_capped_sorted_and_stable() {
        // Twelve accounts; recent volume is the last value. Two pairs tie.
        let volumes: Vec<Decimal> = vec![
            dec!(50),
            dec!(90),
            dec!(50), // ties with the first
            dec!(70),
            dec!(20),
            dec!(90), // ties with the second
            dec!(10),
            dec!(30),
            dec!(40),
            dec!(60),
            dec!(80),
            dec!(15),
        ];
        let accounts: Vec<AccountStatistics> = volumes
            .iter()
            .enumerate()
            .map(|(i, v)| stats(&format!("A{i:02}"), dec!(1000), &[*v]))
            .collect();

        let summary = PortfolioAggregator::new()
            .aggregate(&accounts, &axis(1))
            .unwrap();

        let top = &summary.top_by_recent_volume;
        assert_eq!(top.len(), 10);
        // Non-increasing by recent volume.
        for pair in top.windows(2) {
            assert!(pair[0].recent_volume >= pair[1].recent_volume);
        }
        // Ties keep input order: A01 before A05, A00 before A02.
        let ids: Vec<&str> = top.iter().map(|r| r.account.account_id.as_str()).collect();
        assert_eq!(&ids[..2], &["A01", "A05"]);
        let pos_a00 = ids.iter().position(|id| *id == "A00").unwrap();
        let pos_a02 = ids.iter().position(|id| *id == "A02").unwrap();
        assert!(pos_a00 < pos_a02);
    }

    #[test]
    fn hot_ranking_only_contains_hot_accounts() {
        // One spiky account and one flat one.
        let spiky = stats(
            "HOT",
            dec!(10000),
            &[
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(2000),
            ],
        );
        assert!(spiky.is_hot);
        let flat = stats("FLAT", dec!(10000), &[dec!(100); 10]);
        assert!(!flat.is_hot);

        let summary = PortfolioAggregator::new()
            .aggregate(&[flat, spiky], &axis(10))
            .unwrap();
        assert_eq!(summary.hot_accounts.len(), 1);
        assert_eq!(summary.hot_accounts[0].account_id, "HOT");
    }

    #[test]
    fn limit_warning_set_is_uncapped_and_sorted_by_utilization() {
        // Eleven accounts all at or above 70% utilization.
        let accounts: Vec<AccountStatistics> = (0..11)
            .map(|i| {
                stats(
                    &format!("W{i:02}"),
                    dec!(100),
                    &[dec!(70) + Decimal::from(i as u32)],
                )
            })
            .collect();
        let summary = PortfolioAggregator::new()
            .aggregate(&accounts, &axis(1))
            .unwrap();
        assert_eq!(summary.limit_warning_accounts.len(), 11);
        for pair in summary.limit_warning_accounts.windows(2) {
            assert!(pair[0].current_utilization >= pair[1].current_utilization);
        }
        assert_eq!(summary.limit_warning_accounts[0].account_id, "W10");
    }

    #[test]
    fn daily_totals_conserve_volume() {
        let accounts = vec![
            stats("A1", dec!(1000), &[dec!(10), dec!(0), dec!(30)]),
            stats("A2", dec!(1000), &[dec!(5), dec!(15), dec!(0)]),
        ];
        let dates = axis(3);
        let summary = PortfolioAggregator::new()
            .aggregate(&accounts, &dates)
            .unwrap();

        let totals: Vec<Decimal> = summary
            .daily_totals
            .iter()
            .map(|d| d.total_volume)
            .collect();
        assert_eq!(totals, vec![dec!(15), dec!(15), dec!(30)]);

        // Grand total equals the sum of per-account totals.
        let grand: Decimal = totals.iter().copied().sum();
        let by_account: Decimal = accounts.iter().map(|a| a.total_volume).sum();
        assert_eq!(grand, by_account);
    }

    #[test]
    fn empty_portfolio_produces_defined_empty_views() {
        let dates = axis(3);
        let summary = PortfolioAggregator::new().aggregate(&[], &dates).unwrap();
        assert!(summary.top_by_recent_volume.is_empty());
        assert!(summary.hot_accounts.is_empty());
        assert!(summary.limit_warning_accounts.is_empty());
        assert!(summary.over_limit_accounts.is_empty());
        assert_eq!(summary.daily_totals.len(), 3);
        assert!(summary
            .daily_totals
            .iter()
            .all(|d| d.total_volume == Decimal::ZERO));
    }

    #[test]
    fn empty_date_axis_is_rejected() {
        let result = PortfolioAggregator::new().aggregate(&[], &[]);
        assert!(matches!(result, Err(PortfolioError::EmptyDateAxis)));
    }
}
