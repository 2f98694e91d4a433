use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use core_types::{AccountSeries, Dataset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::IngestionError;

/// The raw cell text for one account row, as extracted by the spreadsheet
/// collaborator: identity columns, the notional-limit column, and one cell
/// per date-axis column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAccountRow {
    pub account_id: String,
    pub account_name: String,
    pub notional_limit: String,
    pub cells: Vec<String>,
}

/// Validates one raw row into an [`AccountSeries`].
///
/// Returns `None` when the row is invalid: empty account id or name, or a
/// notional limit that is missing, non-numeric, or not strictly positive.
/// Rejection is silent by design; the caller decides whether drop counts
/// are worth reporting.
///
/// Each volume cell is coerced to a non-negative number: blank or
/// non-numeric cells become zero, as do negative values. The `trades` map
/// is built by zipping `date_axis` with the coerced cells; surplus cells
/// are ignored and short rows are padded with zeros so the row always
/// covers the full axis.
pub fn build_account(row: &RawAccountRow, date_axis: &[NaiveDate]) -> Option<AccountSeries> {
    let account_id = row.account_id.trim();
    let account_name = row.account_name.trim();
    if account_id.is_empty() || account_name.is_empty() {
        debug!(account_id, "dropping row with missing identity fields");
        return None;
    }

    let notional_limit = match Decimal::from_str(row.notional_limit.trim()) {
        Ok(limit) if limit > Decimal::ZERO => limit,
        _ => {
            debug!(account_id, limit = %row.notional_limit, "dropping row with non-positive limit");
            return None;
        }
    };

    let trades: BTreeMap<NaiveDate, Decimal> = date_axis
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let volume = row.cells.get(i).map(|c| coerce_volume(c)).unwrap_or(Decimal::ZERO);
            (*date, volume)
        })
        .collect();

    Some(AccountSeries {
        account_id: account_id.to_string(),
        account_name: account_name.to_string(),
        notional_limit,
        trades,
    })
}

/// Assembles a [`Dataset`] from the shared date axis and all raw rows.
///
/// Invalid rows are dropped; the aggregate drop count is logged at `warn`
/// level. The only hard failure is an empty date axis, which would leave
/// the aggregation step without a "most recent date" to rank by.
pub fn build_dataset(
    date_axis: Vec<NaiveDate>,
    rows: &[RawAccountRow],
) -> Result<Dataset, IngestionError> {
    if date_axis.is_empty() {
        return Err(IngestionError::EmptyDateAxis);
    }

    let accounts: Vec<AccountSeries> = rows
        .iter()
        .filter_map(|row| build_account(row, &date_axis))
        .collect();

    let dropped = rows.len() - accounts.len();
    if dropped > 0 {
        warn!(dropped, total = rows.len(), "dropped invalid account rows during ingestion");
    }

    Ok(Dataset {
        accounts,
        date_axis,
    })
}

/// Coerces one volume cell to a non-negative `Decimal`. Anything that does
/// not parse, and any negative value, becomes zero.
fn coerce_volume(cell: &str) -> Decimal {
    match Decimal::from_str(cell.trim()) {
        Ok(v) if v > Decimal::ZERO => v,
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn axis(dates: &[&str]) -> Vec<NaiveDate> {
        dates
            .iter()
            .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap())
            .collect()
    }

    fn row(id: &str, name: &str, limit: &str, cells: &[&str]) -> RawAccountRow {
        RawAccountRow {
            account_id: id.to_string(),
            account_name: name.to_string(),
            notional_limit: limit.to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn builds_trades_in_axis_order() {
        let axis = axis(&["2024-01-02", "2024-01-03", "2024-01-04"]);
        let s = build_account(&row("GS001", "Goldman Sachs", "120", &["30", "0", "45.5"]), &axis)
            .unwrap();
        assert_eq!(s.notional_limit, dec!(120));
        let volumes: Vec<Decimal> = s.trades.values().copied().collect();
        assert_eq!(volumes, vec![dec!(30), dec!(0), dec!(45.5)]);
    }

    #[test]
    fn rejects_missing_identity_and_bad_limits() {
        let axis = axis(&["2024-01-02"]);
        assert!(build_account(&row("", "Name", "100", &["1"]), &axis).is_none());
        assert!(build_account(&row("ID", "  ", "100", &["1"]), &axis).is_none());
        assert!(build_account(&row("ID", "Name", "0", &["1"]), &axis).is_none());
        assert!(build_account(&row("ID", "Name", "-5", &["1"]), &axis).is_none());
        assert!(build_account(&row("ID", "Name", "n/a", &["1"]), &axis).is_none());
    }

    #[test]
    fn coerces_blank_nonnumeric_and_negative_cells_to_zero() {
        let axis = axis(&["2024-01-02", "2024-01-03", "2024-01-04"]);
        let s = build_account(&row("ID", "Name", "100", &["", "abc", "-7"]), &axis).unwrap();
        assert!(s.trades.values().all(|v| *v == Decimal::ZERO));
        assert!(s.valid_trades().is_empty());
    }

    #[test]
    fn pads_short_rows_and_ignores_surplus_cells() {
        let axis = axis(&["2024-01-02", "2024-01-03"]);
        let short = build_account(&row("ID", "Name", "100", &["10"]), &axis).unwrap();
        assert_eq!(short.trades.len(), 2);
        assert_eq!(short.volume_on(axis[1]), Decimal::ZERO);

        let long = build_account(&row("ID", "Name", "100", &["10", "20", "30"]), &axis).unwrap();
        assert_eq!(long.trades.len(), 2);
    }

    #[test]
    fn build_dataset_drops_invalid_rows_and_keeps_the_rest() {
        let axis = axis(&["2024-01-02"]);
        let rows = vec![
            row("A1", "First", "100", &["10"]),
            row("", "Dropped", "100", &["10"]),
            row("A2", "Second", "50", &["20"]),
        ];
        let dataset = build_dataset(axis, &rows).unwrap();
        assert_eq!(dataset.accounts.len(), 2);
        assert_eq!(dataset.accounts[0].account_id, "A1");
        assert_eq!(dataset.accounts[1].account_id, "A2");
        assert!(dataset.verify_integrity().is_ok());
    }

    #[test]
    fn build_dataset_rejects_empty_axis() {
        let rows = vec![row("A1", "First", "100", &[])];
        assert!(matches!(
            build_dataset(Vec::new(), &rows),
            Err(IngestionError::EmptyDateAxis)
        ));
    }
}
