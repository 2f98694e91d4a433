use chrono::{Datelike, Days, NaiveDate, Weekday};
use core_types::Dataset;
use ingestion::{build_dataset, IngestionError, RawAccountRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The demo account book: id, name, typical daily volume, notional limit.
/// A handful of accounts are scripted below to produce over-limit and
/// near-limit scenarios so every view of the report has something to show.
const PROFILES: &[(&str, &str, i64, i64)] = &[
    ("GS001", "Goldman Sachs", 35_000_000, 120_000_000),
    ("JPM002", "JPMorgan Chase", 45_000_000, 65_000_000),
    ("MS003", "Morgan Stanley", 30_000_000, 110_000_000),
    ("BAC004", "Bank of America", 28_000_000, 95_000_000),
    ("C005", "Citigroup", 38_000_000, 48_000_000),
    ("WFC006", "Wells Fargo", 25_000_000, 85_000_000),
    ("DB007", "Deutsche Bank", 22_000_000, 90_000_000),
    ("BARC008", "Barclays", 20_000_000, 75_000_000),
    ("CS009", "Credit Suisse", 32_000_000, 42_000_000),
    ("UBS010", "UBS", 18_000_000, 80_000_000),
    ("BNP011", "BNP Paribas", 24_000_000, 100_000_000),
    ("SG012", "Societe Generale", 21_000_000, 88_000_000),
    ("HSBC013", "HSBC", 40_000_000, 55_000_000),
    ("SC014", "Standard Chartered", 16_000_000, 70_000_000),
    ("RBC015", "Royal Bank of Canada", 26_000_000, 95_000_000),
    ("TD016", "TD Bank", 19_000_000, 85_000_000),
    ("NOM017", "Nomura", 15_000_000, 65_000_000),
    ("MZ018", "Mizuho", 17_000_000, 72_000_000),
    ("SMBC019", "Sumitomo Mitsui", 14_000_000, 68_000_000),
    ("MUFG020", "MUFG", 13_000_000, 60_000_000),
];

/// Generates a reproducible demo dataset: `accounts` accounts over the
/// business days of a `days`-long calendar window. The same seed always
/// yields the same dataset, and therefore the same report.
///
/// The rows go through the regular ingestion builder, so the demo exercises
/// the same path as real data.
pub fn generate(accounts: usize, days: u64, seed: u64) -> Result<Dataset, IngestionError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let date_axis: Vec<NaiveDate> = (0..days)
        .map(|i| start + Days::new(i))
        .filter(|d| d.weekday() != Weekday::Sat && d.weekday() != Weekday::Sun)
        .collect();

    let rows: Vec<RawAccountRow> = PROFILES
        .iter()
        .take(accounts)
        .map(|(id, name, base_volume, limit)| {
            let cells = (0..date_axis.len())
                .map(|day| format!("{}", daily_volume(&mut rng, id, day, *base_volume, *limit)))
                .collect();
            RawAccountRow {
                account_id: id.to_string(),
                account_name: name.to_string(),
                notional_limit: limit.to_string(),
                cells,
            }
        })
        .collect();

    build_dataset(date_axis, &rows)
}

/// One simulated trading day. Roughly one day in ten is idle; the scripted
/// accounts replace selected days with over-limit or near-limit volumes.
fn daily_volume(rng: &mut StdRng, account_id: &str, day: usize, base_volume: i64, limit: i64) -> i64 {
    if rng.gen_range(0.0..1.0) <= 0.1 {
        return 0;
    }

    let base = base_volume as f64;
    let limit = limit as f64;
    let mut volume = base * (0.3 + rng.gen_range(0.0..1.0) * 0.4);

    // Scripted risk scenarios: one hard breach, and three accounts that
    // repeatedly brush against their limits.
    if account_id == "JPM002" && day == 5 {
        volume = limit * 1.08;
    } else if account_id == "C005" && day < 4 {
        volume = limit * (0.8 + rng.gen_range(0.0..1.0) * 0.25);
    } else if account_id == "CS009" && [2, 7, 12].contains(&day) {
        volume = limit * (0.75 + rng.gen_range(0.0..1.0) * 0.2);
    } else if account_id == "HSBC013" && [1, 8, 15].contains(&day) {
        volume = limit * (0.72 + rng.gen_range(0.0..1.0) * 0.15);
    }

    volume *= 0.9 + rng.gen_range(0.0..1.0) * 0.2;
    volume.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_yields_identical_datasets() {
        let a = generate(20, 30, 42).unwrap();
        let b = generate(20, 30, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn axis_contains_only_business_days() {
        let dataset = generate(5, 30, 1).unwrap();
        assert!(dataset
            .date_axis
            .iter()
            .all(|d| d.weekday() != Weekday::Sat && d.weekday() != Weekday::Sun));
        assert_eq!(dataset.accounts.len(), 5);
        assert!(dataset.verify_integrity().is_ok());
    }
}
