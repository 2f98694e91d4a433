use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use portfolio::PortfolioOverview;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Prints the full portfolio overview report: the scalar rollup panel
/// followed by the ranking and monitoring tables.
pub fn print_overview(overview: &PortfolioOverview) {
    let summary = overview.summary();

    // --- Rollup panel ---
    let recent_total: Decimal = summary
        .daily_totals
        .last()
        .map(|d| d.total_volume)
        .unwrap_or(Decimal::ZERO);
    let at_risk = overview
        .accounts_at_risk_pct()
        .map(|pct| format!("{}%", pct.round_dp(1)))
        .unwrap_or_else(|| "n/a".to_string());

    let mut panel = new_table(vec!["Metric", "Value"]);
    panel.add_row(vec![
        Cell::new("Total accounts"),
        Cell::new(overview.total_accounts()),
    ]);
    panel.add_row(vec![
        Cell::new("Over limit (>100% utilization)"),
        Cell::new(overview.total_over_limit_accounts()),
    ]);
    panel.add_row(vec![
        Cell::new("Near limit (>=70% utilization)"),
        Cell::new(overview.total_limit_warning_accounts()),
    ]);
    panel.add_row(vec![
        Cell::new("Hot accounts (>2.5 sigma)"),
        Cell::new(overview.total_hot_accounts()),
    ]);
    panel.add_row(vec![
        Cell::new("Total notional volume (most recent date)"),
        Cell::new(format_usd(recent_total)),
    ]);
    panel.add_row(vec![Cell::new("Accounts at risk"), Cell::new(at_risk)]);
    println!("Portfolio overview\n{panel}\n");

    // --- Top accounts by most-recent-date volume ---
    let mut top = new_table(vec!["#", "Account", "Recent volume", "Avg volume", "Limit"]);
    for (i, ranked) in summary.top_by_recent_volume.iter().enumerate() {
        let a = &ranked.account;
        top.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} ({})", a.account_name, a.account_id)),
            Cell::new(format_usd(ranked.recent_volume)),
            Cell::new(format_usd(a.avg_volume)),
            Cell::new(format_usd(a.notional_limit)),
        ]);
    }
    println!("Top accounts by volume\n{top}\n");

    // --- Limit monitor ---
    if summary.limit_warning_accounts.is_empty() {
        println!("Limit monitor: all accounts within safe limits\n");
    } else {
        let mut warn = new_table(vec!["#", "Account", "Utilization", "Max volume", "Limit"]);
        for (i, a) in summary.limit_warning_accounts.iter().enumerate() {
            warn.add_row(vec![
                Cell::new(i + 1),
                Cell::new(format!("{} ({})", a.account_name, a.account_id)),
                Cell::new(format!("{}%", (a.current_utilization * dec!(100)).round_dp(1))),
                Cell::new(format_usd(a.max_volume)),
                Cell::new(format_usd(a.notional_limit)),
            ]);
        }
        println!("WARNING: accounts within 70% of limit\n{warn}\n");
    }

    // --- Hot accounts ---
    if summary.hot_accounts.is_empty() {
        println!("Hot accounts: none detected\n");
    } else {
        let mut hot = new_table(vec!["#", "Account", "Hot score", "Max volume", "Avg volume"]);
        for (i, a) in summary.hot_accounts.iter().enumerate() {
            hot.add_row(vec![
                Cell::new(i + 1),
                Cell::new(format!("{} ({})", a.account_name, a.account_id)),
                Cell::new(format!("+{}", format_usd(a.hot_score))),
                Cell::new(format_usd(a.max_volume)),
                Cell::new(format_usd(a.avg_volume)),
            ]);
        }
        println!("Hot accounts (max > avg + 2.5 sigma)\n{hot}\n");
    }

    // --- Daily portfolio totals ---
    let mut daily = new_table(vec!["Date", "Total volume"]);
    for day in &summary.daily_totals {
        daily.add_row(vec![
            Cell::new(day.date.format("%b %d").to_string()),
            Cell::new(format_usd(day.total_volume)),
        ]);
    }
    println!("Daily portfolio notional volume\n{daily}");
}

/// Prints the detail panel for one account.
pub fn print_account_detail(overview: &PortfolioOverview, account_id: &str) -> bool {
    let Some(a) = overview.account(account_id) else {
        return false;
    };
    let recent_date = overview
        .summary()
        .daily_totals
        .last()
        .map(|d| d.date);

    let mut panel = new_table(vec!["Metric", "Value"]);
    panel.add_row(vec![
        Cell::new("Account"),
        Cell::new(format!("{} ({})", a.account_name, a.account_id)),
    ]);
    panel.add_row(vec![
        Cell::new("Status"),
        Cell::new(if a.is_hot { "HOT" } else { "Normal" }),
    ]);
    panel.add_row(vec![
        Cell::new("Notional limit"),
        Cell::new(format_usd(a.notional_limit)),
    ]);
    if let Some(date) = recent_date {
        panel.add_row(vec![
            Cell::new(format!("Volume on {}", date.format("%b %d, %Y"))),
            Cell::new(format_usd(a.volume_on(date))),
        ]);
    }
    panel.add_row(vec![
        Cell::new("Average volume"),
        Cell::new(format_usd(a.avg_volume)),
    ]);
    panel.add_row(vec![
        Cell::new("Max utilization"),
        Cell::new(format!("{}%", (a.current_utilization * dec!(100)).round_dp(1))),
    ]);
    panel.add_row(vec![Cell::new("Days active"), Cell::new(a.days_active)]);
    panel.add_row(vec![
        Cell::new("Limit-warning days"),
        Cell::new(a.limit_warning_count),
    ]);
    panel.add_row(vec![
        Cell::new("Total volume"),
        Cell::new(format_usd(a.total_volume)),
    ]);
    println!("Account details\n{panel}");
    true
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Formats a volume as whole dollars with thousands separators.
fn format_usd(value: Decimal) -> String {
    let rounded = value.round();
    let negative = rounded.is_sign_negative();
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_dollars_with_separators() {
        assert_eq!(format_usd(dec!(0)), "$0");
        assert_eq!(format_usd(dec!(950)), "$950");
        assert_eq!(format_usd(dec!(35000000)), "$35,000,000");
        assert_eq!(format_usd(dec!(1234567.49)), "$1,234,567");
    }
}
