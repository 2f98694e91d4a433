use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod demo;
mod render;

/// The main entry point for the Eagle Eye limit-monitoring application.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments and execute the appropriate command.
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo(args) => handle_demo(args),
        Commands::Account(args) => handle_account(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Monitor trading limits and analyze account performance with anomaly detection.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a demo dataset and print the full portfolio overview.
    Demo(DemoArgs),
    /// Generate a demo dataset and print one account's detail panel.
    Account(AccountArgs),
}

#[derive(Parser)]
struct DemoArgs {
    /// Number of demo accounts to generate (at most 20).
    #[arg(long, default_value_t = 20)]
    accounts: usize,

    /// Length of the calendar window in days; weekends are skipped.
    #[arg(long, default_value_t = 30)]
    days: u64,

    /// Seed for the demo-data generator. The same seed always produces the
    /// same dataset and report.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Parser)]
struct AccountArgs {
    /// The account id to inspect (e.g., "JPM002").
    #[arg(long)]
    id: String,

    #[command(flatten)]
    demo: DemoArgs,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Generates demo data, runs the analytics pipeline, and renders the overview.
fn handle_demo(args: DemoArgs) -> anyhow::Result<()> {
    let dataset = demo::generate(args.accounts, args.days, args.seed)?;
    tracing::info!(
        accounts = dataset.accounts.len(),
        dates = dataset.date_axis.len(),
        "running analytics pipeline over demo dataset"
    );

    let overview = portfolio::compute_overview(&dataset)?;
    render::print_overview(&overview);
    Ok(())
}

/// Generates demo data and renders the detail panel for one account.
fn handle_account(args: AccountArgs) -> anyhow::Result<()> {
    let dataset = demo::generate(args.demo.accounts, args.demo.days, args.demo.seed)?;
    let overview = portfolio::compute_overview(&dataset)?;

    if !render::print_account_detail(&overview, &args.id) {
        anyhow::bail!("no account with id '{}' in the dataset", args.id);
    }
    Ok(())
}
