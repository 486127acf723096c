//! SOFR Projection CLI
//!
//! Command-line interface for projecting a rate path and its monthly strip
//!
//! - `sofr_projection project [--scenario <json>] [--holidays <csv>]` - print the contract matrix
//! - `sofr_projection compare <a.json> <b.json>` - outright and spread deltas, A minus B

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sofr_projection::{
    calendar::load_holidays,
    scenario::load_scenario,
    ContractComparison, HolidayCalendar, MonthlyContract, ProjectionConfig, ProjectionResult, Scenario,
    ScenarioRunner,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sofr_projection")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Projection year
    #[arg(short, long, global = true, default_value_t = sofr_projection::curve::DEFAULT_PROJECTION_YEAR)]
    year: i32,

    /// Holiday CSV (header: date[,localName,name]); defaults to the built-in 2026 US table
    #[arg(long, global = true)]
    holidays: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project one scenario and print its contract matrix
    Project {
        /// Scenario JSON file; defaults to the 2026 base case
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Write the daily build to this CSV file
        #[arg(long)]
        daily_csv: Option<PathBuf>,

        /// Write the monthly matrix to this CSV file
        #[arg(long)]
        monthly_csv: Option<PathBuf>,
    },

    /// Compare two scenarios month by month
    Compare {
        scenario_a: PathBuf,
        scenario_b: PathBuf,
    },
}

/// Daily build export row
#[derive(Serialize)]
struct DailyCsvRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    day_type: &'a str,
    #[serde(rename = "Is Turn")]
    is_turn: &'a str,
    #[serde(rename = "Base Rate (%)")]
    base_rate: f64,
    #[serde(rename = "Turn Premium (bps)")]
    turn_premium_bps: f64,
    #[serde(rename = "Final Rate (%)")]
    final_rate: f64,
}

/// Monthly matrix export row
#[derive(Serialize)]
struct MonthlyCsvRow<'a> {
    #[serde(rename = "Month")]
    month: &'a str,
    #[serde(rename = "Avg Rate (%)")]
    avg_rate: String,
    #[serde(rename = "Outright Price")]
    outright: String,
    #[serde(rename = "1M Spread")]
    spread_1m: String,
    #[serde(rename = "1M Fly")]
    fly_1m: String,
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string())
}

fn holiday_calendar(path: Option<&Path>, year: i32) -> Result<HolidayCalendar> {
    match path {
        Some(path) => {
            let holidays = load_holidays(path)
                .with_context(|| format!("loading holidays from {}", path.display()))?;
            Ok(HolidayCalendar::from_holidays(&holidays))
        }
        None => {
            if year != 2026 {
                log::warn!("Built-in holiday table only covers 2026; {} will use weekends only", year);
            }
            Ok(HolidayCalendar::fallback_us_2026())
        }
    }
}

fn read_scenario(path: &Path) -> Result<Scenario> {
    load_scenario(path).with_context(|| format!("loading scenario from {}", path.display()))
}

fn print_matrix(result: &ProjectionResult) {
    println!("Scenario: {}", result.scenario_name);
    println!("{:>5} {:>10} {:>10} {:>10} {:>10}", "Month", "AvgRate", "Outright", "1M Sprd", "1M Fly");
    println!("{}", "-".repeat(49));

    for c in &result.contracts {
        println!(
            "{:>5} {:>10.4} {:>10.4} {:>10} {:>10}",
            c.month_name,
            c.avg_rate,
            c.outright,
            fmt_opt(c.spread_1m),
            fmt_opt(c.fly_1m),
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Days: {} ({} business)", summary.total_days, summary.business_days);
    println!("  Turn days: {}", summary.turn_days);
    println!("  Meeting days: {}", summary.meeting_days);
    println!("  Average rate: {:.4}%", summary.average_rate);
    println!("  Range: {:.4}% - {:.4}%", summary.min_rate, summary.max_rate);
}

fn print_comparison(name_a: &str, name_b: &str, rows: &[ContractComparison]) {
    println!("A: {}\nB: {}", name_a, name_b);
    println!(
        "{:>5} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Month", "Out A", "Out B", "Delta", "Sprd A", "Sprd B", "Delta"
    );
    println!("{}", "-".repeat(71));

    for row in rows {
        println!(
            "{:>5} {:>10.4} {:>10.4} {:>10.4} {:>10} {:>10} {:>10}",
            row.month_name,
            row.outright_a,
            row.outright_b,
            row.outright_delta,
            fmt_opt(row.spread_a),
            fmt_opt(row.spread_b),
            fmt_opt(row.spread_delta),
        );
    }
}

fn write_daily_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for r in &result.daily {
        writer.serialize(DailyCsvRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            day_type: r.day_type.as_str(),
            is_turn: if r.is_turn_day { "Yes" } else { "No" },
            base_rate: r.base_rate,
            turn_premium_bps: r.turn_premium_bps(),
            final_rate: r.final_rate,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn write_monthly_csv(path: &Path, contracts: &[MonthlyContract]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for c in contracts {
        writer.serialize(MonthlyCsvRow {
            month: &c.month_name,
            avg_rate: format!("{:.4}", c.avg_rate),
            outright: format!("{:.4}", c.outright),
            spread_1m: fmt_opt(c.spread_1m),
            fly_1m: fmt_opt(c.fly_1m),
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let holidays = holiday_calendar(cli.holidays.as_deref(), cli.year)?;
    let runner = ScenarioRunner::with_config(holidays, ProjectionConfig::for_year(cli.year));

    match cli.command {
        Commands::Project {
            scenario,
            daily_csv,
            monthly_csv,
        } => {
            let scenario = match scenario {
                Some(path) => read_scenario(&path)?,
                None => Scenario::base_case_2026(),
            };
            let result = runner.run(&scenario)?;
            print_matrix(&result);

            if let Some(path) = daily_csv {
                write_daily_csv(&path, &result)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nDaily build written to: {}", path.display());
            }
            if let Some(path) = monthly_csv {
                write_monthly_csv(&path, &result.contracts)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Monthly matrix written to: {}", path.display());
            }
        }
        Commands::Compare {
            scenario_a,
            scenario_b,
        } => {
            let a = read_scenario(&scenario_a)?;
            let b = read_scenario(&scenario_b)?;
            let rows = runner.compare(&a, &b)?;
            print_comparison(&a.name, &b.name, &rows);
        }
    }

    Ok(())
}
