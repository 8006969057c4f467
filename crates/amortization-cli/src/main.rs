mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing::debug;

use commands::loan::{PaymentArgs, ScheduleArgs, SummaryArgs};

/// Fixed-rate loan amortization
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Fixed-rate loan payments, amortization schedules and monthly summaries",
    long_about = "A CLI for fixed-rate installment loans with exact decimal currency \
                  arithmetic. Computes the level monthly payment, the month-by-month \
                  schedule (rounded to cents, final payment reconciled to a zero \
                  balance), and the cumulative position after any month."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log computation details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the level monthly payment
    Payment(PaymentArgs),
    /// Build the month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Balance and cumulative principal/interest after a given month
    Summary(SummaryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::loan::run_payment(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Summary(args) => commands::loan::run_summary(args),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            debug!(format = ?cli.output, "writing result");
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
