pub mod classify;
pub mod report;
pub mod rules;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spendlens",
    version,
    about = "Categorized spending analytics for a transaction ledger."
)]
pub struct Cli {
    /// Settings file (default: ~/.config/spendlens/settings.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one or more CSV ledgers (columns: Date, Description, Amount).
    Analyze {
        /// CSV files to analyze
        #[arg(required = true)]
        files: Vec<String>,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
        /// Show only the first N transactions in the table
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show transaction count, total spent and the top spending category.
    Summary {
        /// CSV file to analyze (`-` for stdin)
        file: String,
    },
    /// Show spending per day.
    Daily {
        /// CSV file to analyze (`-` for stdin)
        file: String,
    },
    /// Show spending per category, highest spending first.
    Categories {
        /// CSV file to analyze (`-` for stdin)
        file: String,
        /// Render a bar chart instead of a table
        #[arg(long)]
        chart: bool,
    },
    /// Classify a single description with the active rule table.
    Classify {
        /// Transaction description
        description: String,
        /// Show the rule and keyword that decided the category
        #[arg(long)]
        explain: bool,
    },
    /// List the active categorization rules in match order.
    Rules,
}
