mod analysis;
mod categorizer;
mod cli;
mod error;
mod fmt;
mod importer;
mod models;
mod reports;
mod settings;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{fmt as log_fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    // RUST_LOG wins, then --verbose, then warnings only
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            log_fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> error::Result<()> {
    let settings = settings::load_settings(cli.config.as_deref().map(Path::new))?;

    match cli.command {
        Commands::Analyze { files, json, limit } => cli::report::analyze(&files, json, limit, &settings),
        Commands::Summary { file } => cli::report::summary(&file, &settings),
        Commands::Daily { file } => cli::report::daily(&file, &settings),
        Commands::Categories { file, chart } => cli::report::categories(&file, chart, &settings),
        Commands::Classify {
            description,
            explain,
        } => cli::classify::run(&description, explain, &settings),
        Commands::Rules => cli::rules::list(&settings),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
