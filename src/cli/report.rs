use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{Cell, Table};
use serde::Serialize;

use crate::analysis::{analyze_file, analyze_files, analyze_reader, Analysis};
use crate::error::{LensError, Result};
use crate::fmt::{bar, money};
use crate::models::{CategoryTotal, DailyTotal, Summary, Transaction};
use crate::settings::Settings;

const CHART_WIDTH: usize = 40;

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

pub fn format_transactions(transactions: &[Transaction], limit: Option<usize>, symbol: &str) -> String {
    let shown = limit.unwrap_or(transactions.len()).min(transactions.len());
    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount", "Category"]);
    for txn in &transactions[..shown] {
        table.add_row(vec![
            Cell::new(txn.date),
            Cell::new(&txn.description),
            Cell::new(money(txn.amount, symbol)),
            Cell::new(txn.category.as_deref().unwrap_or("")),
        ]);
    }
    let mut out = format!("Transactions\n{table}");
    if shown < transactions.len() {
        out.push_str(&format!("\n({} of {} shown)", shown, transactions.len()));
    }
    out
}

pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let top = match &summary.top_category {
        Some(top) => format!(
            "Top Spending Category: {} ({})",
            top.category.bold(),
            money(top.amount, symbol)
        ),
        None => "No valid spending categories found.".to_string(),
    };
    format!(
        "Total Number of Transactions: {}\nTotal Money Spent: {}\n{top}",
        summary.transaction_count,
        money(summary.total_expense, symbol)
    )
}

pub fn format_daily(daily: &[DailyTotal], symbol: &str) -> String {
    if daily.is_empty() {
        return "Spending Over Time\n(no expenses)".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Spent"]);
    for day in daily {
        table.add_row(vec![Cell::new(day.date), Cell::new(money(day.total, symbol))]);
    }
    format!("Spending Over Time\n{table}")
}

pub fn format_categories(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "Spending by Category\n(no expenses)".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%", "Count"]);
    for item in totals {
        table.add_row(vec![
            Cell::new(&item.category),
            Cell::new(money(item.total.abs(), symbol)),
            Cell::new(format!("{:.1}%", item.pct)),
            Cell::new(item.count),
        ]);
    }
    format!("Spending by Category\n{table}")
}

pub fn format_chart(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "Spending by Category\n(no expenses)".to_string();
    }
    let max = totals.iter().map(|c| c.total.abs()).fold(0.0, f64::max);
    let label_width = totals.iter().map(|c| c.category.chars().count()).max().unwrap_or(0);
    let mut lines = vec!["Spending by Category".to_string()];
    for item in totals {
        let magnitude = item.total.abs();
        let filled = format!("{:<width$}", bar(magnitude, max, CHART_WIDTH), width = CHART_WIDTH);
        lines.push(format!(
            "{:<label_width$}  {}  {}",
            item.category,
            filled.red(),
            money(magnitude, symbol),
            label_width = label_width,
        ));
    }
    lines.join("\n")
}

fn format_analysis(analysis: &Analysis, limit: Option<usize>, symbol: &str) -> String {
    [
        format_transactions(&analysis.transactions, limit, symbol),
        format_summary(&analysis.summary, symbol),
        format_daily(&analysis.summary.daily_expenses, symbol),
        format_categories(&analysis.summary.category_totals, symbol),
    ]
    .join("\n\n")
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct FileAnalysis<'a> {
    file: &'a Path,
    analysis: &'a Analysis,
}

pub fn analyze(files: &[String], json: bool, limit: Option<usize>, settings: &Settings) -> Result<()> {
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    let results = analyze_files(&paths, settings);

    let mut failed = 0usize;
    let mut succeeded = Vec::new();
    for (path, result) in &results {
        match result {
            Ok(analysis) => succeeded.push((path, analysis)),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {e}", path.display());
            }
        }
    }

    if json {
        let out = if paths.len() == 1 {
            match succeeded.first() {
                Some((_, analysis)) => serde_json::to_string_pretty(analysis)?,
                None => String::new(),
            }
        } else {
            let docs: Vec<FileAnalysis> = succeeded
                .iter()
                .map(|(path, analysis)| FileAnalysis {
                    file: path.as_path(),
                    analysis: *analysis,
                })
                .collect();
            serde_json::to_string_pretty(&docs)?
        };
        if !out.is_empty() {
            println!("{out}");
        }
    } else {
        for (i, (path, analysis)) in succeeded.iter().enumerate() {
            if i > 0 {
                println!();
            }
            if paths.len() > 1 {
                println!("{}", path.display().to_string().bold());
            }
            println!("{}", format_analysis(analysis, limit, &settings.currency_symbol));
        }
    }

    if failed > 0 {
        return Err(LensError::Other(format!(
            "{failed} of {} files could not be analyzed",
            results.len()
        )));
    }
    Ok(())
}

/// `-` reads the ledger from stdin.
fn load(file: &str, settings: &Settings) -> Result<Analysis> {
    if file == "-" {
        analyze_reader(std::io::stdin().lock(), settings)
    } else {
        analyze_file(Path::new(file), settings)
    }
}

pub fn summary(file: &str, settings: &Settings) -> Result<()> {
    let analysis = load(file, settings)?;
    println!("{}", format_summary(&analysis.summary, &settings.currency_symbol));
    Ok(())
}

pub fn daily(file: &str, settings: &Settings) -> Result<()> {
    let analysis = load(file, settings)?;
    println!("{}", format_daily(&analysis.summary.daily_expenses, &settings.currency_symbol));
    Ok(())
}

pub fn categories(file: &str, chart: bool, settings: &Settings) -> Result<()> {
    let analysis = load(file, settings)?;
    let totals = &analysis.summary.category_totals;
    let out = if chart {
        format_chart(totals, &settings.currency_symbol)
    } else {
        format_categories(totals, &settings.currency_symbol)
    };
    println!("{out}");
    Ok(())
}
