use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::categorizer::categorize_transactions;
use crate::error::{LensError, Result};
use crate::importer::{load_file, read_ledger};
use crate::models::{Summary, Transaction};
use crate::reports::summarize;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

impl Analysis {
    fn build(validated: Vec<Transaction>, settings: &Settings) -> Self {
        let transactions = categorize_transactions(validated, &settings.rule_table());
        let summary = summarize(&transactions);
        Self {
            transactions,
            summary,
        }
    }
}

pub fn analyze_reader<R: Read>(reader: R, settings: &Settings) -> Result<Analysis> {
    let validated = read_ledger(reader, &settings.date_format)?;
    Ok(Analysis::build(validated, settings))
}

pub fn analyze_file(path: &Path, settings: &Settings) -> Result<Analysis> {
    let validated = load_file(path, &settings.date_format)?;
    Ok(Analysis::build(validated, settings))
}

/// Analyse each file on its own thread. Results come back in input order and
/// one failing file does not affect the rest.
pub fn analyze_files(paths: &[PathBuf], settings: &Settings) -> Vec<(PathBuf, Result<Analysis>)> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || analyze_file(path, settings)))
            .collect();
        paths
            .iter()
            .zip(handles)
            .map(|(path, handle)| {
                let result = handle.join().unwrap_or_else(|_| {
                    Err(LensError::Other(format!(
                        "analysis of {} panicked",
                        path.display()
                    )))
                });
                (path.clone(), result)
            })
            .collect()
    })
}
