use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{LensError, Result};
use crate::models::Transaction;

pub const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Description", "Amount"];

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Cell parsers
// ---------------------------------------------------------------------------

/// Plain signed decimal, exponent notation allowed. Non-finite values are
/// rejected so a stray `NaN` never reaches the sums.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

pub fn parse_date(raw: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), format).ok()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

struct ColumnIndex {
    date: usize,
    description: usize,
    amount: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(**name).is_none())
            .map(|name| name.to_string())
            .collect();
        match (position("Date"), position("Description"), position("Amount")) {
            (Some(date), Some(description), Some(amount)) => Ok(Self {
                date,
                description,
                amount,
            }),
            _ => Err(LensError::Schema { missing }),
        }
    }
}

/// Convert untyped rows into transactions. Fails only when a required column
/// is absent from `headers`; rows whose date or amount do not parse are
/// dropped and the rest keep their input order.
pub fn validate_rows<I, R>(headers: &[String], rows: I, date_format: &str) -> Result<Vec<Transaction>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let idx = ColumnIndex::resolve(headers)?;

    let mut transactions = Vec::new();
    let mut dropped = 0usize;
    for row in rows {
        let cells = row.as_ref();
        let amount = cells.get(idx.amount).and_then(|c| parse_amount(c));
        let date = cells.get(idx.date).and_then(|c| parse_date(c, date_format));
        let (Some(amount), Some(date)) = (amount, date) else {
            dropped += 1;
            continue;
        };
        let description = cells
            .get(idx.description)
            .map(|c| c.trim())
            .unwrap_or_default();
        transactions.push(Transaction::new(date, description, amount));
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = transactions.len(), "dropped unparseable rows");
    }
    Ok(transactions)
}

// ---------------------------------------------------------------------------
// CSV reading
// ---------------------------------------------------------------------------

fn unreadable(err: csv::Error) -> LensError {
    tracing::debug!(error = %err, "csv reader failed");
    LensError::UnreadableInput("the file is not valid delimited text".to_string())
}

pub fn read_ledger<R: Read>(reader: R, date_format: &str) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(LensError::UnreadableInput("the file is empty".to_string()));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(unreadable)?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    validate_rows(&headers, rows, date_format)
}

pub fn load_file(file_path: &Path, date_format: &str) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(file_path).map_err(|e| {
        tracing::debug!(path = %file_path.display(), error = %e, "open failed");
        LensError::UnreadableInput(format!("cannot open {}", file_path.display()))
    })?;
    let transactions = read_ledger(std::io::BufReader::new(file), date_format)?;
    tracing::info!(
        path = %file_path.display(),
        count = transactions.len(),
        "loaded ledger"
    );
    Ok(transactions)
}
