use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{CategoryTotal, DailyTotal, Summary, TopCategory, Transaction};

fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|t| t.is_expense())
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Magnitude of money spent; income and zero-amount rows are ignored.
pub fn total_expense(transactions: &[Transaction]) -> f64 {
    expenses(transactions).map(|t| t.amount).sum::<f64>().abs()
}

// ---------------------------------------------------------------------------
// Daily series
// ---------------------------------------------------------------------------

pub fn daily_expenses(transactions: &[Transaction]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for txn in expenses(transactions) {
        *by_date.entry(txn.date).or_default() += txn.amount;
    }
    by_date
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

// ---------------------------------------------------------------------------
// Category breakdown
// ---------------------------------------------------------------------------

/// Expense totals per category, most negative first. Equal totals keep
/// alphabetical order. Unclassified rows are skipped.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut by_category: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for txn in expenses(transactions) {
        let Some(category) = txn.category.as_deref() else {
            continue;
        };
        let entry = by_category.entry(category).or_default();
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let grand_total: f64 = by_category.values().map(|(t, _)| t).sum();
    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
            pct: if grand_total != 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect();
    totals.sort_by(|a, b| a.total.total_cmp(&b.total));
    totals
}

pub fn top_category(totals: &[CategoryTotal]) -> Option<TopCategory> {
    totals
        .iter()
        .min_by(|a, b| a.total.total_cmp(&b.total))
        .map(|c| TopCategory {
            category: c.category.clone(),
            amount: c.total.abs(),
        })
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let category_totals = category_totals(transactions);
    let top_category = top_category(&category_totals);
    Summary {
        transaction_count: transactions.len(),
        total_expense: total_expense(transactions),
        daily_expenses: daily_expenses(transactions),
        category_totals,
        top_category,
    }
}
