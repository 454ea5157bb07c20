use comfy_table::{Cell, Table};

use crate::categorizer::UNCATEGORIZED;
use crate::error::Result;
use crate::settings::Settings;

pub fn format_rules(settings: &Settings) -> String {
    let rules = settings.rule_table();
    let mut table = Table::new();
    table.set_header(vec!["#", "Category", "Keywords"]);
    for (i, rule) in rules.rules().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&rule.category),
            Cell::new(rule.keywords.join(", ")),
        ]);
    }
    let source = if settings.rules.is_some() { "custom" } else { "built-in" };
    format!("Rules ({source}, first match wins; unmatched \u{2192} {UNCATEGORIZED})\n{table}")
}

pub fn list(settings: &Settings) -> Result<()> {
    println!("{}", format_rules(settings));
    Ok(())
}
