use crate::categorizer::{classify, explain};
use crate::error::Result;
use crate::settings::Settings;

pub fn format_classification(description: &str, show_rule: bool, settings: &Settings) -> String {
    let rules = settings.rule_table();
    let label = classify(description, &rules);
    if !show_rule {
        return label.to_string();
    }
    match explain(description, &rules) {
        Some((category, keyword)) => format!("{category} (matched keyword '{keyword}')"),
        None => format!("{label} (no rule matched)"),
    }
}

pub fn run(description: &str, show_rule: bool, settings: &Settings) -> Result<()> {
    println!("{}", format_classification(description, show_rule, settings));
    Ok(())
}
