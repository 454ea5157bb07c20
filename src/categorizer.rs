use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Label for descriptions no rule claims.
pub const UNCATEGORIZED: &str = "other";

/// Built-in table. Declaration order decides ties: the first category with a
/// matching keyword wins.
pub const DEFAULT_RULES: &[(&str, &[&str])] = &[
    ("groceries", &["walmart", "aldi", "grocery", "supermarket"]),
    ("utilities", &["electric", "water", "utility", "gas", "internet"]),
    ("rent", &["rent", "landlord"]),
    ("entertainment", &["netflix", "spotify", "movie", "theater", "cinema"]),
    ("transport", &["uber", "lyft", "taxi", "bus", "train", "gasoline", "fuel"]),
    ("dining", &["restaurant", "mcdonald", "starbucks", "coffee", "burger"]),
    ("shopping", &["amazon", "shop", "mall", "clothing"]),
    ("income", &["salary", "paycheck", "deposit", "refund"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, S>(category: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category: category.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    fn matching_keyword(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| normalized.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Ordered list of category rules. Deliberately a `Vec`: a map would lose the
/// tie-break order.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| CategoryRule::new(r.category, r.keywords))
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(label, keywords)| CategoryRule::new(*label, keywords.iter()))
                .collect(),
        )
    }
}

/// The rule and keyword that decide `description`, if any.
pub fn explain<'a>(description: &str, rules: &'a RuleTable) -> Option<(&'a str, &'a str)> {
    let normalized = description.to_lowercase();
    rules.rules.iter().find_map(|rule| {
        rule.matching_keyword(&normalized)
            .map(|keyword| (rule.category.as_str(), keyword))
    })
}

pub fn classify<'a>(description: &str, rules: &'a RuleTable) -> &'a str {
    explain(description, rules)
        .map(|(label, _)| label)
        .unwrap_or(UNCATEGORIZED)
}

pub fn categorize_transactions(transactions: Vec<Transaction>, rules: &RuleTable) -> Vec<Transaction> {
    transactions
        .into_iter()
        .map(|txn| {
            let label = classify(&txn.description, rules);
            txn.with_category(label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn defaults() -> RuleTable {
        RuleTable::default()
    }

    #[test]
    fn test_default_table_order() {
        let table = defaults();
        let labels: Vec<&str> = table.rules().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "groceries",
                "utilities",
                "rent",
                "entertainment",
                "transport",
                "dining",
                "shopping",
                "income"
            ]
        );
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let rules = defaults();
        assert_eq!(classify("WALMART SUPERCENTER #42", &rules), "groceries");
        assert_eq!(classify("Netflix.com", &rules), "entertainment");
        assert_eq!(classify("ACME Corp Salary", &rules), "income");
    }

    #[test]
    fn test_earlier_category_wins() {
        let rules = defaults();
        assert_eq!(classify("Uber to Starbucks", &rules), "transport");
        // "gasoline" also contains the utilities keyword "gas"
        assert_eq!(classify("Shell Gasoline", &rules), "utilities");
        // "parent" contains "rent"
        assert_eq!(classify("Gift from parent", &rules), "rent");
    }

    #[test]
    fn test_unmatched_is_other() {
        let rules = defaults();
        assert_eq!(classify("", &rules), UNCATEGORIZED);
        assert_eq!(classify("RANDOM VENDOR XYZ", &rules), UNCATEGORIZED);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let rules = defaults();
        let first = classify("Amazon Prime Video", &rules);
        for _ in 0..10 {
            assert_eq!(classify("Amazon Prime Video", &rules), first);
        }
    }

    #[test]
    fn test_explain_reports_keyword() {
        let rules = defaults();
        assert_eq!(explain("Lyft ride home", &rules), Some(("transport", "lyft")));
        assert_eq!(explain("nothing here", &rules), None);
    }

    #[test]
    fn test_custom_rules_normalized() {
        let rules = RuleTable::new(vec![
            CategoryRule::new("pets", ["  PetCo ", ""]),
            CategoryRule::new("groceries", ["petco", "aldi"]),
        ]);
        assert_eq!(rules.rules()[0].keywords, vec!["petco"]);
        assert_eq!(classify("PETCO #12", &rules), "pets");
        assert_eq!(classify("Aldi", &rules), "groceries");
        assert_eq!(classify("walmart", &rules), UNCATEGORIZED);
    }

    #[test]
    fn test_categorize_transactions_assigns_every_label() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let txns = vec![
            Transaction::new(date, "Spotify", -9.99),
            Transaction::new(date, "Mystery", -1.0),
            Transaction::new(date, "Refund from store", 20.0),
        ];
        let out = categorize_transactions(txns, &defaults());
        let labels: Vec<Option<&str>> = out.iter().map(|t| t.category.as_deref()).collect();
        assert_eq!(
            labels,
            vec![Some("entertainment"), Some(UNCATEGORIZED), Some("income")]
        );
    }
}
