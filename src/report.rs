// src/report.rs
use crate::core::types::{Itemset, Rule, SupportTable};

/// Renders the frequent-itemset table as a count header followed by one
/// `{items}: support = s` line per entry, in table key order.
pub fn render_itemsets(table: &SupportTable) -> String {
    let mut out = format!(
        "The following {} frequent itemsets were found:\n",
        table.len()
    );
    for (itemset, support) in table {
        out.push_str(&format!(
            "{}: support = {}\n",
            format_itemset(itemset),
            support
        ));
    }
    out
}

/// Renders the rule list as a count header followed by one
/// `lhs -> rhs | support: s | confidence: c` line per rule.
pub fn render_rules(rules: &[Rule]) -> String {
    let mut out = format!(
        "The following {} rules that satisfy min_sup and min_conf are generated:\n",
        rules.len()
    );
    for rule in rules {
        out.push_str(&format!(
            "{} -> {} | support: {} | confidence: {}\n",
            format_itemset(&rule.lhs),
            format_itemset(&rule.rhs),
            rule.support,
            rule.confidence
        ));
    }
    out
}

/// Rule list as a JSON array, for callers that want structured output
/// instead of the text listing.
pub fn rules_to_json(rules: &[Rule]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rules)
}

fn format_itemset(itemset: &Itemset) -> String {
    let items: Vec<&str> = itemset.iter().map(String::as_str).collect();
    format!("{{{}}}", items.join(", "))
}
