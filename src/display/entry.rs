//! Entry display formatting
//!
//! Formats entries for terminal display: single summary lines and the
//! register view used by list and search.

use crate::models::{Entry, EntryOrigin};

/// Format a single entry as a register row
pub fn format_entry_row(entry: &Entry, symbol: &str) -> String {
    let origin_icon = match entry.origin {
        EntryOrigin::Plain => " ",
        EntryOrigin::Template { .. } => "↻",
        EntryOrigin::Occurrence { .. } => "·",
    };

    format!(
        "{} [{:>4}] {} {:7} {:>12} {:18} {}",
        origin_icon,
        entry.id.as_u64(),
        entry.date.format("%Y-%m-%d"),
        entry.kind.to_string(),
        entry.amount.format_with_symbol(symbol),
        truncate(&entry.category, 18),
        entry.description
    )
}

/// Format a list of entries as a register. Template rows carry a `↻`
/// marker, generated occurrences a `·`.
pub fn format_entry_register(entries: &[&Entry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:>6} {:10} {:7} {:>12} {:18} {}\n",
        "ID", "Date", "Type", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
