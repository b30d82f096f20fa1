use colored::Colorize;

use crate::diff::{format_entry, DiffEntry, DiffTally};
use crate::scenarios::Scenario;

/// Colored diff lines: red for members only the rendered body has, green for
/// members it is missing, yellow for changed leaves.
pub fn render_diff(entries: &[DiffEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let line = format_entry(entry);
            match entry {
                DiffEntry::Identical { .. } => line.dimmed().to_string(),
                DiffEntry::Modified { .. } => line.yellow().to_string(),
                DiffEntry::OnlyLeft { .. } => line.red().to_string(),
                DiffEntry::OnlyRight { .. } => line.green().to_string(),
                DiffEntry::Structural { .. } => line.magenta().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tally(tally: &DiffTally) -> String {
    tally.to_string().cyan().to_string()
}

/// Render the scenario table, one line per scenario.
pub fn render_scenarios(scenarios: &[Scenario]) -> String {
    let width = scenarios.iter().map(|s| s.name.len()).max().unwrap_or(0);
    scenarios
        .iter()
        .map(|s| {
            let mut line = format!(
                "{:<width$}  model={} ticket={} expected={}",
                s.name,
                s.model.as_str(),
                s.ticket.display(),
                s.expected.display()
            );
            if !s.note.is_empty() {
                line.push_str(&format!("  # {}", s.note));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_diff, render_scenarios, render_tally};
    use crate::diff::{diff, DiffTally};
    use crate::scenarios::default_scenarios;

    #[test]
    fn plain_output_keeps_markers() {
        colored::control::set_override(false);
        let entries = diff(&json!({ "a": 1 }), &json!({ "a": 2, "b": 3 }));
        let text = render_diff(&entries);
        assert!(text.lines().any(|l| l.starts_with("~ $.a: rendered 1")));
        assert!(text.lines().any(|l| l.starts_with("+ $.b: missing from rendered body")));
        let tally = render_tally(&DiffTally::from_entries(&entries));
        assert!(tally.contains("1 changed, 1 missing from rendered body"));
    }

    #[test]
    fn scenario_table_lists_names() {
        let table = render_scenarios(&default_scenarios());
        assert!(table.lines().any(|l| l.starts_with("trunk-base")));
        assert!(table.contains("model=switchport"));
    }
}
