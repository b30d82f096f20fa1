use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use serde_json::Value;

use crate::diff::result::DiffEntry;

/// How a rendered message-body differs from its expected fixture.
///
/// The left side of every diff is the rendered body, the right side the
/// fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffTally {
    /// Leaves present in both with different values.
    pub changed: usize,
    /// Members the fixture has and the rendered body lacks.
    pub missing: usize,
    /// Members only the rendered body has.
    pub unexpected: usize,
    /// Same path, different JSON type (e.g. object vs list).
    pub type_mismatches: usize,
    pub identical: usize,
}

impl DiffTally {
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut tally, entry| {
            match entry {
                DiffEntry::Identical { .. } => tally.identical += 1,
                DiffEntry::Modified { .. } => tally.changed += 1,
                DiffEntry::OnlyLeft { .. } => tally.unexpected += 1,
                DiffEntry::OnlyRight { .. } => tally.missing += 1,
                DiffEntry::Structural { .. } => tally.type_mismatches += 1,
            }
            tally
        })
    }

    pub fn differences(&self) -> usize {
        self.changed + self.missing + self.unexpected + self.type_mismatches
    }
}

impl Display for DiffTally {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.differences() == 0 {
            return f.write_str("rendered body matches the fixture");
        }
        let parts: Vec<String> = [
            (self.changed, "changed"),
            (self.missing, "missing from rendered body"),
            (self.unexpected, "only in rendered body"),
            (self.type_mismatches, "of a different type"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{count} {label}"))
        .collect();
        write!(f, "{} differences: {}", self.differences(), parts.join(", "))
    }
}

/// One line per entry, e.g. `~ $.mtu: rendered 1500, expected 9000`.
pub fn format_entry(entry: &DiffEntry) -> String {
    match entry {
        DiffEntry::Identical { path } => format!("= {path}"),
        DiffEntry::Modified { path, left, right } => {
            format!("~ {path}: rendered {left}, expected {right}")
        }
        DiffEntry::OnlyLeft { path, value } => {
            format!("- {path}: only in rendered body: {}", compact(value))
        }
        DiffEntry::OnlyRight { path, value } => {
            format!("+ {path}: missing from rendered body: {}", compact(value))
        }
        DiffEntry::Structural { path, description } => format!("! {path}: {description}"),
    }
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}
