use serde::Serialize;
use serde_json::Value;

/// A single diff outcome for a JSON path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DiffEntry {
    /// Value exists in both with identical content.
    Identical { path: String },
    /// Scalar exists in both but differs.
    Modified {
        path: String,
        left: String,
        right: String,
    },
    /// Member or element only in the left document.
    OnlyLeft { path: String, value: Value },
    /// Member or element only in the right document.
    OnlyRight { path: String, value: Value },
    /// Values of different JSON types at the same path.
    Structural { path: String, description: String },
}

impl DiffEntry {
    pub fn path(&self) -> &str {
        match self {
            DiffEntry::Identical { path }
            | DiffEntry::Modified { path, .. }
            | DiffEntry::OnlyLeft { path, .. }
            | DiffEntry::OnlyRight { path, .. }
            | DiffEntry::Structural { path, .. } => path,
        }
    }

    /// True for every entry except [`DiffEntry::Identical`].
    pub fn is_difference(&self) -> bool {
        !matches!(self, DiffEntry::Identical { .. })
    }
}
