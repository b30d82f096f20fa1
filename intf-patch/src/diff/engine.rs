use serde_json::{Map, Value};

use crate::diff::result::DiffEntry;

/// Path of the document root.
pub const ROOT_PATH: &str = "$";

/// Configures JSON diff behavior.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Include [`DiffEntry::Identical`] rows.
    pub include_identical: bool,
    /// Maximum recursion depth. `-1` means unlimited.
    pub max_depth: i32,
    /// Paths or member names to ignore.
    pub ignore_paths: Vec<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_identical: false,
            max_depth: -1,
            ignore_paths: Vec::new(),
        }
    }
}

/// Diff two JSON documents with default options.
pub fn diff(left: &Value, right: &Value) -> Vec<DiffEntry> {
    diff_with_options(left, right, &DiffOptions::default())
}

/// Diff two JSON documents with custom options.
pub fn diff_with_options(left: &Value, right: &Value, opts: &DiffOptions) -> Vec<DiffEntry> {
    let mut out = Vec::new();
    diff_value(left, right, ROOT_PATH, 0, opts, &mut out);
    out
}

fn diff_value(
    left: &Value,
    right: &Value,
    path: &str,
    depth: i32,
    opts: &DiffOptions,
    out: &mut Vec<DiffEntry>,
) {
    if should_ignore(path, opts) {
        return;
    }

    if opts.max_depth >= 0 && depth > opts.max_depth {
        return;
    }

    let start_len = out.len();

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => diff_members(l, r, path, depth, opts, out),
        (Value::Array(l), Value::Array(r)) => diff_elements(l, r, path, depth, opts, out),
        (l, r) if kind(l) == kind(r) => {
            if l != r {
                out.push(DiffEntry::Modified {
                    path: path.to_string(),
                    left: l.to_string(),
                    right: r.to_string(),
                });
            }
        }
        (l, r) => out.push(DiffEntry::Structural {
            path: path.to_string(),
            description: format!("type mismatch: left={} right={}", kind(l), kind(r)),
        }),
    }

    if opts.include_identical && out.len() == start_len {
        out.push(DiffEntry::Identical {
            path: path.to_string(),
        });
    }
}

fn diff_members(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    path: &str,
    depth: i32,
    opts: &DiffOptions,
    out: &mut Vec<DiffEntry>,
) {
    let mut keys: Vec<&String> = left.keys().collect();
    keys.extend(right.keys().filter(|k| !left.contains_key(*k)));

    for key in keys {
        let child_path = format!("{path}.{key}");
        match (left.get(key), right.get(key)) {
            (Some(l), Some(r)) => diff_value(l, r, &child_path, depth + 1, opts, out),
            (Some(l), None) if !should_ignore(&child_path, opts) => out.push(DiffEntry::OnlyLeft {
                path: child_path,
                value: l.clone(),
            }),
            (None, Some(r)) if !should_ignore(&child_path, opts) => {
                out.push(DiffEntry::OnlyRight {
                    path: child_path,
                    value: r.clone(),
                })
            }
            _ => {}
        }
    }
}

fn diff_elements(
    left: &[Value],
    right: &[Value],
    path: &str,
    depth: i32,
    opts: &DiffOptions,
    out: &mut Vec<DiffEntry>,
) {
    let max = left.len().max(right.len());
    for i in 0..max {
        let child_path = format!("{path}[{}]", i + 1);
        match (left.get(i), right.get(i)) {
            (Some(l), Some(r)) => diff_value(l, r, &child_path, depth + 1, opts, out),
            (Some(l), None) => out.push(DiffEntry::OnlyLeft {
                path: child_path,
                value: l.clone(),
            }),
            (None, Some(r)) => out.push(DiffEntry::OnlyRight {
                path: child_path,
                value: r.clone(),
            }),
            (None, None) => {}
        }
    }
}

fn should_ignore(path: &str, opts: &DiffOptions) -> bool {
    opts.ignore_paths
        .iter()
        .any(|ignore| path == ignore || path.ends_with(&format!(".{ignore}")))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{diff, diff_with_options, DiffOptions};
    use crate::diff::DiffEntry;

    #[test]
    fn identical_documents_have_no_entries() {
        let doc = json!({ "a": [1, { "b": null }] });
        assert!(diff(&doc, &doc).is_empty());
    }

    #[test]
    fn type_mismatch_is_structural() {
        let entries = diff(&json!({ "mtu": 1500 }), &json!({ "mtu": "1500" }));
        assert_eq!(
            entries,
            vec![DiffEntry::Structural {
                path: "$.mtu".to_string(),
                description: "type mismatch: left=number right=string".to_string(),
            }]
        );
    }

    #[test]
    fn identical_rows_are_opt_in() {
        let opts = DiffOptions {
            include_identical: true,
            ..DiffOptions::default()
        };
        let entries = diff_with_options(&json!({ "a": 1 }), &json!({ "a": 1 }), &opts);
        assert!(entries.contains(&DiffEntry::Identical {
            path: "$.a".to_string()
        }));
        assert!(entries.iter().all(|e| !e.is_difference()));
    }

    #[test]
    fn max_depth_stops_descent() {
        let opts = DiffOptions {
            max_depth: 1,
            ..DiffOptions::default()
        };
        let entries = diff_with_options(
            &json!({ "a": { "b": 1 } }),
            &json!({ "a": { "b": 2 } }),
            &opts,
        );
        assert!(entries.is_empty());
    }
}
