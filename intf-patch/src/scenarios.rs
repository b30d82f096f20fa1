use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::ModelKind;

/// A named ticket fixture paired with the payload it must render to.
///
/// Paths are relative to the fixtures directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scenario {
    pub name: String,
    pub model: ModelKind,
    pub ticket: PathBuf,
    pub expected: PathBuf,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    scenario: Vec<Scenario>,
}

/// Errors returned when loading scenario files.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("failed to read scenarios file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse scenarios file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load scenarios from a TOML file.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ScenarioLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_scenarios(&raw, path.display().to_string())
}

/// Built-in scenarios covering the sample tickets.
pub fn default_scenarios() -> Vec<Scenario> {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/scenarios/scenarios.toml"
    ));
    match parse_scenarios(embedded, "embedded scenarios".to_string()) {
        Ok(scenarios) if !scenarios.is_empty() => scenarios,
        _ => fallback_scenarios(),
    }
}

/// Load `path` if given, otherwise the embedded table. An unreadable file
/// falls back to the embedded table. Returns the scenarios and their source.
pub fn resolve_scenarios(path: Option<&Path>) -> (Vec<Scenario>, String) {
    let Some(path) = path else {
        return (default_scenarios(), "embedded".to_string());
    };

    match load_scenarios(path) {
        Ok(scenarios) => {
            debug!(count = scenarios.len(), path = %path.display(), "loaded scenarios");
            (scenarios, format!("file:{}", path.display()))
        }
        Err(err) => {
            warn!("failed to load scenarios from {} ({err}); using embedded defaults", path.display());
            (default_scenarios(), "embedded".to_string())
        }
    }
}

/// Find a scenario by name, ignoring case.
pub fn find_scenario<'a>(scenarios: &'a [Scenario], name: &str) -> Option<&'a Scenario> {
    scenarios
        .iter()
        .find(|scenario| scenario.name.eq_ignore_ascii_case(name))
}

fn parse_scenarios(raw: &str, path: String) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let parsed: ScenarioFile =
        toml::from_str(raw).map_err(|source| ScenarioLoadError::Parse { path, source })?;
    Ok(parsed.scenario)
}

fn fallback_scenarios() -> Vec<Scenario> {
    [
        ("access", "ticket_access_interface.json", "challenge_access_interface.json"),
        ("trunk", "ticket_trunk_interface.json", "challenge_trunk_interface.json"),
        ("l3", "ticket_l3_interface.json", "challenge_l3_interface.json"),
    ]
    .into_iter()
    .map(|(name, ticket, expected)| Scenario {
        name: name.to_string(),
        model: ModelKind::Switchport,
        ticket: Path::new("tickets").join(ticket),
        expected: Path::new("expected").join(expected),
        note: String::new(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{default_scenarios, find_scenario, load_scenarios, resolve_scenarios};
    use crate::model::ModelKind;

    #[test]
    fn embedded_table_covers_every_port_type() {
        let scenarios = default_scenarios();
        for name in ["access", "trunk", "l3"] {
            let scenario = find_scenario(&scenarios, name).expect("scenario present");
            assert_eq!(scenario.model, ModelKind::Switchport);
        }
        let base = find_scenario(&scenarios, "trunk-base").expect("base scenario");
        assert_eq!(base.model, ModelKind::Interface);
    }

    #[test]
    fn lookup_ignores_case() {
        let scenarios = default_scenarios();
        assert!(find_scenario(&scenarios, "L3").is_some());
        assert!(find_scenario(&scenarios, "hybrid").is_none());
    }

    #[test]
    fn file_overrides_and_bad_file_falls_back() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[[scenario]]
name = "lab"
model = "interface"
ticket = "lab/ticket.json"
expected = "lab/expected.json"
"#,
        )
        .expect("write");

        let scenarios = load_scenarios(&path).expect("parse");
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].note, "");

        let (resolved, source) = resolve_scenarios(Some(&path));
        assert_eq!(resolved, scenarios);
        assert!(source.starts_with("file:"));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[[scenario]]\nname = 1\n").expect("write");
        let (resolved, source) = resolve_scenarios(Some(&bad));
        assert_eq!(source, "embedded");
        assert_eq!(resolved, default_scenarios());
    }
}
