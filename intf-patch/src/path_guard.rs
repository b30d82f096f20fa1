//! Keeps `render` and `check` from writing a message-body over the files
//! they were given.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// A file the command reads, named by its role for error messages.
#[derive(Debug, Clone, Copy)]
pub struct InputFile<'a> {
    pub role: &'static str,
    pub path: &'a Path,
}

impl<'a> InputFile<'a> {
    pub fn ticket(path: &'a Path) -> Self {
        Self { role: "ticket", path }
    }

    pub fn expected(path: &'a Path) -> Self {
        Self {
            role: "expected",
            path,
        }
    }
}

pub fn ensure_not_an_input(output: &Path, inputs: &[InputFile<'_>]) -> Result<()> {
    let target = resolve(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;

    for input in inputs {
        let source = resolve(input.path)
            .with_context(|| format!("failed to resolve {} path {}", input.role, input.path.display()))?;
        if source == target {
            bail!(
                "refusing to overwrite {} file {} with the rendered message-body",
                input.role,
                input.path.display()
            );
        }
    }
    Ok(())
}

/// Canonical path. An output that does not exist yet resolves to its
/// canonical parent joined with the file name.
fn resolve(path: &Path) -> Result<PathBuf> {
    if let Ok(found) = path.canonicalize() {
        return Ok(found);
    }

    let absolute = std::path::absolute(path)?;
    Ok(match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .unwrap_or_else(|_| parent.to_path_buf())
            .join(name),
        _ => absolute,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{ensure_not_an_input, InputFile};

    #[test]
    fn refuses_ticket_and_expected_paths() {
        let dir = tempdir().expect("tempdir");
        let ticket = dir.path().join("ticket.json");
        let expected = dir.path().join("expected.json");
        fs::write(&ticket, "{}").expect("write");
        fs::write(&expected, "{}").expect("write");
        let inputs = [InputFile::ticket(&ticket), InputFile::expected(&expected)];

        let err = ensure_not_an_input(&expected, &inputs).unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite expected file"));

        let aliased = dir.path().join(".").join("ticket.json");
        let err = ensure_not_an_input(&aliased, &inputs).unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite ticket file"));

        assert!(ensure_not_an_input(&dir.path().join("patch.json"), &inputs).is_ok());
    }

    #[test]
    fn new_output_beside_a_dot_dot_is_resolved() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("out")).expect("mkdir");
        let ticket = dir.path().join("ticket.json");
        fs::write(&ticket, "{}").expect("write");

        let fresh = dir.path().join("out").join("..").join("patch.json");
        assert!(ensure_not_an_input(&fresh, &[InputFile::ticket(&ticket)]).is_ok());

        let aliased = dir.path().join("out").join("..").join("ticket.json");
        assert!(ensure_not_an_input(&aliased, &[InputFile::ticket(&ticket)]).is_err());
    }
}
