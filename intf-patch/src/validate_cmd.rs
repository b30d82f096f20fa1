use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use intf_model::ValidationError;
use intf_patch::model::ModelKind;
use intf_patch::ticket_file::load_ticket;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cli::{OutputFormat, ValidateArgs};

#[derive(Debug, Serialize)]
struct TicketReport {
    ticket: String,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome {
    Valid { record: Value },
    Invalid { error: ValidationError },
    Unreadable { error: String },
}

impl Outcome {
    fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid { .. })
    }
}

pub fn run_validate(args: ValidateArgs) -> Result<()> {
    let reports = args
        .tickets
        .iter()
        .map(|path| {
            Ok(TicketReport {
                ticket: path.display().to_string(),
                outcome: validate_file(path, args.model)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", render_report(report));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    let failed = reports.iter().filter(|r| !r.outcome.is_valid()).count();
    if failed > 0 {
        bail!(
            "{failed} of {} tickets failed validation",
            reports.len()
        );
    }
    Ok(())
}

/// Unreadable and invalid tickets become report rows. Only a record that
/// cannot be serialized aborts the batch.
fn validate_file(path: &Path, model: ModelKind) -> Result<Outcome> {
    let ticket = match load_ticket(path) {
        Ok(ticket) => ticket,
        Err(err) => {
            warn!("{err}");
            return Ok(Outcome::Unreadable {
                error: err.to_string(),
            });
        }
    };

    match model.validate(&ticket) {
        Ok(validated) => {
            let record = validated
                .to_json()
                .with_context(|| format!("failed to serialize record for {}", path.display()))?;
            debug!(ticket = %path.display(), "ticket validated");
            Ok(Outcome::Valid { record })
        }
        Err(error) => {
            debug!(ticket = %path.display(), kind = error.kind(), "ticket rejected");
            Ok(Outcome::Invalid { error })
        }
    }
}

fn render_report(report: &TicketReport) -> String {
    match &report.outcome {
        Outcome::Valid { record } => format!(
            "{} {}\n{}",
            "OK".green(),
            report.ticket,
            serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string())
        ),
        Outcome::Invalid { error } => format!(
            "{} {} [{}] {error}",
            "FAIL".red(),
            report.ticket,
            error.kind()
        ),
        Outcome::Unreadable { error } => format!("{} {error}", "FAIL".red()),
    }
}
