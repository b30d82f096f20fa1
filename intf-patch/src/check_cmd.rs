use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use intf_patch::diff::{diff_with_options, DiffEntry, DiffOptions, DiffTally};
use intf_patch::model::ModelKind;
use intf_patch::report::{render_diff, render_tally};
use intf_patch::scenarios::{find_scenario, resolve_scenarios};
use intf_patch::ticket_file::{load_json, load_ticket};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{CheckArgs, OutputFormat};
use crate::path_guard::{self, InputFile};

const PASS_MESSAGE: &str = "OK! Output data matches the tested YANG Patch message-body!";
const FAIL_MESSAGE: &str =
    "FAIL - Something went wrong and the output does NOT match the tested message-body";

struct CheckInputs {
    ticket: PathBuf,
    expected: PathBuf,
    model: ModelKind,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    ticket: String,
    expected: String,
    model: ModelKind,
    matches: bool,
    record: serde_json::Value,
    tally: DiffTally,
    entries: Vec<DiffEntry>,
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let inputs = resolve_inputs(&args)?;
    debug!(
        ticket = %inputs.ticket.display(),
        expected = %inputs.expected.display(),
        model = inputs.model.as_str(),
        "checking rendered message-body"
    );

    let ticket = load_ticket(&inputs.ticket)?;
    let expected = load_json(&inputs.expected)?;
    let validated = inputs
        .model
        .validate(&ticket)
        .with_context(|| format!("ticket {} failed validation", inputs.ticket.display()))?;
    let rendered = validated.patch();

    if let Some(out_path) = &args.output {
        path_guard::ensure_not_an_input(
            out_path,
            &[
                InputFile::ticket(&inputs.ticket),
                InputFile::expected(&inputs.expected),
            ],
        )?;
        fs::write(out_path, format!("{}\n", serde_json::to_string_pretty(&rendered)?))
            .with_context(|| format!("failed to write message-body {}", out_path.display()))?;
        info!(path = %out_path.display(), "wrote rendered message-body");
    }

    let opts = DiffOptions {
        ignore_paths: args.ignore.clone(),
        ..DiffOptions::default()
    };
    let entries = diff_with_options(&rendered, &expected, &opts);
    let tally = DiffTally::from_entries(&entries);
    let matches = tally.differences() == 0;

    match args.format {
        OutputFormat::Text => {
            if !args.quiet {
                println!("Validated record:\n");
                println!("{}", serde_json::to_string_pretty(&validated.to_json()?)?);
                println!("\nYANG Patch message-body:\n");
                println!("{}", serde_json::to_string_pretty(&rendered)?);
                println!();
            }
            if matches {
                println!("{}", PASS_MESSAGE.green());
            } else {
                println!("{}", FAIL_MESSAGE.red());
                println!("{}", render_diff(&entries));
                println!("{}", render_tally(&tally));
            }
        }
        OutputFormat::Json => {
            let report = CheckReport {
                ticket: inputs.ticket.display().to_string(),
                expected: inputs.expected.display().to_string(),
                model: inputs.model,
                matches,
                record: validated.to_json()?,
                tally,
                entries,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if !matches {
        bail!(
            "rendered message-body does not match {}",
            inputs.expected.display()
        );
    }
    Ok(())
}

fn resolve_inputs(args: &CheckArgs) -> Result<CheckInputs> {
    if let Some(name) = &args.scenario {
        let (scenarios, source) = resolve_scenarios(args.scenarios_file.as_deref());
        let scenario = find_scenario(&scenarios, name)
            .with_context(|| format!("scenario '{name}' not found in {source} scenarios"))?;
        return Ok(CheckInputs {
            ticket: args.fixtures_dir.join(&scenario.ticket),
            expected: args.fixtures_dir.join(&scenario.expected),
            model: args.model.unwrap_or(scenario.model),
        });
    }

    match (&args.ticket, &args.expected) {
        (Some(ticket), Some(expected)) => Ok(CheckInputs {
            ticket: ticket.clone(),
            expected: expected.clone(),
            model: args.model.unwrap_or(ModelKind::Interface),
        }),
        _ => bail!("provide TICKET and EXPECTED files, or --scenario"),
    }
}
