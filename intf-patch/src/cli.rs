use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use intf_patch::model::ModelKind;

#[derive(Parser, Debug)]
#[command(name = "intf-patch")]
#[command(about = "Validate interface-change tickets and render YANG Patch message-bodies")]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Validate one or more ticket files and print the normalized records.
    Validate(ValidateArgs),
    /// Render the YANG Patch message-body for one ticket.
    Render(RenderArgs),
    /// Render a ticket and compare it with an expected message-body.
    Check(CheckArgs),
    /// List the configured ticket/expected scenarios.
    Scenarios(ScenariosArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Ticket JSON files, with or without the {"ticket": ...} envelope.
    #[arg(required = true)]
    pub tickets: Vec<PathBuf>,
    #[arg(long, value_enum, default_value_t = ModelKind::Interface)]
    pub model: ModelKind,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    pub ticket: PathBuf,
    #[arg(long, value_enum, default_value_t = ModelKind::Interface)]
    pub model: ModelKind,
    /// Write the message-body here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Ticket JSON file. Required unless --scenario is given.
    #[arg(required_unless_present = "scenario", conflicts_with = "scenario")]
    pub ticket: Option<PathBuf>,
    /// Expected message-body JSON file.
    #[arg(required_unless_present = "scenario", conflicts_with = "scenario")]
    pub expected: Option<PathBuf>,
    /// Named scenario from the scenarios table.
    #[arg(long)]
    pub scenario: Option<String>,
    /// Optional scenarios TOML file. Defaults to the embedded table.
    #[arg(long)]
    pub scenarios_file: Option<PathBuf>,
    /// Directory scenario paths are relative to.
    #[arg(long, default_value = "fixtures")]
    pub fixtures_dir: PathBuf,
    /// Model override. Defaults to the scenario's model, or interface.
    #[arg(long, value_enum)]
    pub model: Option<ModelKind>,
    /// JSON paths or member names to leave out of the comparison.
    #[arg(long)]
    pub ignore: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Only print the verdict and any differences.
    #[arg(short, long)]
    pub quiet: bool,
    /// Also write the rendered message-body here. Never the ticket or the
    /// expected file.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ScenariosArgs {
    #[arg(long)]
    pub scenarios_file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
