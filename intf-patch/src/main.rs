use anyhow::Result;
use clap::Parser;
use intf_patch::report::render_scenarios;
use intf_patch::scenarios::resolve_scenarios;
use tracing_subscriber::EnvFilter;

mod check_cmd;
mod cli;
mod path_guard;
mod render_cmd;
mod validate_cmd;

use cli::{Cli, Command, OutputFormat, ScenariosArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Validate(args) => validate_cmd::run_validate(args),
        Command::Render(args) => render_cmd::run_render(args),
        Command::Check(args) => check_cmd::run_check(args),
        Command::Scenarios(args) => run_scenarios(args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_scenarios(args: ScenariosArgs) -> Result<()> {
    let (scenarios, source) = resolve_scenarios(args.scenarios_file.as_deref());

    match args.format {
        OutputFormat::Text => {
            println!("Using scenarios: {source}");
            println!("{}", render_scenarios(&scenarios));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scenarios)?),
    }

    Ok(())
}
