use std::fs;

use anyhow::{Context, Result};
use intf_patch::ticket_file::load_ticket;
use tracing::{debug, info};

use crate::cli::RenderArgs;
use crate::path_guard::{self, InputFile};

pub fn run_render(args: RenderArgs) -> Result<()> {
    let ticket = load_ticket(&args.ticket)?;
    let validated = args
        .model
        .validate(&ticket)
        .with_context(|| format!("ticket {} failed validation", args.ticket.display()))?;
    debug!(
        interface = %validated.interface().interface_name(),
        model = args.model.as_str(),
        "ticket validated"
    );

    let body = serde_json::to_string_pretty(&validated.patch())?;

    match args.output {
        Some(out_path) => {
            path_guard::ensure_not_an_input(&out_path, &[InputFile::ticket(&args.ticket)])?;
            fs::write(&out_path, format!("{body}\n"))
                .with_context(|| format!("failed to write message-body {}", out_path.display()))?;
            info!(path = %out_path.display(), "wrote YANG Patch message-body");
        }
        None => println!("{body}"),
    }

    Ok(())
}
