//! editable-webdata - play a form-edit session against a simulated backend.
//!
//! # Usage
//!
//! ```bash
//! editable-webdata --initial old --edit new
//! editable-webdata --initial old --edit new --outcome timeout
//! editable-webdata --initial old --edit new --cancel --json
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use editable_webdata::config::{
    ConfigFlags, Outcome, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use editable_webdata::session::App;

/// Edit a value and report the status of saving it
#[derive(Parser, Debug)]
#[command(name = "editable-webdata", version, about, long_about = None)]
struct Cli {
    /// Value the field starts with
    #[arg(long, default_value = "")]
    initial: String,

    /// Text typed into the field after entering edit mode
    #[arg(long, value_name = "TEXT")]
    edit: Option<String>,

    /// How the simulated backend answers the save
    #[arg(long, value_enum)]
    outcome: Option<Outcome>,

    /// Discard the edit instead of saving it
    #[arg(long)]
    cancel: bool,

    /// Print the final field as JSON
    #[arg(long)]
    json: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "resolved flags");

    let app = App::new(cli.initial)
        .with_edit(cli.edit)
        .with_outcome(effective.outcome.unwrap_or(Outcome::Success))
        .with_cancel(cli.cancel)
        .with_json(effective.json);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out).context("Session error")?;
    out.flush()?;
    Ok(())
}
