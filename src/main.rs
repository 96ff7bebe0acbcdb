//! taskdeck - a single-user task list for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates; this file only parses flags and dispatches.

use std::path::PathBuf;

use clap::Parser;

use taskdeck_app::{Settings, StorageAdapter};
use taskdeck_core::prelude::*;

/// taskdeck - a single-user task list for the terminal
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "A single-user task list for the terminal", long_about = None)]
struct Args {
    /// Override the storage slot path
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Serve a directory of static assets over HTTP instead of running the TUI
    #[arg(long, value_name = "DIR")]
    serve: Option<PathBuf>,

    /// Port for --serve (falls back to the PORT env var, then 1234)
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // File-based logging; init failure (e.g. read-only home) is not fatal
    if let Err(e) = taskdeck_core::logging::init() {
        eprintln!("warning: logging disabled: {e}");
    }

    let settings = Settings::load();

    if let Some(root) = args.serve {
        let port = taskdeck_server::resolve_port(args.port, settings.server.port);
        return taskdeck_server::serve_blocking(root, port);
    }

    let storage = match args.data_file.or(settings.storage.path) {
        Some(path) => StorageAdapter::at(path),
        None => StorageAdapter::default_slot(),
    };
    info!("Using storage slot {}", storage.path().display());

    taskdeck_tui::run(storage)
}
