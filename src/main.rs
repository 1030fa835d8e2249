//! Tilde - A small full-screen terminal text editor
//! Main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tilde::editor::Editor;
use tilde::settings::EditorSettings;
use tilde::term::crossterm::CrosstermBackend;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "tilde", version, about = "A small full-screen terminal text editor")]
struct Args {
    /// File to open; created on first save if it does not exist
    path: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = tilde::logging::init() {
        eprintln!("tilde: logging disabled: {e:#}");
    }
    install_panic_hook();

    if let Err(e) = run(args) {
        error!(target: "editor", error = %format!("{e:#}"), "fatal");
        eprintln!("tilde: {e:#}");
        std::process::exit(1);
    }
}

/// Runs the editor to completion; the editor (and with it the terminal
/// state) is dropped before this returns
fn run(args: Args) -> anyhow::Result<()> {
    let settings = EditorSettings::default();
    let backend = CrosstermBackend::new(settings.read_timeout)
        .context("failed to create terminal backend")?;

    let mut editor = Editor::with_file(backend, settings, args.path)
        .context("failed to initialize editor")?;
    editor.run().context("editor error")?;

    info!(target: "editor", "exit");
    Ok(())
}

/// Leave raw mode before the default hook prints the panic message
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        error!(target: "editor", %info, "panic");
        default_hook(info);
    }));
}
