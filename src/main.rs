//! Textpane - a scrollable multi-line text pane for character-grid terminals
//! Main entry point

use anyhow::Context;
use std::path::Path;
use textpane::buffer::LineBuffer;
use textpane::editor::Editor;
use textpane::settings::PaneSettings;
use textpane::term::crossterm::CrosstermBackend;
use tracing_subscriber::EnvFilter;

/// Log to the file named by `TEXTPANE_LOG`; the terminal itself is in raw mode
fn init_logging() -> anyhow::Result<()> {
    let Some(path) = std::env::var_os("TEXTPANE_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {}", Path::new(&path).display()))?;
    let filter = EnvFilter::try_from_env("TEXTPANE_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run() -> anyhow::Result<()> {
    init_logging()?;

    let (buffer, label) = match std::env::args().nth(1) {
        Some(path) => {
            let buffer =
                LineBuffer::load(&path).with_context(|| format!("Failed to read {path}"))?;
            (buffer, path)
        }
        None => (LineBuffer::new(), "[scratch]".to_string()),
    };

    let settings = PaneSettings::from_env();
    let backend = CrosstermBackend::new().map_err(anyhow::Error::msg)?;
    let mut editor = Editor::new(backend, buffer, &settings, label)?;
    editor.run()?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("textpane: {e:#}");
        std::process::exit(1);
    }
}
