use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. The TUI owns the terminal, so without a
/// log file nothing is installed and events are dropped.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(log_file: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Fails only if a global subscriber is already set; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}
