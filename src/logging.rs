//! Subscriber setup for the binary. Library crates only emit `tracing` events.
//!
//! - default: `info` and above to stderr, overridable with `RUST_LOG`
//! - `--debug`: `debug` and above appended to [`DEBUG_LOG`]

use tracing_subscriber::EnvFilter;

pub const DEBUG_LOG: &str = "/tmp/wordgrid-debug.log";

pub fn init(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("wordgrid debug log started — tail -f {}", DEBUG_LOG);
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("info"))
            .init();
    }
    Ok(())
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default))
}
