//! Headless board session.
//!
//! Reads newline-delimited JSON gestures on stdin and writes one JSON frame
//! per gesture on stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};

use board_state::adapter;
use board_state::{BoardSession, SessionConfig};
use chess_core::ShakmatyOracle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::from_env()?;
    info!(start_fen = %config.start_position, "Board session starting");

    let mut session = BoardSession::new(ShakmatyOracle::new(), config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut handled = 0u64;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match adapter::step(&mut session, &line) {
            Ok(frame) => {
                serde_json::to_writer(&mut stdout, &frame)?;
                writeln!(stdout)?;
                stdout.flush()?;
                handled += 1;
            }
            Err(e) => warn!(error = %e, "Skipping gesture"),
        }
    }

    info!(gestures = handled, moves = session.history().len(), "Board session finished");
    Ok(())
}
