use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use antichess_cli::{Session, SessionConfig};

fn main() -> Result<()> {
    // Game text goes to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    info!("antichess starting");

    let mut session = Session::new(io::stdin().lock(), io::stdout(), SessionConfig::default());
    let outcome = session.run()?;

    info!(?outcome, "antichess shutting down");
    Ok(())
}
