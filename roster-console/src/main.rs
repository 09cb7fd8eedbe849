//! # Roster Console
//!
//! Interactive item list: add, show and remove text items from a numbered
//! menu. Items live in memory only.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p roster-console
//! ```

use roster_console::console::Console;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_console=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        "Roster Console v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    console.run()?;

    Ok(())
}
