// src/bin/rekey_credentials.rs
//! Re-key credential files from the legacy key to the target key.
//!
//! Exit code 0 on normal completion (including a missing credentials
//! directory); exit code 1 when the target key is absent or an
//! unexpected top-level error escapes. Per-file failures only warn.

use anyhow::{Context, Result};
use credential_rekey::{rekey_directory, Config};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env().context("target encryption key must be defined")?;

    let summary = rekey_directory(&config).with_context(|| {
        format!(
            "failed to re-key credentials in {}",
            config.credentials_dir.display()
        )
    })?;

    if summary.migrated > 0 {
        info!(
            "Re-keyed {} credential file(s) using the provided encryption key.",
            summary.migrated
        );
    } else {
        info!("Credential files already use the provided encryption key - no changes made.");
    }

    Ok(())
}
