// src/migrate.rs
//! Batch re-key of credential files — the orchestration layer.
//!
//! Each file is fully self-contained: read, decide, rewrite. Per-file
//! failures are reported and skipped; only pre-flight configuration and
//! directory-listing failures abort the run.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::credentials::{read_record, write_record};
use crate::crypto::{decrypt_string, encrypt_string};
use crate::error::CoreError;
use crate::password::Password;

pub type Result<T> = std::result::Result<T, CoreError>;

/// What happened to a single credential file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Decrypted with the legacy key and rewritten under the target key
    Migrated,
    /// Already decryptable with the target key — nothing to do
    AlreadyCurrent,
    /// Payload not a string, or not decryptable with either key
    Skipped,
}

/// Aggregate counts for one run
#[derive(Debug, Default, Clone, Copy)]
pub struct MigrationSummary {
    pub migrated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

/// Re-key one credential file in place.
///
/// The ordering makes the whole batch idempotent: a frame that already
/// opens under the target key is left untouched, so a re-run after a
/// successful migration writes nothing.
pub fn rekey_file(path: &Path, legacy_key: &Password, target_key: &Password) -> Result<FileOutcome> {
    let mut record = read_record(path)?;

    let Some(payload) = record.encrypted_payload().map(str::to_owned) else {
        warn!(
            "Skipping {} - credential data is not an encrypted string.",
            file_name(path)
        );
        return Ok(FileOutcome::Skipped);
    };

    if decrypt_string(&payload, target_key).is_ok() {
        debug!("{} already uses the target key", file_name(path));
        return Ok(FileOutcome::AlreadyCurrent);
    }

    let plaintext = match decrypt_string(&payload, legacy_key) {
        Ok(plaintext) => plaintext,
        Err(err) => {
            warn!(
                "Skipping {} - unable to decrypt with legacy key: {}",
                file_name(path),
                err
            );
            return Ok(FileOutcome::Skipped);
        }
    };

    record.data = encrypt_string(&plaintext, target_key).into();
    write_record(path, &record)?;
    Ok(FileOutcome::Migrated)
}

/// Re-key every `.json` file directly inside the configured directory.
///
/// A missing directory is a soft skip (nothing to migrate); any other
/// listing failure propagates. A failure on an individual file is
/// reported and never aborts the batch.
pub fn rekey_directory(config: &Config) -> Result<MigrationSummary> {
    let dir = &config.credentials_dir;
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(
                "Credentials directory not found at {}, skipping re-key step.",
                dir.display()
            );
            return Ok(MigrationSummary::default());
        }
        Err(err) => return Err(err.into()),
    };

    let mut summary = MigrationSummary::default();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        match rekey_file(&path, &config.legacy_key, &config.target_key) {
            Ok(FileOutcome::Migrated) => summary.migrated += 1,
            Ok(FileOutcome::AlreadyCurrent) => summary.unchanged += 1,
            Ok(FileOutcome::Skipped) => summary.skipped += 1,
            Err(err) => {
                summary.skipped += 1;
                warn!("Failed to re-key {}: {}", file_name(&path), err);
            }
        }
    }

    Ok(summary)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
