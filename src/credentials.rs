// src/credentials.rs
//! Credential file envelope — a JSON object whose `data` field holds the
//! encrypted frame. Every other field passes through the rewrite intact.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// The encrypted payload. Kept as a raw `Value` because some records
    /// legitimately store structured (non-encrypted) data here.
    #[serde(default)]
    pub data: Value,

    /// All remaining fields, preserved verbatim across a rewrite.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl CredentialRecord {
    /// The payload as an encrypted-frame string, if it is one.
    pub fn encrypted_payload(&self) -> Option<&str> {
        self.data.as_str()
    }
}

pub fn read_record(path: &Path) -> Result<CredentialRecord> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Rewrite a credential file: pretty-printed JSON with a trailing
/// newline, matching the format the original files were written in.
pub fn write_record(path: &Path, record: &CredentialRecord) -> Result<()> {
    let mut pretty = serde_json::to_string_pretty(record)?;
    pretty.push('\n');
    std::fs::write(path, pretty)?;
    Ok(())
}
