// tests/common.rs
//! Shared test utilities — credential fixture helpers

use std::path::{Path, PathBuf};

use credential_rekey::{encrypt_string, Password};
use serde_json::json;

/// Write a credential file with an encrypted `data` payload plus the
/// usual envelope fields, returning its path.
#[allow(dead_code)]
pub fn write_encrypted_credential(
    dir: &Path,
    name: &str,
    plaintext: &str,
    key: &Password,
) -> PathBuf {
    let record = json!({
        "name": name,
        "type": "httpBasicAuth",
        "data": encrypt_string(plaintext, key),
    });
    write_credential_json(dir, name, &record.to_string())
}

/// Write raw JSON to `<dir>/<name>.json`, returning the path.
#[allow(dead_code)]
pub fn write_credential_json(dir: &Path, name: &str, raw: &str) -> PathBuf {
    let path = dir.join(format!("{name}.json"));
    std::fs::write(&path, raw).expect("write credential fixture");
    path
}
