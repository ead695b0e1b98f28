// src/consts.rs
//! Shared constants — wire format parameters and environment contract

/// Header magic for OpenSSL salted frames
pub const OPENSSL_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length fixed by the OpenSSL salted format
pub const SALT_LEN: usize = 8;

/// AES-256 key length
pub const KEY_LEN: usize = 32;

/// AES block / CBC IV length
pub const IV_LEN: usize = 16;

/// Environment variable naming the target encryption key (required)
pub const ENV_TARGET_KEY: &str = "REKEY_TARGET_KEY";

/// Environment variable naming the legacy encryption key (optional)
pub const ENV_LEGACY_KEY: &str = "REKEY_LEGACY_KEY";

/// Environment variable naming the credentials directory (optional)
pub const ENV_CREDENTIALS_DIR: &str = "REKEY_CREDENTIALS_DIR";

/// Fallback legacy key matching the fixture data generator.
/// The literal is an interoperability contract — do not change it.
pub const DEFAULT_LEGACY_KEY: &str = "super-secret-key";

/// Default location of the credential files
pub const DEFAULT_CREDENTIALS_DIR: &str = "/demo-data/credentials";
