// src/config.rs
//! Runtime configuration — resolved from the environment exactly once
//! at startup and passed down as plain values. The crypto layer never
//! reads ambient state.

use std::env;
use std::path::PathBuf;

use crate::consts::{
    DEFAULT_CREDENTIALS_DIR, DEFAULT_LEGACY_KEY, ENV_CREDENTIALS_DIR, ENV_LEGACY_KEY,
    ENV_TARGET_KEY,
};
use crate::error::CoreError;
use crate::password::Password;

#[derive(Debug)]
pub struct Config {
    /// Directory holding the credential `.json` files
    pub credentials_dir: PathBuf,
    /// Key the files are currently encrypted with
    pub legacy_key: Password,
    /// Key the files should end up encrypted with
    pub target_key: Password,
}

impl Config {
    /// Build the configuration from the environment.
    ///
    /// The target key is mandatory; its absence is fatal before any file
    /// is touched. The legacy key falls back to the fixture generator's
    /// literal, and the directory to the default deployment path.
    pub fn from_env() -> Result<Self, CoreError> {
        let target_key = env::var(ENV_TARGET_KEY)
            .map(Password::new)
            .map_err(|_| CoreError::MissingKey(ENV_TARGET_KEY))?;

        let legacy_key = env::var(ENV_LEGACY_KEY)
            .map(Password::new)
            .unwrap_or_else(|_| Password::new(DEFAULT_LEGACY_KEY));

        let credentials_dir = env::var(ENV_CREDENTIALS_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_DIR));

        Ok(Self {
            credentials_dir,
            legacy_key,
            target_key,
        })
    }

    /// Explicit constructor for callers that source keys elsewhere.
    pub fn new(credentials_dir: PathBuf, legacy_key: Password, target_key: Password) -> Self {
        Self {
            credentials_dir,
            legacy_key,
            target_key,
        }
    }
}
