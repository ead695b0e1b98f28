// src/crypto/derive.rs
//! EVP_BytesToKey-compatible key derivation
//!
//! Iterated MD5 over (previous digest || password || salt), concatenated
//! until enough material exists for a 256-bit key plus a 128-bit IV.
//! MD5 is fixed by the legacy format; substituting a stronger hash would
//! break compatibility with every existing frame.

use md5::{Digest, Md5};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{IV_LEN, KEY_LEN, SALT_LEN};
use crate::password::Password;

/// Key and IV derived from a (password, salt) pair
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyIv {
    pub key: [u8; KEY_LEN],
    pub iv: [u8; IV_LEN],
}

/// Derive an AES-256 key and CBC IV from a password and salt.
///
/// Deterministic and infallible; an empty password is valid input (the
/// empty byte string is hashed like any other).
pub fn derive_key_iv(password: &Password, salt: &[u8; SALT_LEN]) -> KeyIv {
    let mut material = Vec::with_capacity(KEY_LEN + IV_LEN + Md5::output_size());
    let mut prev: Vec<u8> = Vec::new();

    while material.len() < KEY_LEN + IV_LEN {
        let mut hasher = Md5::new();
        hasher.update(&prev);
        hasher.update(password.as_bytes());
        hasher.update(salt);
        prev = hasher.finalize().to_vec();
        material.extend_from_slice(&prev);
    }

    let mut out = KeyIv {
        key: [0u8; KEY_LEN],
        iv: [0u8; IV_LEN],
    };
    out.key.copy_from_slice(&material[..KEY_LEN]);
    out.iv.copy_from_slice(&material[KEY_LEN..KEY_LEN + IV_LEN]);

    material.zeroize();
    prev.zeroize();
    out
}
