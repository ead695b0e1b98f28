// src/crypto/frame.rs
//! The "Salted__" frame: magic || salt || AES-256-CBC ciphertext,
//! base64-encoded for storage inside a JSON field.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;

use crate::consts::{IV_LEN, OPENSSL_MAGIC, SALT_LEN};
use crate::crypto::derive::derive_key_iv;
use crate::error::CoreError;
use crate::password::Password;

pub type Result<T> = std::result::Result<T, CoreError>;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Decrypt a base64 frame back to plaintext.
///
/// `CoreError::Format` means the payload is not this format at all
/// (bad base64 or missing magic). `CoreError::Decryption` means the
/// frame parsed but the key was wrong or the data corrupt — padding
/// validation is the only integrity signal the format offers, and
/// callers must treat both causes identically.
pub fn decrypt_string(data: &str, password: &Password) -> Result<String> {
    let raw = STANDARD.decode(data).map_err(|_| CoreError::Format)?;

    if raw.len() < OPENSSL_MAGIC.len() + SALT_LEN || !raw.starts_with(OPENSSL_MAGIC) {
        return Err(CoreError::Format);
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&raw[OPENSSL_MAGIC.len()..OPENSSL_MAGIC.len() + SALT_LEN]);
    let ciphertext = &raw[OPENSSL_MAGIC.len() + SALT_LEN..];
    if ciphertext.is_empty() || ciphertext.len() % IV_LEN != 0 {
        return Err(CoreError::Decryption);
    }

    let keys = derive_key_iv(password, &salt);
    let plaintext = Aes256CbcDec::new((&keys.key).into(), (&keys.iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CoreError::Decryption)?;

    String::from_utf8(plaintext).map_err(|_| CoreError::Decryption)
}

/// Encrypt plaintext into a base64 frame under a fresh random salt.
///
/// Infallible: padding always applies and the salt comes from the
/// process CSPRNG. Successive calls with identical inputs yield
/// different frames because the salt is never reused.
pub fn encrypt_string(plaintext: &str, password: &Password) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    encrypt_with_salt(plaintext, password, &salt)
}

fn encrypt_with_salt(plaintext: &str, password: &Password, salt: &[u8; SALT_LEN]) -> String {
    let keys = derive_key_iv(password, salt);
    let ciphertext = Aes256CbcEnc::new((&keys.key).into(), (&keys.iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut frame = Vec::with_capacity(OPENSSL_MAGIC.len() + SALT_LEN + ciphertext.len());
    frame.extend_from_slice(OPENSSL_MAGIC);
    frame.extend_from_slice(salt);
    frame.extend_from_slice(&ciphertext);
    STANDARD.encode(frame)
}
