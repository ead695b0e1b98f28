// tests/crypto_tests.rs
use credential_rekey::consts::SALT_LEN;
use credential_rekey::{decrypt_string, derive_key_iv, encrypt_string, CoreError, Password};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

fn salt(hex: &str) -> [u8; SALT_LEN] {
    hex::decode(hex).unwrap().try_into().unwrap()
}

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let password = Password::from("correct horse battery staple");
    let frame = encrypt_string("Attack at dawn!", &password);

    let decrypted = decrypt_string(&frame, &password).unwrap();
    assert_eq!(decrypted, "Attack at dawn!");
}

#[test]
fn test_roundtrip_survives_unicode_and_empty_plaintext() {
    let password = Password::from("k");
    for plaintext in ["", "é🔑 non-ascii", "{\"user\":\"admin\"}"] {
        let frame = encrypt_string(plaintext, &password);
        assert_eq!(decrypt_string(&frame, &password).unwrap(), plaintext);
    }
}

#[test]
fn test_decrypt_fails_with_wrong_password() {
    // Padding validation is the only wrong-key signal; sample a few
    // key pairs to exercise the probabilistic rejection.
    for i in 0..8 {
        let right = Password::new(format!("right-key-{i}"));
        let wrong = Password::new(format!("wrong-key-{i}"));

        let frame = encrypt_string("secret", &right);
        let result = decrypt_string(&frame, &wrong);
        assert!(matches!(result, Err(CoreError::Decryption)));
    }
}

#[test]
fn test_salt_is_fresh_per_encryption() {
    let password = Password::from("same-key");
    let a = encrypt_string("same plaintext", &password);
    let b = encrypt_string("same plaintext", &password);

    assert_ne!(a, b);
    assert_eq!(decrypt_string(&a, &password).unwrap(), "same plaintext");
    assert_eq!(decrypt_string(&b, &password).unwrap(), "same plaintext");
}

#[test]
fn test_missing_magic_is_a_format_error() {
    let password = Password::from("key");
    let bogus = STANDARD.encode(b"NotSalt_\x00\x01\x02\x03\x04\x05\x06\x07garbagegarbage!!");
    assert!(matches!(
        decrypt_string(&bogus, &password),
        Err(CoreError::Format)
    ));
}

#[test]
fn test_invalid_base64_is_a_format_error() {
    let password = Password::from("key");
    assert!(matches!(
        decrypt_string("%%% not base64 %%%", &password),
        Err(CoreError::Format)
    ));
}

#[test]
fn test_derivation_is_deterministic() {
    let password = Password::from("super-secret-key");
    let s = salt("0001020304050607");

    let a = derive_key_iv(&password, &s);
    let b = derive_key_iv(&password, &s);
    assert_eq!(a.key, b.key);
    assert_eq!(a.iv, b.iv);
}

#[test]
fn test_derivation_varies_with_password_and_salt() {
    let base = derive_key_iv(&Password::from("pw"), &salt("0001020304050607"));
    let other_pw = derive_key_iv(&Password::from("pw2"), &salt("0001020304050607"));
    let other_salt = derive_key_iv(&Password::from("pw"), &salt("0701020304050600"));

    assert_ne!(base.key, other_pw.key);
    assert_ne!(base.key, other_salt.key);
}

#[test]
fn test_derivation_matches_openssl_vector() {
    // EVP_BytesToKey(md5, "super-secret-key", 0001020304050607)
    let keys = derive_key_iv(&Password::from("super-secret-key"), &salt("0001020304050607"));
    assert_eq!(
        hex::encode(keys.key),
        "8823e68582938fd63996faa261e4710088a420f5624cb6a6594b9d940158ad93"
    );
    assert_eq!(hex::encode(keys.iv), "df2038675cd33782871763841c4dca9b");
}

#[test]
fn test_empty_password_is_well_defined() {
    let keys = derive_key_iv(&Password::from(""), &salt("0001020304050607"));
    assert_eq!(
        hex::encode(keys.key),
        "3677509751ccf61539174d2b9635a7bf32b6a281e52169373c36f5fc52ad30fb"
    );
    assert_eq!(hex::encode(keys.iv), "ad5cbbe891ace81f545d9efdddabec8f");
}
