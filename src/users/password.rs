use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hash the configured default credential for storage. Every row stores a
/// hash of the same secret; salts still differ per call.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{password_hash::PasswordHash, PasswordVerifier};

    #[test]
    fn hash_verifies_against_the_credential() {
        let hash = hash_password("default_password").expect("hashing should succeed");
        let parsed = PasswordHash::new(&hash).expect("stored hash should parse");
        assert!(Argon2::default()
            .verify_password(b"default_password", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong-password", &parsed)
            .is_err());
    }

    #[test]
    fn hashes_are_salted_per_call() {
        let a = hash_password("default_password").expect("hash a");
        let b = hash_password("default_password").expect("hash b");
        assert_ne!(a, b);
    }
}
