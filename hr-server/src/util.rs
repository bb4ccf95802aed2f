//! Shared utility functions for hr-server

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("pw12345!").unwrap();
        assert_ne!(hash, "pw12345!");
        assert!(verify_password("pw12345!", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("pw12345!").unwrap();
        assert!(!verify_password("pw12345?", &hash));
    }

    #[test]
    fn test_garbage_hash_fails_closed() {
        assert!(!verify_password("pw12345!", "not-a-phc-string"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let a = hash_password("pw12345!").unwrap();
        let b = hash_password("pw12345!").unwrap();
        assert_ne!(a, b);
    }
}
