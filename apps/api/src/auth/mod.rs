pub mod handlers;
pub mod repository;

use sha2::{Digest, Sha256};

/// Hex SHA-256 digest of a password. The auth table is a simulation for a
/// single-operator deployment, not a hardened credential store.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_hex_sha256() {
        let d = password_digest("hunter2");
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(password_digest("secret"), password_digest("secret"));
        assert_ne!(password_digest("secret"), password_digest("Secret"));
    }
}
