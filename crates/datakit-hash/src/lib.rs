//! datakit-hash: hashing con salt y representaciones canónicas.
//!
//! Este crate define:
//! - `hash_bytes`/`hash_hex`: digest SHA-256 de `salt || value`.
//! - `default_salt`/`user_id`: salt por defecto desde el entorno (leído en
//!   cada llamada, la ausencia se reporta, no se inventa un salt).
//! - `to_canonical_json`: JSON canónico para valores de parámetros.
//!
//! El salt viaja explícito por las firmas; el único punto que consulta el
//! entorno es `default_salt`.

pub mod canonical_json;
pub mod errors;
pub mod hash;
pub mod salt;

pub use canonical_json::to_canonical_json;
pub use errors::HashError;
pub use hash::{hash_bytes, hash_hex, DIGEST_LEN};
pub use salt::{default_salt, user_hash, user_id, SALT_ENV_VAR, USER_ID_LEN};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Las pruebas que tocan el entorno se serializan con este lock; cargo
    // corre tests en paralelo y `set_var` es global al proceso.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(value: Option<&str>) -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        match value {
            Some(v) => std::env::set_var(SALT_ENV_VAR, v),
            None => std::env::remove_var(SALT_ENV_VAR),
        }
        guard
    }

    #[test]
    fn default_salt_absent_reports_none() {
        let _guard = with_env(None);
        assert_eq!(default_salt().unwrap(), None);
    }

    #[test]
    fn default_salt_decodes_hex() {
        let _guard = with_env(Some(&hex::encode("test")));
        assert_eq!(default_salt().unwrap(), Some(b"test".to_vec()));
    }

    #[test]
    fn default_salt_rejects_malformed_hex() {
        let _guard = with_env(Some("not-hex"));
        assert!(matches!(default_salt(), Err(HashError::MalformedSalt { .. })));
    }

    #[test]
    fn user_id_lowercases_and_truncates() {
        let _guard = with_env(Some(&hex::encode("test")));
        let id = user_id("TestUser").unwrap();
        let expected = hash_hex("testuser", "test").unwrap();
        assert_eq!(id, expected[..USER_ID_LEN].to_string());
        assert_eq!(id.len(), USER_ID_LEN);
    }

    #[test]
    fn user_id_without_salt_fails() {
        let _guard = with_env(None);
        assert_eq!(user_id("someone"), Err(HashError::MissingSalt(SALT_ENV_VAR)));
    }
}
