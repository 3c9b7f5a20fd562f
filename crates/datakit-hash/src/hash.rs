//! Primitivas de hashing con salt.
//!
//! El digest se calcula SIEMPRE sobre `salt || value` (salt antepuesto) con
//! SHA-256. Ambos insumos se coercen a bytes antes de hashear: texto se
//! codifica UTF-8, bytes pasan sin cambios. Un valor o salt vacío es un error
//! de argumento; no existe fallback silencioso a salt vacío en esta capa.

use sha2::{Digest, Sha256};

use crate::errors::HashError;

/// Longitud en bytes del digest (SHA-256).
pub const DIGEST_LEN: usize = 32;

/// Hashea `salt || value` y devuelve el digest crudo.
///
/// Falla con `EmptyValue`/`EmptySalt` antes de tocar el hasher.
pub fn hash_bytes(value: impl AsRef<[u8]>, salt: impl AsRef<[u8]>) -> Result<[u8; DIGEST_LEN], HashError> {
    let value = value.as_ref();
    let salt = salt.as_ref();
    if value.is_empty() {
        return Err(HashError::EmptyValue);
    }
    if salt.is_empty() {
        return Err(HashError::EmptySalt);
    }
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(value);
    Ok(hasher.finalize().into())
}

/// Variante en hex minúsculo de [`hash_bytes`].
pub fn hash_hex(value: impl AsRef<[u8]>, salt: impl AsRef<[u8]>) -> Result<String, HashError> {
    Ok(hex::encode(hash_bytes(value, salt)?))
}
