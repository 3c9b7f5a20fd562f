//! Salt por defecto del proceso y derivados.
//!
//! La variable `DATAKIT_SALT` contiene el salt por defecto en hex. Se lee en
//! cada llamada (sin cache): la ausencia es un estado válido que se reporta
//! como `None` y deja la decisión al caller, nunca se hashea con salt vacío.

use log::debug;

use crate::errors::HashError;
use crate::hash::{hash_bytes, DIGEST_LEN};

/// Variable de entorno con el salt por defecto (hex).
pub const SALT_ENV_VAR: &str = "DATAKIT_SALT";

/// Largo del user id corto (caracteres hex).
pub const USER_ID_LEN: usize = 8;

/// Lee y decodifica el salt por defecto del entorno.
///
/// `Ok(None)` cuando la variable no existe o está vacía; hex malformado sí es
/// error porque indica configuración rota, no ausencia.
pub fn default_salt() -> Result<Option<Vec<u8>>, HashError> {
    let raw = match std::env::var(SALT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            debug!("default_salt: {SALT_ENV_VAR} unset");
            return Ok(None);
        }
    };
    let bytes = hex::decode(raw.trim())
        .map_err(|source| HashError::MalformedSalt { var: SALT_ENV_VAR, source })?;
    Ok(Some(bytes))
}

/// Digest completo de un username normalizado (minúsculas) con salt explícito.
pub fn user_hash(username: &str, salt: impl AsRef<[u8]>) -> Result<[u8; DIGEST_LEN], HashError> {
    hash_bytes(username.to_lowercase(), salt)
}

/// Identificador corto y estable para un username.
///
/// Usa el salt por defecto del proceso y trunca el digest hex a
/// [`USER_ID_LEN`] caracteres. Pseudónimo de baja colisión, no credencial.
pub fn user_id(username: &str) -> Result<String, HashError> {
    let salt = default_salt()?.ok_or(HashError::MissingSalt(SALT_ENV_VAR))?;
    let digest = user_hash(username, salt)?;
    Ok(hex::encode(digest)[..USER_ID_LEN].to_string())
}
