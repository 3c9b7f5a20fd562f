//! Errores del crate de hashing (simples por ahora).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum HashError {
    #[error("empty value: nothing to hash")] EmptyValue,
    #[error("empty salt: a non-trivial salt is required")] EmptySalt,
    #[error("no default salt configured ({0} is unset)")] MissingSalt(&'static str),
    #[error("malformed hex in {var}: {source}")] MalformedSalt { var: &'static str, source: hex::FromHexError },
}
