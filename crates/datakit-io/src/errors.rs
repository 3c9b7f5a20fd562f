//! Errores de escritura atómica.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    /// El destino ya existe al abrir el scope de escritura. Se falla antes
    /// de crear el archivo temporal, sin efectos secundarios.
    #[error("target already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    /// El directorio padre del destino no existe. Esta capa no crea
    /// directorios; el caller (o un wrapper como `makedirs`) es responsable.
    #[error("parent directory does not exist for: {}", .path.display())]
    NoParentDir { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
