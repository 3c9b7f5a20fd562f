//! Seam de backend de almacenamiento.
//!
//! El writer atómico sólo exige cuatro primitivas sobre recursos
//! direccionables por ruta: existencia, apertura para escritura, rename
//! dentro del mismo namespace y borrado. `LocalBackend` las instancia sobre
//! el filesystem local; un backend de object store implementaría el mismo
//! trait en su namespace (bucket).

use std::fs;
use std::path::Path;

use crate::atomic::AtomicWriteFile;
use crate::errors::IoError;

/// Primitivas mínimas de un almacenamiento con rename atómico local.
pub trait StorageBackend {
    /// ¿Existe un recurso en `path`?
    fn exists(&self, path: &Path) -> bool;

    /// Abre un scope de escritura atómica hacia `path`.
    fn open_write(&self, path: &Path) -> Result<AtomicWriteFile, IoError>;

    /// Rename/replace atómico dentro del namespace del backend.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), IoError>;

    /// Borra el recurso en `path`.
    fn delete(&self, path: &Path) -> Result<(), IoError>;
}

/// Backend sobre el filesystem local.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBackend;

impl StorageBackend for LocalBackend {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn open_write(&self, path: &Path) -> Result<AtomicWriteFile, IoError> {
        AtomicWriteFile::create(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), IoError> {
        fs::rename(from, to).map_err(IoError::from)
    }

    fn delete(&self, path: &Path) -> Result<(), IoError> {
        fs::remove_file(path).map_err(IoError::from)
    }
}
