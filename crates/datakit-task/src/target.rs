//! Target local con escritura atómica y sufijo preservado.
//!
//! Wrapper fino sobre el backend de almacenamiento: toda escritura pasa por
//! el scope atómico de `datakit-io`, así el target nunca es observable a
//! medio escribir. Composable por backend (genérico con default local).

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::debug;

use datakit_io::{AtomicWriteFile, IoError, LocalBackend, StorageBackend};

/// Recurso nombrado sobre un backend de almacenamiento.
#[derive(Debug, Clone)]
pub struct LocalTarget<B: StorageBackend = LocalBackend> {
    path: PathBuf,
    backend: B,
}

impl LocalTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(),
               backend: LocalBackend }
    }
}

impl<B: StorageBackend> LocalTarget<B> {
    pub fn with_backend(path: impl Into<PathBuf>, backend: B) -> Self {
        Self { path: path.into(), backend }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.backend.exists(&self.path)
    }

    /// Crea los directorios padre del target si faltan.
    ///
    /// Única capa autorizada a crear directorios: el writer atómico de abajo
    /// exige que el padre ya exista.
    pub fn makedirs(&self) -> Result<(), IoError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Abre un scope de escritura atómica hacia el target.
    pub fn open_write(&self) -> Result<AtomicWriteFile, IoError> {
        self.makedirs()?;
        debug!("target:open_write path={}", self.path.display());
        self.backend.open_write(&self.path)
    }

    /// Modo por ruta: `body` recibe la ruta temporal (mismo sufijo que el
    /// target) y el commit publica lo que la librería externa haya escrito.
    pub fn with_temporary_path<T, E, F>(&self, body: F) -> Result<T, E>
        where F: FnOnce(&Path) -> Result<T, E>,
              E: From<IoError>
    {
        self.makedirs()?;
        let mut writer = self.backend.open_write(&self.path)?;
        writer.release_handle();
        let value = body(writer.tmp_path())?;
        writer.commit()?;
        Ok(value)
    }

    /// Lectura directa del recurso ya publicado.
    pub fn open_read(&self) -> Result<File, IoError> {
        File::open(&self.path).map_err(IoError::from)
    }
}
