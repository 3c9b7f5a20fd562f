//! Escritura atómica write-then-rename con sufijo preservado.
//!
//! El archivo temporal vive en el MISMO directorio que el destino, de modo
//! que el rename final es atómico dentro de ese namespace: ningún lector
//! observa jamás un prefijo parcial del contenido. El nombre temporal
//! conserva la extensión final del destino (`data.parquet` ->
//! `tmp-<uuid>.parquet`); para nombres multi-punto se preserva sólo el
//! último componente (`archive.tar.gz` -> `tmp-<uuid>.gz`).
//!
//! Garantía única del scope: el temporal se libera en TODO camino de salida,
//! commit (rename) en éxito o borrado en fallo. No hay exclusión mutua entre
//! dos escritores al mismo destino: ambos pueden pasar el chequeo de
//! existencia y el último commit gana. Carrera estrecha conocida, documentada
//! en lugar de ocultada.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use uuid::Uuid;

use crate::errors::IoError;

/// Handle efímero de escritura: temporal abierto + destino pendiente.
///
/// Propiedad exclusiva del scope de escritura. Se consume con [`commit`]
/// (rename sobre el destino) o se descarta en `Drop` (borra el temporal y
/// deja el destino intacto).
///
/// [`commit`]: AtomicWriteFile::commit
#[derive(Debug)]
pub struct AtomicWriteFile {
    target: PathBuf,
    tmp_path: PathBuf,
    file: Option<File>,
    committed: bool,
}

impl AtomicWriteFile {
    /// Abre un scope de escritura atómica hacia `target`.
    ///
    /// Falla con `AlreadyExists` si el destino ya existe (antes de crear
    /// nada) y con `NoParentDir` si el directorio padre no existe; esta capa
    /// no crea directorios.
    pub fn create(target: impl AsRef<Path>) -> Result<Self, IoError> {
        let target = target.as_ref().to_path_buf();
        if target.exists() {
            return Err(IoError::AlreadyExists { path: target });
        }

        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => return Err(IoError::NoParentDir { path: target }),
        };
        if !dir.is_dir() {
            return Err(IoError::NoParentDir { path: target });
        }

        let mut name = OsString::from(format!("tmp-{}", Uuid::new_v4().simple()));
        if let Some(ext) = target.extension() {
            name.push(".");
            name.push(ext);
        }
        let tmp_path = dir.join(name);

        debug!("atomic_write:start target={} tmp={}",
               target.display(),
               tmp_path.display());
        // create_new: nunca pisar un temporal ajeno, por improbable que sea
        let file = OpenOptions::new().write(true)
                                     .create_new(true)
                                     .open(&tmp_path)?;

        Ok(Self { target,
                  tmp_path,
                  file: Some(file),
                  committed: false })
    }

    /// Destino final del scope.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Ruta del archivo temporal (mismo directorio y sufijo que el destino).
    pub fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }

    /// Cierra el handle propio dejando el temporal en disco.
    ///
    /// Modo "por ruta": librerías que abren el archivo por sí mismas (p.ej.
    /// un writer de formato columnar) escriben sobre `tmp_path` y el commit
    /// renombra lo que haya allí.
    pub fn release_handle(&mut self) {
        self.file.take();
    }

    /// Publica el contenido: flush + sync y rename atómico sobre el destino.
    pub fn commit(mut self) -> Result<(), IoError> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            file.sync_all()?;
        }
        fs::rename(&self.tmp_path, &self.target)?;
        self.committed = true;
        debug!("atomic_write:commit target={}", self.target.display());
        Ok(())
    }

    fn handle(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "write handle already released"))
    }
}

impl Write for AtomicWriteFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.handle()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.handle()?.flush()
    }
}

impl Drop for AtomicWriteFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Rollback cooperativo: cerrar el handle y retirar el temporal.
        self.file.take();
        match fs::remove_file(&self.tmp_path) {
            Ok(()) => debug!("atomic_write:rollback tmp={}", self.tmp_path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("atomic_write:rollback failed tmp={} err={e}",
                            self.tmp_path.display()),
        }
    }
}

/// Scope de escritura con handle: commit si `body` retorna `Ok`, rollback y
/// propagación del error original (sin envolver) si retorna `Err`.
pub fn atomic_write<T, E, F>(target: impl AsRef<Path>, body: F) -> Result<T, E>
    where F: FnOnce(&mut AtomicWriteFile) -> Result<T, E>,
          E: From<IoError>
{
    let mut writer = AtomicWriteFile::create(target)?;
    let value = body(&mut writer)?;
    writer.commit()?;
    Ok(value)
}

/// Scope de escritura por ruta: `body` recibe la ruta temporal en lugar de
/// un handle, para librerías que exigen abrir el archivo por su cuenta.
/// Misma semántica de commit/rollback que [`atomic_write`].
pub fn atomic_write_path<T, E, F>(target: impl AsRef<Path>, body: F) -> Result<T, E>
    where F: FnOnce(&Path) -> Result<T, E>,
          E: From<IoError>
{
    let mut writer = AtomicWriteFile::create(target)?;
    writer.release_handle();
    let value = body(writer.tmp_path())?;
    writer.commit()?;
    Ok(value)
}
