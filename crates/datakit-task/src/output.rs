//! Descriptores de output: dónde escribe un task.
//!
//! Objetos de configuración explícitos evaluados en construcción (nada de
//! descriptores interceptados): `TargetOutput` nombra el output por familia
//! del task, `SaltedOutput` agrega el fingerprint corto del task y su linaje
//! al nombre, de modo que un task cambiado (parámetros, versión o upstream)
//! escribe a una ubicación nueva en vez de pisar output viejo. Invalidación
//! de cache por direccionamiento de contenido, no primitiva de seguridad.

use std::path::PathBuf;

use crate::errors::TaskError;
use crate::fingerprint::short_fingerprint;
use crate::target::LocalTarget;
use crate::task::Task;

/// Output nombrado por la familia del task (o un nombre fijo).
#[derive(Debug, Clone)]
pub struct TargetOutput {
    root: PathBuf,
    name: Option<String>,
    ext: String,
}

impl TargetOutput {
    /// `ext` incluye el punto (`".txt"`); vacío para outputs sin extensión.
    pub fn new(root: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self { root: root.into(),
               name: None,
               ext: ext.into() }
    }

    /// Usa un nombre fijo en lugar de la familia del task.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn path(&self, task: &dyn Task) -> PathBuf {
        let stem = self.name.as_deref().unwrap_or_else(|| task.family());
        self.root.join(format!("{stem}{}", self.ext))
    }

    pub fn target(&self, task: &dyn Task) -> LocalTarget {
        LocalTarget::new(self.path(task))
    }
}

/// Output versionado: `<stem>-<fingerprint[..8]><ext>`.
#[derive(Debug, Clone)]
pub struct SaltedOutput {
    output: TargetOutput,
}

impl SaltedOutput {
    pub fn new(root: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self { output: TargetOutput::new(root, ext) }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.output = self.output.with_name(name);
        self
    }

    /// Falla sólo si el grafo de dependencias del task tiene un ciclo.
    pub fn path(&self, task: &dyn Task) -> Result<PathBuf, TaskError> {
        let salt = short_fingerprint(task)?;
        let stem = self.output.name.as_deref().unwrap_or_else(|| task.family());
        Ok(self.output.root.join(format!("{stem}-{salt}{}", self.output.ext)))
    }

    pub fn target(&self, task: &dyn Task) -> Result<LocalTarget, TaskError> {
        Ok(LocalTarget::new(self.path(task)?))
    }
}
