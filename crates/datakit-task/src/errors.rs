//! Errores de la capa de tasks.

use thiserror::Error;

use datakit_io::IoError;

#[derive(Debug, Error)]
pub enum TaskError {
    /// El grafo de dependencias contiene un ciclo. Precondición violada:
    /// se detecta durante el recorrido en lugar de desbordar la pila.
    #[error("dependency cycle through task family '{family}'")]
    DependencyCycle { family: String },

    #[error(transparent)]
    Io(#[from] IoError),
}
