//! Superficie de declaración de un task.
//!
//! Un task expone lo que el fingerprinter necesita leer y nada más: familia
//! (nombre de tipo), versión de esquema declarada, parámetros con su bandera
//! de significancia y dependencias upstream en orden de declaración. La
//! declaración es explícita por métodos del trait, evaluada en construcción;
//! no hay intercepción de atributos ni descriptores implícitos.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parámetro declarado de un task.
///
/// `value` es la representación canónica JSON del valor; sólo los parámetros
/// con `significant = true` participan del fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskParam {
    pub name: String,
    pub value: Value,
    pub significant: bool,
}

impl TaskParam {
    /// Parámetro que afecta la identidad del task.
    pub fn significant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { name: name.into(),
               value: value.into(),
               significant: true }
    }

    /// Parámetro excluido del fingerprint (p.ej. rutas de trabajo locales).
    pub fn insignificant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { name: name.into(),
               value: value.into(),
               significant: false }
    }
}

/// Unidad lógica de trabajo, leída (nunca mutada) por el fingerprinter.
///
/// Precondición: el grafo formado por `requires` es acíclico. El orden de
/// `requires` es significativo y entra al fingerprint tal como se declara.
pub trait Task {
    /// Nombre de tipo estable del task.
    fn family(&self) -> &str;

    /// Versión de esquema declarada. Subirla invalida todo output derivado.
    fn version(&self) -> &str;

    /// Parámetros declarados. El orden de declaración no afecta el
    /// fingerprint (se ordenan por nombre al hashear).
    fn params(&self) -> Vec<TaskParam> {
        Vec::new()
    }

    /// Dependencias upstream en orden de declaración.
    fn requires(&self) -> Vec<&dyn Task> {
        Vec::new()
    }
}
