//! datakit-task: identidad de tasks, fingerprinting con linaje y outputs
//! versionados.
//!
//! La superficie de declaración ([`Task`]) expone lo que el fingerprinter
//! lee: familia, versión, parámetros significativos y dependencias en orden.
//! [`salted_fingerprint`] deriva de ahí un identificador determinista, y
//! [`SaltedOutput`] lo usa para direccionar outputs por contenido: un task
//! cambiado escribe a una ruta nueva en lugar de colisionar con output
//! obsoleto.

pub mod copy;
pub mod errors;
pub mod fingerprint;
pub mod output;
pub mod target;
pub mod task;

pub use copy::copy_content;
pub use errors::TaskError;
pub use fingerprint::{salted_fingerprint, short_fingerprint, task_descriptor, SHORT_FINGERPRINT_LEN};
pub use output::{SaltedOutput, TargetOutput};
pub use target::LocalTarget;
pub use task::{Task, TaskParam};
