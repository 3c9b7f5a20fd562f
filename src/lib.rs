//! datakit: utilidades de ingeniería de datos.
//!
//! Este crate actúa como fachada del workspace:
//! - `io`: escritura atómica de archivos con sufijo preservado.
//! - `hash`: hashing con salt, salt por defecto del proceso y user ids.
//! - `task`: identidad de tasks, fingerprinting con linaje y outputs
//!   versionados.
//! - `file`: conversión Excel -> Parquet y lecturas de columna.
//!
//! Puede usarse entero o crate por crate desde otros clientes.

// Reexport de las implementaciones únicas ubicadas en los crates miembro
// para evitar duplicación a nivel de workspace.
pub use datakit_file as file;
pub use datakit_hash as hash;
pub use datakit_io as io;
pub use datakit_task as task;

pub use datakit_hash::{default_salt, hash_bytes, hash_hex, user_id};
pub use datakit_io::{atomic_write, atomic_write_path, AtomicWriteFile};
pub use datakit_task::{salted_fingerprint, SaltedOutput, Task, TaskParam};
