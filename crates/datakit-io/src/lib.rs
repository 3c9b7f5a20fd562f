//! datakit-io: escritura atómica de archivos.
//!
//! Garantiza que un recurso nombrado queda escrito completo con su contenido
//! final, o no queda escrito en absoluto, incluso ante fallos a mitad de la
//! escritura. El temporal conserva el sufijo del destino para librerías que
//! deciden formato por extensión.
//!
//! I/O síncrono y bloqueante, sin paralelismo interno; la única garantía de
//! concurrencia es la atomicidad del rename local al namespace.

pub mod atomic;
pub mod backend;
pub mod errors;

pub use atomic::{atomic_write, atomic_write_path, AtomicWriteFile};
pub use backend::{LocalBackend, StorageBackend};
pub use errors::IoError;
