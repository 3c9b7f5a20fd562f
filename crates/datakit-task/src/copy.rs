//! Copia de contenido hacia un target.
//!
//! Bloque de construcción de los tasks de descarga/subida: streamea un
//! reader dentro de un scope de escritura atómica del target destino. El
//! origen es cualquier `Read` (archivo local, body de un object store);
//! el destino queda publicado completo o no queda publicado.

use std::io::{self, Read};

use log::debug;

use datakit_io::{IoError, StorageBackend};

use crate::errors::TaskError;
use crate::target::LocalTarget;

/// Copia `reader` completo al target, atómicamente. Devuelve bytes copiados.
pub fn copy_content<B: StorageBackend>(reader: &mut dyn Read,
                                       target: &LocalTarget<B>)
                                       -> Result<u64, TaskError> {
    let mut writer = target.open_write()?;
    let bytes = io::copy(reader, &mut writer).map_err(IoError::from)?;
    writer.commit()?;
    debug!("copy_content:done target={} bytes={bytes}", target.path().display());
    Ok(bytes)
}
