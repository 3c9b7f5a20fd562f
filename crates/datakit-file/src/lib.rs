//! datakit-file: conversión Excel -> Parquet y lecturas de columna.
//!
//! Wrapper fino sobre calamine (lectura de planillas) y arrow/parquet
//! (formato columnar), con la escritura publicada a través del writer
//! atómico de `datakit-io`.

pub mod errors;
mod excel;
pub mod parquet;

pub use errors::FileError;
pub use parquet::{convert_excel_to_parquet, parquet_sibling_path, read_parquet_column, ColumnValue};
