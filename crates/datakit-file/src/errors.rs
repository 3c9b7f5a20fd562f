//! Errores de conversión y lectura columnar.

use thiserror::Error;

use datakit_io::IoError;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("workbook has no sheets")]
    EmptyWorkbook,

    #[error("sheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("sheet '{0}' has no data rows")]
    EmptySheet(String),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error(transparent)]
    Excel(#[from] calamine::Error),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error(transparent)]
    Atomic(#[from] IoError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
