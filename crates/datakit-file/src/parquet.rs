//! Conversión a Parquet y lecturas de columna proyectadas.
//!
//! El writer Parquet exige abrir el archivo por ruta, así que la conversión
//! usa el modo por ruta del writer atómico: el archivo `.parquet` definitivo
//! aparece completo junto al Excel de origen, o no aparece.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, Float64Array, StringArray};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use log::debug;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::{ArrowWriter, ProjectionMask};

use datakit_io::atomic_write_path;

use crate::errors::FileError;
use crate::excel::read_sheet_batch;

/// Valor escalar leído de una columna Parquet.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Float(f64),
    Text(String),
    Null,
}

/// Ruta hermana con extensión `.parquet` (mismo directorio, mismo stem).
pub fn parquet_sibling_path(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension("parquet")
}

/// Convierte una hoja de un workbook Excel al Parquet hermano.
///
/// `sheet = None` usa la primera hoja. Devuelve la ruta del `.parquet`
/// recién publicado.
pub fn convert_excel_to_parquet(xls_path: impl AsRef<Path>,
                                sheet: Option<&str>)
                                -> Result<PathBuf, FileError> {
    let xls_path = xls_path.as_ref();
    let batch = read_sheet_batch(xls_path, sheet)?;
    let out = parquet_sibling_path(xls_path);
    debug!("convert_excel_to_parquet:start input={} output={}",
           xls_path.display(),
           out.display());

    atomic_write_path(&out, |tmp| {
        let file = File::create(tmp)?;
        let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
        writer.write(&batch)?;
        writer.close()?;
        Ok::<_, FileError>(())
    })?;

    debug!("convert_excel_to_parquet:done output={}", out.display());
    Ok(out)
}

/// Lee una única columna de un archivo Parquet (lectura proyectada).
pub fn read_parquet_column(path: impl AsRef<Path>,
                           column: &str)
                           -> Result<Vec<ColumnValue>, FileError> {
    let file = File::open(path.as_ref())?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let index = builder.schema()
                       .column_with_name(column)
                       .map(|(i, _)| i)
                       .ok_or_else(|| FileError::MissingColumn(column.to_string()))?;
    let mask = ProjectionMask::roots(builder.parquet_schema(), [index]);
    let reader = builder.with_projection(mask).build()?;

    let mut values = Vec::new();
    for batch in reader {
        let batch = batch?;
        push_column_values(batch.column(0), &mut values)?;
    }
    Ok(values)
}

fn push_column_values(column: &Arc<dyn Array>,
                      values: &mut Vec<ColumnValue>)
                      -> Result<(), FileError> {
    if let Some(floats) = column.as_any().downcast_ref::<Float64Array>() {
        for i in 0..floats.len() {
            values.push(if floats.is_null(i) {
                            ColumnValue::Null
                        } else {
                            ColumnValue::Float(floats.value(i))
                        });
        }
        return Ok(());
    }
    if let Some(strings) = column.as_any().downcast_ref::<StringArray>() {
        for i in 0..strings.len() {
            values.push(if strings.is_null(i) {
                            ColumnValue::Null
                        } else {
                            ColumnValue::Text(strings.value(i).to_string())
                        });
        }
        return Ok(());
    }
    Err(FileError::Arrow(ArrowError::CastError(format!(
        "unsupported column type {}",
        column.data_type()
    ))))
}
