//! Lectura de hojas Excel hacia batches columnares.
//!
//! El parser de planilla es un colaborador externo (calamine); acá sólo se
//! decide la forma columnar: primera fila como encabezado, columnas con
//! celdas exclusivamente numéricas (o vacías) como `Float64`, el resto como
//! `Utf8`. Inferencia deliberadamente mínima: la semántica fina de tipos es
//! problema del motor de dataframes que consuma el resultado.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use calamine::{open_workbook_auto, Data, Reader};
use log::debug;

use crate::errors::FileError;

static EMPTY_CELL: Data = Data::Empty;

/// Lee `sheet` (o la primera hoja) de un workbook como `RecordBatch`.
pub(crate) fn read_sheet_batch(path: &Path, sheet: Option<&str>) -> Result<RecordBatch, FileError> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(FileError::MissingSheet(name.to_string()));
            }
            name.to_string()
        }
        None => workbook.sheet_names()
                        .first()
                        .cloned()
                        .ok_or(FileError::EmptyWorkbook)?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| FileError::EmptySheet(sheet_name.clone()))?;
    let headers: Vec<String> = header.iter()
                                     .enumerate()
                                     .map(|(i, cell)| match cell {
                                         Data::Empty => format!("column_{i}"),
                                         other => other.to_string(),
                                     })
                                     .collect();

    let data_rows: Vec<&[Data]> = rows.collect();
    if data_rows.is_empty() {
        return Err(FileError::EmptySheet(sheet_name));
    }
    debug!("read_sheet_batch:done sheet={sheet_name} rows={} cols={}",
           data_rows.len(),
           headers.len());

    let mut fields: Vec<Field> = Vec::with_capacity(headers.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(headers.len());
    for (j, name) in headers.iter().enumerate() {
        let cells: Vec<&Data> = data_rows.iter()
                                         .map(|row| row.get(j).unwrap_or(&EMPTY_CELL))
                                         .collect();
        if is_numeric_column(&cells) {
            let values: Vec<Option<f64>> = cells.iter().map(|c| as_number(c)).collect();
            fields.push(Field::new(name, DataType::Float64, true));
            arrays.push(Arc::new(Float64Array::from(values)));
        } else {
            let values: Vec<Option<String>> = cells.iter()
                                                   .map(|c| match c {
                                                       Data::Empty => None,
                                                       other => Some(other.to_string()),
                                                   })
                                                   .collect();
            fields.push(Field::new(name, DataType::Utf8, true));
            arrays.push(Arc::new(StringArray::from(values)));
        }
    }

    let schema = Arc::new(Schema::new(fields));
    RecordBatch::try_new(schema, arrays).map_err(FileError::from)
}

fn is_numeric_column(cells: &[&Data]) -> bool {
    cells.iter()
         .all(|c| matches!(c, Data::Empty | Data::Int(_) | Data::Float(_)))
}

fn as_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        _ => None,
    }
}
