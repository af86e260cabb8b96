use crate::error::{FacilityVizError, Result};
use crate::loader::workbook::RawSheet;
use crate::model::{ColumnSchema, FacilityRow, LeafDetails, DEFAULT_DESCRIPTION};

/// Map sheet records onto facility rows using the column schema.
///
/// Path columns and the nearby-facilities column are required. A missing
/// description column is filled with [`DEFAULT_DESCRIPTION`] for every row.
pub fn extract_rows(sheet: &RawSheet, columns: &ColumnSchema) -> Result<Vec<FacilityRow>> {
    let require = |header: &str| {
        sheet
            .column_index(header)
            .ok_or_else(|| FacilityVizError::MissingColumn(header.to_string()))
    };

    let path_indexes = columns
        .path
        .iter()
        .map(|h| require(h.as_str()))
        .collect::<Result<Vec<_>>>()?;
    let nearby_index = require(columns.nearby_facilities.as_str())?;
    let description_index = sheet.column_index(&columns.description);

    if sheet.records.is_empty() {
        return Err(FacilityVizError::EmptySheet);
    }

    let rows = sheet
        .records
        .iter()
        .map(|record| FacilityRow {
            path: path_indexes.iter().map(|&i| cell(record, i)).collect(),
            details: LeafDetails {
                description: match description_index {
                    Some(i) => cell(record, i),
                    None => DEFAULT_DESCRIPTION.to_string(),
                },
                nearby_facilities: cell(record, nearby_index),
            },
        })
        .collect();

    Ok(rows)
}

fn cell(record: &[String], i: usize) -> String {
    record.get(i).cloned().unwrap_or_default()
}
