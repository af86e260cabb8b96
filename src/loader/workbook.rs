use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use memmap2::Mmap;
use tracing::debug;

use crate::error::{FacilityVizError, Result};
use crate::loader::cell::cell_to_string;

/// One worksheet reduced to strings: a header row and the records below it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawSheet {
    /// Build from a cell range. Leading blank rows are skipped, the first
    /// non-blank row is the header, and blank records are dropped.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
            .filter(|row| row.iter().any(|s| !s.is_empty()));

        let headers = rows
            .next()
            .map(|row| row.iter().map(|h| h.trim().to_string()).collect())
            .unwrap_or_default();

        Self {
            name: name.to_string(),
            headers,
            records: rows.collect(),
        }
    }

    /// Position of a header, if present
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// Read one named worksheet out of a spreadsheet file (xlsx, xls, xlsb, ods)
pub fn read_sheet(path: &Path, sheet: &str) -> Result<RawSheet> {
    if !path.exists() {
        return Err(FacilityVizError::InputNotFound { path: path.to_path_buf() });
    }

    let unreadable = |reason: String| FacilityVizError::UnreadableInput {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| unreadable(e.to_string()))?;
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| unreadable(e.to_string()))?;

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(&mmap[..]))
        .map_err(|e| unreadable(e.to_string()))?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(FacilityVizError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| unreadable(e.to_string()))?;
    let raw = RawSheet::from_range(sheet, &range);

    debug!(
        sheet = sheet,
        columns = raw.headers.len(),
        records = raw.records.len(),
        "read worksheet"
    );

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(rows: &[&[&str]]) -> Range<Data> {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1);
        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, width as u32 - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String(value.to_string()));
                }
            }
        }
        range
    }

    #[test]
    fn test_header_and_records() {
        let sheet = RawSheet::from_range("1", &range(&[
            &["", ""],
            &[" 카테고리", "이름 "],
            &["병원", "A의원"],
            &["", ""],
            &["약국", ""],
        ]));
        assert_eq!(sheet.name, "1");
        assert_eq!(sheet.headers, vec!["카테고리", "이름"]);
        assert_eq!(sheet.records, vec![vec!["병원", "A의원"], vec!["약국", ""]]);
        assert_eq!(sheet.column_index("이름"), Some(1));
        assert_eq!(sheet.column_index("설명"), None);
    }

    #[test]
    fn test_blank_range() {
        let sheet = RawSheet::from_range("1", &range(&[&[""]]));
        assert!(sheet.headers.is_empty());
        assert!(sheet.records.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_sheet(Path::new("/nonexistent/data.xlsx"), "1").unwrap_err();
        assert!(matches!(err, FacilityVizError::InputNotFound { .. }));
    }
}
