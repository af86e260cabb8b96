#![allow(dead_code)]

use std::path::Path;

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

pub const HEADERS: [&str; 6] = ["카테고리", "시", "군", "이름", "인근시설", "설명"];

/// A cell value written into a test workbook
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Date(u16, u8, u8),
    Blank,
}

/// Write a single-sheet workbook: `headers` on the first row, then `rows`
pub fn write_workbook(path: &Path, sheet: &str, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();

    for (c, header) in headers.iter().enumerate() {
        worksheet.write_string(0, c as u16, *header).unwrap();
    }

    for (r, row) in rows.iter().enumerate() {
        let r = r as u32 + 1;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(r, c, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                Cell::Date(y, m, d) => {
                    let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                    worksheet.write_datetime_with_format(r, c, &date, &date_format).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }

    workbook.save(path).unwrap();
}
