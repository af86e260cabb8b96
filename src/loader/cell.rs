use calamine::Data;

/// Convert a spreadsheet cell to the string form used for node names and
/// details. Blank cells, error cells and NaN become the empty string; date
/// cells print as `YYYY-MM-DD HH:MM:SS`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_to_string(*f),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.to_string())
            .unwrap_or_else(|| dt.to_string()),
        other => other.to_string(),
    }
}

/// Whole numbers print without a fractional part ("3", not "3.0")
fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        String::new()
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_blank_cells() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Error(CellErrorType::NA)), "");
        assert_eq!(cell_to_string(&Data::Float(f64::NAN)), "");
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(cell_to_string(&Data::String(" 강남 ".to_string())), " 강남 ");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(-7.0)), "-7");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
    }

    #[test]
    fn test_bool() {
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }
}
