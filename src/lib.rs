pub mod error;
pub mod loader;
pub mod model;
pub mod analyzer;
pub mod visualization;
pub mod dump;

use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::model::{ColumnSchema, FacilityRow, Hierarchy};
use crate::loader::{read_sheet, extract_rows, RawSheet};
use crate::analyzer::build_hierarchy;
use crate::visualization::ChartMeta;

/// Default input file name
pub const DEFAULT_INPUT: &str = "data.xlsx";

/// Default worksheet name
pub const DEFAULT_SHEET: &str = "1";

/// A loaded facility worksheet
pub struct FacilitySheet {
    sheet: RawSheet,
    file_name: String,
}

impl FacilitySheet {
    /// Open a spreadsheet and read the named worksheet
    pub fn open<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self> {
        let path = path.as_ref();
        let sheet = read_sheet(path, sheet_name)?;
        let file_name = path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_INPUT)
            .to_string();

        Ok(Self { sheet, file_name })
    }

    /// Wrap an already-read worksheet
    pub fn from_raw(sheet: RawSheet, file_name: impl Into<String>) -> Self {
        Self { sheet, file_name: file_name.into() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet.name
    }

    /// Number of non-blank records below the header
    pub fn record_count(&self) -> usize {
        self.sheet.records.len()
    }

    /// Normalized facility rows
    pub fn facility_rows(&self, columns: &ColumnSchema) -> Result<Vec<FacilityRow>> {
        extract_rows(&self.sheet, columns)
    }

    /// Build the sunburst hierarchy from the sheet
    pub fn build_hierarchy(&self, columns: &ColumnSchema) -> Result<Hierarchy> {
        let rows = self.facility_rows(columns)?;
        let hierarchy = build_hierarchy(&rows);
        info!(rows = rows.len(), nodes = hierarchy.len(), "transformed sheet");
        Ok(hierarchy)
    }

    /// Chart metadata with the default title and this file as the source
    pub fn default_meta(&self) -> ChartMeta {
        ChartMeta::for_source(&self.file_name)
    }
}

/// Print a summary of the sheet and the tree built from it
pub fn print_hierarchy_info(sheet: &FacilitySheet, hierarchy: &Hierarchy) {
    let stats = hierarchy.stats();

    println!("Facility Sheet Information");
    println!("==========================");
    println!("File: {}", sheet.file_name());
    println!("Sheet: {}", sheet.sheet_name());
    println!("Records: {}", sheet.record_count());
    println!("Nodes: {} (facilities: {})", stats.total_nodes, stats.leaf_nodes);
    println!("Categories: {}", stats.categories);
    println!("Max depth: {}", stats.max_depth);
}
