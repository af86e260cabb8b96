/// Fallback used when the sheet has no description column at all
pub const DEFAULT_DESCRIPTION: &str = "상세 설명 없음";

/// Header names of the columns the loader reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Path columns, outermost level first
    pub path: Vec<String>,
    pub nearby_facilities: String,
    pub description: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            path: ["카테고리", "시", "군", "이름"].iter().map(|s| s.to_string()).collect(),
            nearby_facilities: "인근시설".to_string(),
            description: "설명".to_string(),
        }
    }
}
