/// Descriptive data carried only by leaf (full-depth) nodes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafDetails {
    /// Free-text description of the facility
    pub description: String,
    /// Free-text list of facilities nearby
    pub nearby_facilities: String,
}

/// One facility record, normalized: missing cells are empty strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacilityRow {
    /// Path levels in schema order (category, region 1, region 2, name)
    pub path: Vec<String>,
    /// Auxiliary fields attached to the leaf node
    pub details: LeafDetails,
}

impl FacilityRow {
    pub fn new<I, S>(path: I, description: &str, nearby_facilities: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            details: LeafDetails {
                description: description.to_string(),
                nearby_facilities: nearby_facilities.to_string(),
            },
        }
    }
}
