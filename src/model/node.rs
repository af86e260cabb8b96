use serde::Serialize;
use crate::model::LeafDetails;

/// Id of the synthetic root node
pub const ROOT_ID: &str = "root";

/// Display name of the synthetic root node
pub const ROOT_NAME: &str = "전체 시설";

/// Separator between path segments in node ids
pub const ID_SEPARATOR: char = '/';

/// Leaf metadata as the charting library reads it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafData {
    /// Sizing weight, always 1
    pub value: u32,
    pub description: String,
    pub nearby_facilities: String,
}

impl From<&LeafDetails> for LeafData {
    fn from(details: &LeafDetails) -> Self {
        Self {
            value: 1,
            description: details.description.clone(),
            nearby_facilities: details.nearby_facilities.clone(),
        }
    }
}

/// A node of the sunburst tree, stored with a parent reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Slash-joined ancestor chain, unique in the tree
    pub id: String,
    /// Id of the parent node ("" for the root)
    #[serde(rename = "parent")]
    pub parent_id: String,
    /// Display label (the raw path segment)
    pub name: String,
    /// Present only on leaf nodes
    #[serde(flatten)]
    pub leaf: Option<LeafData>,
    /// Number of path levels below the root (root = 0)
    #[serde(skip)]
    pub depth: usize,
}

impl Node {
    pub fn root() -> Self {
        Self {
            id: ROOT_ID.to_string(),
            parent_id: String::new(),
            name: ROOT_NAME.to_string(),
            leaf: None,
            depth: 0,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }
}
