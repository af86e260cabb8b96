use tracing::{debug, warn};
use crate::model::{FacilityRow, Hierarchy, LeafData, ID_SEPARATOR, ROOT_ID};

/// Build the sunburst tree from facility rows in a single pass
pub fn build_hierarchy<'a, I>(rows: I) -> Hierarchy
where
    I: IntoIterator<Item = &'a FacilityRow>,
{
    let hierarchy = rows.into_iter().fold(Hierarchy::new(), fold_row);
    debug!(nodes = hierarchy.len(), "built facility hierarchy");
    hierarchy
}

/// Fold one row into the hierarchy.
///
/// Empty path levels are skipped without advancing the id chain, so a row
/// missing a middle level nests directly under the levels that are present.
/// Only a row whose last path level is non-empty carries leaf metadata; a
/// repeated full path overwrites the metadata of the existing leaf.
pub fn fold_row(mut hierarchy: Hierarchy, row: &FacilityRow) -> Hierarchy {
    let last = row.path.len().saturating_sub(1);
    let mut parent_id = ROOT_ID.to_string();
    let mut depth = 0;

    for (i, name) in row.path.iter().enumerate() {
        if name.is_empty() {
            continue;
        }
        depth += 1;

        let id = format!("{}{}{}", parent_id, ID_SEPARATOR, name);
        hierarchy.insert_branch(id.clone(), &parent_id, name, depth);

        if i == last {
            let leaf = LeafData::from(&row.details);
            if let Some(previous) = hierarchy.set_leaf(&id, leaf.clone()) {
                if previous != leaf {
                    warn!(id = %id, "duplicate facility path, keeping the later row's details");
                }
            }
        }

        parent_id = id;
    }

    hierarchy
}

/// Summary numbers for a built hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyStats {
    pub total_nodes: usize,
    pub leaf_nodes: usize,
    /// Direct children of the root
    pub categories: usize,
    pub max_depth: usize,
}

impl Hierarchy {
    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            total_nodes: self.len(),
            leaf_nodes: self.nodes().iter().filter(|n| n.is_leaf()).count(),
            categories: self.children(ROOT_ID).count(),
            max_depth: self.nodes().iter().map(|n| n.depth).max().unwrap_or(0),
        }
    }
}
