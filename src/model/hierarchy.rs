use std::collections::HashMap;
use crate::model::{LeafData, Node, ROOT_ID};

/// Flat, ordered node list forming a tree through parent references.
///
/// Nodes are kept in insertion order; `index` maps every emitted id to its
/// position and doubles as the membership set for duplicate checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    /// A hierarchy holding only the synthetic root
    pub fn new() -> Self {
        let mut index = HashMap::new();
        index.insert(ROOT_ID.to_string(), 0);
        Self { nodes: vec![Node::root()], index }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is present from construction
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Children of `id` in insertion order
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes.iter().filter(move |n| n.parent_id == id)
    }

    /// Append a branch node unless `id` already exists.
    /// Returns true if the node was created.
    pub(crate) fn insert_branch(&mut self, id: String, parent_id: &str, name: &str, depth: usize) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node {
            id,
            parent_id: parent_id.to_string(),
            name: name.to_string(),
            leaf: None,
            depth,
        });
        true
    }

    /// Set leaf metadata on an existing node, returning what it replaced
    pub(crate) fn set_leaf(&mut self, id: &str, leaf: LeafData) -> Option<LeafData> {
        let &i = self.index.get(id)?;
        self.nodes[i].leaf.replace(leaf)
    }
}
