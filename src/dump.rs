//! Human-readable dump of the facility hierarchy for debugging input sheets.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::model::{Hierarchy, Node, ROOT_ID};
use crate::visualization::nodes_json;

/// Options for controlling what gets dumped
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Emit the node JSON as embedded in the page instead of a text tree
    pub json: bool,
}

/// Dump the hierarchy to a file
pub fn dump_to_file(hierarchy: &Hierarchy, output_path: &Path, options: &DumpOptions) -> Result<()> {
    let content = dump(hierarchy, options)?;
    let mut file = File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Dump in the form selected by `options`
pub fn dump(hierarchy: &Hierarchy, options: &DumpOptions) -> Result<String> {
    if options.json {
        dump_json(hierarchy)
    } else {
        Ok(dump_to_string(hierarchy))
    }
}

/// Node list exactly as it is embedded in index.html
pub fn dump_json(hierarchy: &Hierarchy) -> Result<String> {
    let mut json = nodes_json(hierarchy.nodes())?;
    json.push('\n');
    Ok(json)
}

/// Indented text tree, two spaces per level
pub fn dump_to_string(hierarchy: &Hierarchy) -> String {
    let mut out = String::new();
    let stats = hierarchy.stats();

    writeln!(out, "================================================================================").unwrap();
    writeln!(out, "Facility Hierarchy Dump").unwrap();
    writeln!(out, "================================================================================").unwrap();
    writeln!(out, "Nodes:        {}", stats.total_nodes).unwrap();
    writeln!(out, "Facilities:   {}", stats.leaf_nodes).unwrap();
    writeln!(out, "Categories:   {}", stats.categories).unwrap();
    writeln!(out, "Max depth:    {}", stats.max_depth).unwrap();
    writeln!(out, "--------------------------------------------------------------------------------").unwrap();

    let mut children: HashMap<&str, Vec<&Node>> = HashMap::new();
    for node in hierarchy.nodes().iter().filter(|n| !n.is_root()) {
        children.entry(node.parent_id.as_str()).or_default().push(node);
    }

    if let Some(root) = hierarchy.get(ROOT_ID) {
        dump_node(&mut out, &children, root);
    }

    out
}

fn dump_node(out: &mut String, children: &HashMap<&str, Vec<&Node>>, node: &Node) {
    let indent = "  ".repeat(node.depth);

    match &node.leaf {
        Some(leaf) => {
            writeln!(out, "{}- {}", indent, node.name).unwrap();
            if !leaf.description.is_empty() {
                writeln!(out, "{}    description: {}", indent, leaf.description).unwrap();
            }
            if !leaf.nearby_facilities.is_empty() {
                writeln!(out, "{}    nearby: {}", indent, leaf.nearby_facilities).unwrap();
            }
        }
        None => {
            writeln!(out, "{}{} [{}]", indent, node.name, node.id).unwrap();
        }
    }

    for child in children.get(node.id.as_str()).into_iter().flatten() {
        dump_node(out, children, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::build_hierarchy;
    use crate::model::FacilityRow;

    fn hierarchy() -> Hierarchy {
        let rows = vec![
            FacilityRow::new(["병원", "서울", "강남", "A의원"], "d1", "n1"),
            FacilityRow::new(["병원", "서울", "강남", "B의원"], "", ""),
        ];
        build_hierarchy(&rows)
    }

    #[test]
    fn test_text_tree() {
        let text = dump_to_string(&hierarchy());
        let tree: Vec<_> = text.lines().skip_while(|l| !l.starts_with("----")).skip(1).collect();

        assert_eq!(
            tree,
            vec![
                "전체 시설 [root]",
                "  병원 [root/병원]",
                "    서울 [root/병원/서울]",
                "      강남 [root/병원/서울/강남]",
                "        - A의원",
                "            description: d1",
                "            nearby: n1",
                "        - B의원",
            ]
        );
        assert!(text.contains("Facilities:   2"));
    }

    #[test]
    fn test_text_tree_keeps_sibling_order() {
        let rows = vec![
            FacilityRow::new(["B", "", "", "x"], "", ""),
            FacilityRow::new(["A", "", "", "y"], "", ""),
            FacilityRow::new(["B", "", "", "z"], "", ""),
        ];
        let text = dump_to_string(&build_hierarchy(&rows));
        let tree: Vec<_> = text.lines().skip_while(|l| !l.starts_with("----")).skip(1).collect();

        assert_eq!(
            tree,
            vec!["전체 시설 [root]", "  B [root/B]", "    - x", "    - z", "  A [root/A]", "    - y"]
        );
    }

    #[test]
    fn test_json_dump_round_trips_nodes() {
        let hierarchy = hierarchy();
        let json = dump(&hierarchy, &DumpOptions { json: true }).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 6);
        assert_eq!(parsed[0]["parent"], "");
        assert_eq!(parsed[4]["value"], 1);
        assert!(parsed[3].get("value").is_none());
    }
}
