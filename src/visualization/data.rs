use serde::Serialize;
use crate::error::Result;
use crate::model::{Hierarchy, Node};

/// Default chart title
pub const DEFAULT_TITLE: &str = "의료 시설 분포 현황";

/// Title and subtitle shown above the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartMeta {
    pub title: String,
    pub subtitle: String,
}

impl ChartMeta {
    /// Default title with a subtitle naming the source file
    pub fn for_source(source_name: &str) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: format!("데이터 출처: {}", source_name),
        }
    }
}

/// Everything the page templates are filled with
#[derive(Debug, Clone)]
pub struct ChartPage<'a> {
    pub meta: ChartMeta,
    pub nodes: &'a [Node],
}

impl<'a> ChartPage<'a> {
    pub fn new(hierarchy: &'a Hierarchy, meta: ChartMeta) -> Self {
        Self { meta, nodes: hierarchy.nodes() }
    }

    pub fn nodes_json(&self) -> Result<String> {
        nodes_json(self.nodes)
    }

    pub fn meta_json(&self) -> Result<String> {
        Ok(script_safe(&serde_json::to_string(&self.meta)?))
    }
}

/// Node list as pretty-printed JSON, safe to embed in a script element
pub fn nodes_json(nodes: &[Node]) -> Result<String> {
    Ok(script_safe(&serde_json::to_string_pretty(nodes)?))
}

/// Keep embedded JSON from closing the surrounding script element
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
