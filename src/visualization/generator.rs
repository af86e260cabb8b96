use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::visualization::data::ChartPage;
use crate::visualization::templates::{INDEX_HTML, SCRIPT_JS, STYLE_CSS};

pub const INDEX_FILE: &str = "index.html";
pub const STYLE_FILE: &str = "style.css";
pub const SCRIPT_FILE: &str = "script.js";

/// Render index.html with the chart data embedded
pub fn render_index(page: &ChartPage) -> Result<String> {
    let data_block = format!(
        "window.chartData = {};\n        window.chartMeta = {};",
        page.nodes_json()?,
        page.meta_json()?
    );

    Ok(INDEX_HTML
        .replace("__TITLE__", &escape_html(&page.meta.title))
        .replace("/* __CHART_DATA__ */", &data_block))
}

/// Write index.html, style.css and script.js into `out_dir`.
///
/// Everything is rendered before the first file is written.
pub fn generate_page(page: &ChartPage, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let files = [
        (INDEX_FILE, render_index(page)?),
        (STYLE_FILE, STYLE_CSS.to_string()),
        (SCRIPT_FILE, SCRIPT_JS.to_string()),
    ];

    std::fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = out_dir.join(name);
        std::fs::write(&path, content)?;
        written.push(path);
    }
    Ok(written)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::build_hierarchy;
    use crate::model::FacilityRow;
    use crate::visualization::data::ChartMeta;

    #[test]
    fn test_render_index() {
        let rows = vec![FacilityRow::new(["병원", "서울", "강남", "A의원"], "d1", "n1")];
        let hierarchy = build_hierarchy(&rows);
        let meta = ChartMeta {
            title: "A & <B>".to_string(),
            subtitle: "sub".to_string(),
        };
        let html = render_index(&ChartPage::new(&hierarchy, meta)).unwrap();

        assert!(html.contains("<title>A &amp; &lt;B&gt;</title>"));
        assert!(html.contains("window.chartData = ["));
        assert!(html.contains("\"id\": \"root/병원/서울/강남/A의원\""));
        assert!(html.contains("window.chartMeta = {\"title\":\"A & <B>\",\"subtitle\":\"sub\"};"));
        assert!(html.contains("href=\"style.css\""));
        assert!(html.contains("src=\"script.js\""));
        assert!(!html.contains("__CHART_DATA__"));
        assert!(!html.contains("__TITLE__"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("\"a\" & b"), "&quot;a&quot; &amp; b");
    }
}
