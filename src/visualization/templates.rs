/// Page markup; `__TITLE__` and `/* __CHART_DATA__ */` are filled in
pub const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Stylesheet, written as-is
pub const STYLE_CSS: &str = include_str!("../../templates/style.css");

/// Chart script, written as-is
pub const SCRIPT_JS: &str = include_str!("../../templates/script.js");
