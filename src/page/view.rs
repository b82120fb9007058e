/// Render-ready snapshot of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Filtered list, in upstream order.
    pub rows: Vec<AnimalRow>,
    /// Number of rows shown.
    pub count: usize,
    pub filter: String,
    pub new_name: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Show "No animals yet." instead of the list.
    pub show_empty: bool,
    pub submit_label: &'static str,
    pub input_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRow {
    pub id: i64,
    pub name: String,
    pub added: String,
}
