//! Table output formatting

use serde_json::Value;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::resources::Document;

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// One document as a summary row
#[derive(Debug, Tabled)]
pub struct DocumentRow {
    #[tabled(rename = "KIND")]
    pub kind: String,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "FIELDS")]
    pub fields: usize,
}

impl From<&Document> for DocumentRow {
    fn from(doc: &Document) -> Self {
        let name = ["name", "username", "credential_id"]
            .iter()
            .find_map(|key| doc.spec.get(*key).and_then(Value::as_str))
            .unwrap_or("--")
            .to_string();
        let fields = doc.spec.as_object().map_or(0, |m| m.len());

        Self {
            kind: doc.kind.to_string(),
            id: doc.id.clone().unwrap_or_else(|| "--".to_string()),
            name,
            fields,
        }
    }
}
