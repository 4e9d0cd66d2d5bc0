//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::resources::Document;

pub mod json;
pub mod table;

use table::{DocumentRow, format_table};

/// Render documents so that YAML and JSON output can be fed back to `apply`.
pub fn format_documents(docs: &[Document], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            let mut out = String::new();
            for (i, doc) in docs.iter().enumerate() {
                if i > 0 {
                    out.push_str("---\n");
                }
                out.push_str(&serde_yaml::to_string(doc)?);
            }
            Ok(out.trim_end().to_string())
        }
        OutputFormat::Json => Ok(match docs {
            [doc] => serde_json::to_string_pretty(doc)?,
            _ => serde_json::to_string_pretty(docs)?,
        }),
        OutputFormat::Table => {
            let rows: Vec<DocumentRow> = docs.iter().map(DocumentRow::from).collect();
            Ok(format_table(&rows))
        }
    }
}

/// Format and print documents to stdout
pub fn print_documents(docs: &[Document], format: OutputFormat) -> Result<()> {
    println!("{}", format_documents(docs, format)?);
    Ok(())
}
