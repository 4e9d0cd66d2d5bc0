//! Kinds command implementation

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::resources::Kind;

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "KIND")]
    kind: &'static str,
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "READ-ONLY")]
    read_only: bool,
}

fn rows() -> Vec<KindRow> {
    Kind::all()
        .iter()
        .map(|k| KindRow {
            kind: k.name(),
            id: k.id_hint(),
            read_only: k.is_read_only(),
        })
        .collect()
}

/// List every supported kind and what its id is.
pub fn run(format: OutputFormat) -> Result<()> {
    let rows = rows();
    match format {
        OutputFormat::Json => println!("{}", format_json(&rows)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&rows)?),
        OutputFormat::Table => println!("{}", format_table(&rows)),
    }
    Ok(())
}
