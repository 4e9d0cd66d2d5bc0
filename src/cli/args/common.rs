//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// YAML documents, one per `---` section (default)
    #[default]
    Yaml,
    /// JSON - a single object, or an array for several documents
    Json,
    /// Table - one summary row per document
    Table,
}
