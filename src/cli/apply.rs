//! Apply command implementation

use std::io::Read;

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ComputeApi;
use crate::error::Result;
use crate::output::print_documents;
use crate::resources::Document;

/// Read a document file, `-` meaning stdin.
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

/// Apply documents in file order; the first failure stops the run.
pub async fn apply_all<C: ComputeApi>(client: &C, docs: Vec<Document>) -> Result<Vec<Document>> {
    let mut applied = Vec::with_capacity(docs.len());
    for doc in docs {
        debug!("Applying {} {}", doc.kind, doc.id.as_deref().unwrap_or("(new)"));
        let (id, spec) = doc.kind.apply(client, doc.id.as_deref(), &doc.spec).await?;
        applied.push(Document::new(doc.kind, Some(id), spec));
    }
    Ok(applied)
}

pub async fn run(file: &str, opts: &GlobalOptions) -> Result<()> {
    // Parse before logging in so a bad file fails fast.
    let docs = Document::parse_all(&read_input(file)?)?;
    let ctx = CommandContext::new(opts).await?;

    let applied = apply_all(&ctx.client, docs).await?;
    print_documents(&applied, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockComputeClient;
    use crate::resources::Kind;

    #[tokio::test]
    async fn test_apply_all_returns_refreshed_documents_with_ids() {
        let mock = MockComputeClient::new();
        let docs = Document::parse_all(
            r#"
kind: tag
spec:
  name: ops
---
kind: custom_rule
spec:
  name: curl
  type: processes
"#,
        )
        .unwrap();

        let applied = apply_all(&mock, docs).await.unwrap();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].kind, Kind::Tag);
        assert_eq!(applied[0].id.as_deref(), Some("ops"));
        assert_eq!(applied[1].id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_apply_all_stops_at_first_failure() {
        let mock = MockComputeClient::new();
        let docs = vec![
            Document::new(Kind::Collection, None, serde_json::json!({"name": "All"})),
            Document::new(Kind::Tag, None, serde_json::json!({"name": "ops"})),
        ];

        assert!(apply_all(&mock, docs).await.is_err());
        assert!(mock.tags().await.is_empty());
    }
}
