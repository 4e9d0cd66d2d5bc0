//! Get and import command implementations

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ComputeApi;
use crate::error::{ApiError, Error, Result};
use crate::output::print_documents;
use crate::resources::{Document, Kind};

/// Read one resource; a resource that is gone is an error here.
pub async fn fetch<C: ComputeApi>(client: &C, kind: Kind, id: &str) -> Result<Document> {
    match kind.read(client, id).await? {
        Some(spec) => Ok(Document::new(kind, Some(id.to_string()), spec)),
        None => Err(Error::from(ApiError::NotFound(format!("{kind} {id}")))),
    }
}

pub async fn get(kind: Kind, id: &str, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let doc = fetch(&ctx.client, kind, id).await?;
    print_documents(&[doc], ctx.format)
}

pub async fn import(kind: Kind, raw: &str, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let (id, spec) = kind.import(&ctx.client, raw).await?;
    print_documents(&[Document::new(kind, Some(id), spec)], ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockComputeClient;
    use crate::client::models::Group;

    #[tokio::test]
    async fn test_fetch_found_and_missing() {
        let mock = MockComputeClient::new()
            .with_groups(vec![Group {
                group_name: "dev".to_string(),
                ..Default::default()
            }])
            .await;

        let doc = fetch(&mock, Kind::Group, "dev").await.unwrap();
        assert_eq!(doc.id.as_deref(), Some("dev"));
        assert_eq!(doc.spec["name"], "dev");

        let err = fetch(&mock, Kind::Group, "ops").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
