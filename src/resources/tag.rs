//! Tags, keyed by name
//!
//! The console creates a tag without its vulns; each vuln is attached with
//! its own call afterwards. A failure names the step, so a tag created
//! without some of its vulns is recognizable as such.

use async_trait::async_trait;
use log::debug;

use super::{Resource, find, found};
use crate::client::ComputeApi;
use crate::client::models::{Tag, TagVuln};
use crate::error::{Error, Result, TagPhase};
use crate::schema::TagSchema;

pub struct TagResource;

fn phase_error(tag: &str, phase: TagPhase, source: Error) -> Error {
    Error::TagPhase {
        tag: tag.to_string(),
        phase,
        source: Box::new(source),
    }
}

#[async_trait]
impl Resource for TagResource {
    type Schema = TagSchema;

    fn kind(&self) -> &'static str {
        "tag"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        Some(schema.name.clone())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let tag = Tag::from(schema.clone());
        let bare = Tag {
            vulns: Vec::new(),
            ..tag.clone()
        };

        client
            .create_tag(&bare)
            .await
            .map_err(|e| phase_error(&tag.name, TagPhase::Create, e))?;

        for vuln in &tag.vulns {
            debug!("Attaching {} to tag {}", vuln.id, tag.name);
            client.add_tag_vuln(&tag.name, vuln).await.map_err(|e| {
                phase_error(
                    &tag.name,
                    TagPhase::AttachVuln {
                        id: vuln.id.clone(),
                    },
                    e,
                )
            })?;
        }

        Ok(tag.name)
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let tags = client.list_tags().await?;
        let tag = found(find(tags, self.kind(), id, |t| t.name == id))?;
        Ok(tag.as_ref().map(TagSchema::from))
    }

    /// Update the tag's own fields, then bring its vulns in line: detach
    /// what is no longer declared, attach what is new.
    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        let tag = Tag::from(schema.clone());
        client.update_tag(id, &tag).await?;

        let current = find(client.list_tags().await?, self.kind(), &tag.name, |t| {
            t.name == tag.name
        })?;

        let stale: Vec<&TagVuln> = current
            .vulns
            .iter()
            .filter(|v| !tag.vulns.contains(v))
            .collect();
        for vuln in stale {
            debug!("Detaching {} from tag {}", vuln.id, tag.name);
            client.remove_tag_vuln(&tag.name, vuln).await?;
        }

        for vuln in tag.vulns.iter().filter(|v| !current.vulns.contains(v)) {
            debug!("Attaching {} to tag {}", vuln.id, tag.name);
            client.add_tag_vuln(&tag.name, vuln).await?;
        }

        Ok(())
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_tag(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockComputeClient;
    use crate::error::ApiError;
    use crate::schema::TagAssignmentSchema;

    fn assignment(id: &str) -> TagAssignmentSchema {
        TagAssignmentSchema {
            id: id.to_string(),
            package_name: "openssl".to_string(),
            resource_type: "image".to_string(),
            resources: vec!["*".to_string()],
            comment: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_without_assignments() {
        let mock = MockComputeClient::new();
        let schema = TagSchema {
            name: "x".to_string(),
            description: "d".to_string(),
            color: "c".to_string(),
            assignment: Vec::new(),
        };

        TagResource.create(&mock, &schema).await.unwrap();

        let tags = mock.tags().await;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "x");
        assert!(tags[0].vulns.is_empty());
        assert_eq!(mock.call_count("add_tag_vuln").await, 0);
    }

    #[tokio::test]
    async fn test_create_attaches_each_vuln() {
        let mock = MockComputeClient::new();
        let schema = TagSchema {
            name: "triaged".to_string(),
            assignment: vec![assignment("CVE-1"), assignment("CVE-2")],
            ..Default::default()
        };

        TagResource.create(&mock, &schema).await.unwrap();

        assert_eq!(
            mock.calls().await,
            vec!["create_tag", "add_tag_vuln", "add_tag_vuln"]
        );
        assert_eq!(
            TagResource.read(&mock, "triaged").await.unwrap(),
            Some(schema)
        );
    }

    #[tokio::test]
    async fn test_create_failure_names_create_phase() {
        let mock = MockComputeClient::new()
            .with_failure("create_tag", ApiError::Status { status: 400 })
            .await;
        let schema = TagSchema {
            name: "x".to_string(),
            ..Default::default()
        };

        let err = TagResource.create(&mock, &schema).await.unwrap_err();
        assert!(matches!(
            err,
            Error::TagPhase {
                phase: TagPhase::Create,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_attach_failure_names_vuln() {
        let mock = MockComputeClient::new()
            .with_failure("add_tag_vuln", ApiError::Status { status: 500 })
            .await;
        let schema = TagSchema {
            name: "x".to_string(),
            assignment: vec![assignment("CVE-9")],
            ..Default::default()
        };

        let err = TagResource.create(&mock, &schema).await.unwrap_err();
        match err {
            Error::TagPhase {
                phase: TagPhase::AttachVuln { id },
                ..
            } => assert_eq!(id, "CVE-9"),
            other => panic!("Expected AttachVuln, got {:?}", other),
        }
        // the tag itself exists
        assert_eq!(mock.tags().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_diffs_vulns() {
        let mock = MockComputeClient::new();
        let mut schema = TagSchema {
            name: "triaged".to_string(),
            assignment: vec![assignment("CVE-1"), assignment("CVE-2")],
            ..Default::default()
        };
        TagResource.create(&mock, &schema).await.unwrap();

        schema.description = "reviewed".to_string();
        schema.assignment = vec![assignment("CVE-2"), assignment("CVE-3")];
        TagResource.update(&mock, "triaged", &schema).await.unwrap();

        assert_eq!(mock.call_count("remove_tag_vuln").await, 1);
        assert_eq!(mock.call_count("add_tag_vuln").await, 3);

        let tag = &mock.tags().await[0];
        assert_eq!(tag.description, "reviewed");
        let ids: Vec<_> = tag.vulns.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["CVE-2", "CVE-3"]);
    }
}
