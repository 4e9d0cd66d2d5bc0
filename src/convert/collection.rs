//! Collections are read-only here; they only convert outward for display.

use crate::client::models::Collection;
use crate::schema::CollectionSchema;

impl From<&Collection> for CollectionSchema {
    fn from(c: &Collection) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            color: c.color.clone(),
            account_ids: c.account_ids.clone(),
            app_ids: c.app_ids.clone(),
            clusters: c.clusters.clone(),
            code_repos: c.code_repos.clone(),
            containers: c.containers.clone(),
            functions: c.functions.clone(),
            hosts: c.hosts.clone(),
            images: c.images.clone(),
            labels: c.labels.clone(),
            namespaces: c.namespaces.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_drops_console_fields() {
        let collection = Collection {
            name: "prod".to_string(),
            images: vec!["registry.example.com/*".to_string()],
            namespaces: vec!["prod-*".to_string()],
            system: true,
            owner: "system".to_string(),
            modified: "2024-01-01T00:00:00Z".to_string(),
            ..Default::default()
        };
        let schema = CollectionSchema::from(&collection);
        assert_eq!(schema.name, "prod");
        assert_eq!(schema.namespaces, vec!["prod-*"]);
        let value = serde_json::to_value(&schema).unwrap();
        assert!(value.get("owner").is_none());
    }
}
