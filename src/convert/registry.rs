use super::{map_from, map_into};
use crate::client::models::{RegistrySettings, RegistrySpecification};
use crate::schema::{RegistrySettingsSchema, RegistrySpecificationSchema};

impl From<RegistrySpecificationSchema> for RegistrySpecification {
    fn from(s: RegistrySpecificationSchema) -> Self {
        Self {
            version: s.version,
            registry: s.registry,
            repository: s.repository,
            tag: s.tag,
            os: s.os,
            cap: s.cap,
            scanners: s.scanners,
            credential_id: s.credential_id,
            excluded_repositories: s.excluded_repositories,
            excluded_tags: s.excluded_tags,
            collections: s.collections,
            version_pattern: s.version_pattern,
            use_aws_role: s.use_aws_role,
        }
    }
}

impl From<&RegistrySpecification> for RegistrySpecificationSchema {
    fn from(r: &RegistrySpecification) -> Self {
        Self {
            version: r.version.clone(),
            registry: r.registry.clone(),
            repository: r.repository.clone(),
            tag: r.tag.clone(),
            os: r.os.clone(),
            cap: r.cap,
            scanners: r.scanners,
            credential_id: r.credential_id.clone(),
            excluded_repositories: r.excluded_repositories.clone(),
            excluded_tags: r.excluded_tags.clone(),
            collections: r.collections.clone(),
            version_pattern: r.version_pattern.clone(),
            use_aws_role: r.use_aws_role,
        }
    }
}

impl From<RegistrySettingsSchema> for RegistrySettings {
    fn from(s: RegistrySettingsSchema) -> Self {
        Self {
            specifications: map_into(s.specification),
        }
    }
}

impl From<&RegistrySettings> for RegistrySettingsSchema {
    fn from(r: &RegistrySettings) -> Self {
        Self {
            specification: map_from(&r.specifications),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_roundtrip_keeps_order() {
        let schema = RegistrySettingsSchema {
            specification: vec![
                RegistrySpecificationSchema {
                    version: "aws".to_string(),
                    registry: "123.dkr.ecr.us-east-1.amazonaws.com".to_string(),
                    repository: "app/*".to_string(),
                    os: "linux".to_string(),
                    cap: 5,
                    scanners: 2,
                    credential_id: "aws-prod".to_string(),
                    collections: vec!["All".to_string()],
                    ..Default::default()
                },
                RegistrySpecificationSchema {
                    version: "2".to_string(),
                    registry: "registry.example.com".to_string(),
                    excluded_tags: vec!["*-rc".to_string()],
                    ..Default::default()
                },
            ],
        };
        let settings = RegistrySettings::from(schema.clone());
        assert_eq!(settings.specifications[1].registry, "registry.example.com");
        assert_eq!(RegistrySettingsSchema::from(&settings), schema);
    }
}
