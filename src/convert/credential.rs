//! Credential conversions
//!
//! Secret fields are write-only. Going in, a schema string becomes a plain
//! [`Secret`]; coming back, only the plain half is shown, so a value the
//! console returns encrypted reads back empty and the resource layer
//! carries the configured value over.

use super::block;
use crate::client::models::{Credential, Secret, TemporaryToken};
use crate::schema::{CredentialSchema, TemporaryTokenSchema};

impl From<CredentialSchema> for Credential {
    fn from(s: CredentialSchema) -> Self {
        Self {
            id: s.name,
            kind: s.kind,
            description: s.description,
            account_id: s.account_id,
            account_guid: s.account_guid,
            secret: Secret::plain(s.secret),
            api_token: Secret::plain(s.api_token),
            role_arn: s.role_arn,
            use_aws_role: s.use_aws_role,
            use_sts_regional_endpoint: s.use_sts_regional_endpoint,
            ca_cert: s.ca_cert,
            tokens: s.temporary_token.map(|t| TemporaryToken {
                aws_access_key_id: t.aws_access_key_id,
                aws_secret_access_key: Secret::plain(t.aws_secret_access_key),
                duration: t.duration,
                token: Secret::plain(t.token),
            }),
            ..Default::default()
        }
    }
}

impl From<&Credential> for CredentialSchema {
    fn from(c: &Credential) -> Self {
        Self {
            name: c.id.clone(),
            kind: c.kind.clone(),
            description: c.description.clone(),
            account_id: c.account_id.clone(),
            account_guid: c.account_guid.clone(),
            secret: c.secret.plain.clone(),
            api_token: c.api_token.plain.clone(),
            role_arn: c.role_arn.clone(),
            use_aws_role: c.use_aws_role,
            use_sts_regional_endpoint: c.use_sts_regional_endpoint,
            ca_cert: c.ca_cert.clone(),
            temporary_token: c.tokens.as_ref().and_then(|t| {
                block(TemporaryTokenSchema {
                    aws_access_key_id: t.aws_access_key_id.clone(),
                    aws_secret_access_key: t.aws_secret_access_key.plain.clone(),
                    duration: t.duration,
                    token: t.token.plain.clone(),
                })
            }),
        }
    }
}
