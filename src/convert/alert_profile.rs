//! Alert profile conversions
//!
//! Every trigger category maps onto its own field; each category's rule list
//! is copied only into that category's trigger.

use super::block;
use crate::client::models::{AlertPolicy, AlertProfile, AlertTrigger, Webhook};
use crate::schema::{AlertPolicySchema, AlertProfileSchema, AlertTriggerSchema, WebhookSchema};

impl From<AlertTriggerSchema> for AlertTrigger {
    fn from(s: AlertTriggerSchema) -> Self {
        Self {
            enabled: s.enabled,
            all_rules: s.all_rules,
            rules: s.rules,
        }
    }
}

impl From<&AlertTrigger> for AlertTriggerSchema {
    fn from(t: &AlertTrigger) -> Self {
        Self {
            enabled: t.enabled,
            all_rules: t.all_rules,
            rules: t.rules.clone(),
        }
    }
}

/// Both directions of the category table, listed once.
macro_rules! alert_categories {
    ($($field:ident),+ $(,)?) => {
        impl From<AlertPolicySchema> for AlertPolicy {
            fn from(s: AlertPolicySchema) -> Self {
                Self {
                    $($field: s.$field.unwrap_or_default().into(),)+
                }
            }
        }

        impl From<&AlertPolicy> for AlertPolicySchema {
            fn from(p: &AlertPolicy) -> Self {
                Self {
                    $($field: block((&p.$field).into()),)+
                }
            }
        }
    };
}

alert_categories!(
    admission,
    agentless_app_firewall,
    app_embedded_app_firewall,
    app_embedded_runtime,
    cloud_discovery,
    code_repo_vulnerability,
    container_app_firewall,
    container_compliance,
    container_compliance_scan,
    container_runtime,
    container_vulnerability,
    defender,
    docker,
    host_app_firewall,
    host_compliance,
    host_runtime,
    host_vulnerability,
    image_compliance,
    image_vulnerability,
    incident,
    kubernetes_audit,
    network_firewall,
    serverless_app_firewall,
    serverless_runtime,
    waas_health,
);

impl From<WebhookSchema> for Webhook {
    fn from(s: WebhookSchema) -> Self {
        Self {
            enabled: s.enabled,
            url: s.url,
            custom_json: s.custom_json,
            credential_id: s.credential_id,
            ca_cert: s.ca_cert,
            skip_cert_verification: s.skip_cert_verification,
        }
    }
}

impl From<&Webhook> for WebhookSchema {
    fn from(w: &Webhook) -> Self {
        Self {
            enabled: w.enabled,
            url: w.url.clone(),
            custom_json: w.custom_json.clone(),
            credential_id: w.credential_id.clone(),
            ca_cert: w.ca_cert.clone(),
            skip_cert_verification: w.skip_cert_verification,
        }
    }
}

impl From<AlertProfileSchema> for AlertProfile {
    fn from(s: AlertProfileSchema) -> Self {
        Self {
            name: s.name,
            owner: String::new(),
            policy: s.policy.unwrap_or_default().into(),
            webhook: s.webhook.unwrap_or_default().into(),
        }
    }
}

impl From<&AlertProfile> for AlertProfileSchema {
    fn from(p: &AlertProfile) -> Self {
        Self {
            name: p.name.clone(),
            webhook: block((&p.webhook).into()),
            policy: block((&p.policy).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger(rules: &[&str]) -> Option<AlertTriggerSchema> {
        Some(AlertTriggerSchema {
            enabled: true,
            all_rules: false,
            rules: rules.iter().map(|r| r.to_string()).collect(),
        })
    }

    #[test]
    fn test_rule_lists_stay_in_their_category() {
        let schema = AlertProfileSchema {
            name: "ops".to_string(),
            policy: Some(AlertPolicySchema {
                admission: trigger(&["deny-privileged"]),
                docker: trigger(&["no-exec"]),
                host_runtime: trigger(&["ssh-watch", "cron-watch"]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = AlertProfile::from(schema.clone());
        assert_eq!(profile.policy.admission.rules, vec!["deny-privileged"]);
        assert_eq!(profile.policy.docker.rules, vec!["no-exec"]);
        assert_eq!(profile.policy.host_runtime.rules.len(), 2);
        assert!(profile.policy.container_runtime.rules.is_empty());

        assert_eq!(AlertProfileSchema::from(&profile), schema);
    }

    #[test]
    fn test_webhook_roundtrip() {
        let schema = AlertProfileSchema {
            name: "hooks".to_string(),
            webhook: Some(WebhookSchema {
                enabled: true,
                url: "https://hooks.example.com/pcc".to_string(),
                credential_id: "hook-cred".to_string(),
                ..Default::default()
            }),
            policy: None,
        };

        let profile = AlertProfile::from(schema.clone());
        assert_eq!(profile.webhook.url, "https://hooks.example.com/pcc");
        assert!(profile.owner.is_empty());
        assert_eq!(AlertProfileSchema::from(&profile), schema);
    }
}
