use crate::client::models::{CustomCompliance, CustomRule};
use crate::schema::{CustomComplianceSchema, CustomRuleSchema};

impl From<CustomRuleSchema> for CustomRule {
    fn from(s: CustomRuleSchema) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            message: s.message,
            kind: s.kind,
            script: s.script,
            ..Default::default()
        }
    }
}

impl From<&CustomRule> for CustomRuleSchema {
    fn from(r: &CustomRule) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            description: r.description.clone(),
            message: r.message.clone(),
            kind: r.kind.clone(),
            script: r.script.clone(),
        }
    }
}

impl From<CustomComplianceSchema> for CustomCompliance {
    fn from(s: CustomComplianceSchema) -> Self {
        Self {
            id: s.id,
            name: s.name,
            title: s.title,
            script: s.script,
            severity: s.severity,
            ..Default::default()
        }
    }
}

impl From<&CustomCompliance> for CustomComplianceSchema {
    fn from(c: &CustomCompliance) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            title: c.title.clone(),
            script: c.script.clone(),
            severity: c.severity.clone(),
        }
    }
}
