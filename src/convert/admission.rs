use crate::client::models::AdmissionRule;
use crate::schema::AdmissionRuleSchema;

impl From<AdmissionRuleSchema> for AdmissionRule {
    fn from(s: AdmissionRuleSchema) -> Self {
        Self {
            name: s.name,
            description: s.description,
            disabled: s.disabled,
            effect: s.effect,
            script: s.script,
        }
    }
}

impl From<&AdmissionRule> for AdmissionRuleSchema {
    fn from(r: &AdmissionRule) -> Self {
        Self {
            name: r.name.clone(),
            description: r.description.clone(),
            disabled: r.disabled,
            effect: r.effect.clone(),
            script: r.script.clone(),
        }
    }
}
