use super::{block, collection_names, collections};
use crate::client::models::{ComplianceCheck, ComplianceCondition, ComplianceRule};
use crate::schema::{ComplianceCheckSchema, ComplianceConditionSchema, ComplianceRuleSchema};

impl From<ComplianceRuleSchema> for ComplianceRule {
    fn from(s: ComplianceRuleSchema) -> Self {
        let condition = s.condition.unwrap_or_default();
        Self {
            name: s.name,
            collections: collections(s.collections),
            effect: s.effect,
            condition: ComplianceCondition {
                vulnerabilities: condition
                    .check
                    .into_iter()
                    .map(|c| ComplianceCheck {
                        id: c.id,
                        block: c.block,
                    })
                    .collect(),
            },
            block_message: s.block_message,
            disabled: s.disabled,
            notes: s.notes,
            verbose: s.verbose,
            show_passed_checks: s.show_passed_checks,
        }
    }
}

impl From<&ComplianceRule> for ComplianceRuleSchema {
    fn from(r: &ComplianceRule) -> Self {
        Self {
            name: r.name.clone(),
            collections: collection_names(&r.collections),
            effect: r.effect.clone(),
            block_message: r.block_message.clone(),
            disabled: r.disabled,
            notes: r.notes.clone(),
            verbose: r.verbose,
            show_passed_checks: r.show_passed_checks,
            condition: block(ComplianceConditionSchema {
                check: r
                    .condition
                    .vulnerabilities
                    .iter()
                    .map(|c| ComplianceCheckSchema {
                        id: c.id,
                        block: c.block,
                    })
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compliance_roundtrip() {
        let schema = ComplianceRuleSchema {
            name: "cis".to_string(),
            collections: vec!["All".to_string()],
            effect: "alert".to_string(),
            block_message: "blocked by policy".to_string(),
            verbose: true,
            show_passed_checks: true,
            condition: Some(ComplianceConditionSchema {
                check: vec![
                    ComplianceCheckSchema { id: 41, block: true },
                    ComplianceCheckSchema {
                        id: 51,
                        block: false,
                    },
                ],
            }),
            ..Default::default()
        };

        let rule = ComplianceRule::from(schema.clone());
        assert_eq!(rule.condition.vulnerabilities.len(), 2);
        assert_eq!(rule.collections[0].name, "All");
        assert_eq!(ComplianceRuleSchema::from(&rule), schema);
    }

    #[test]
    fn test_compliance_absent_condition_stays_absent() {
        let schema = ComplianceRuleSchema {
            name: "empty".to_string(),
            ..Default::default()
        };
        let rule = ComplianceRule::from(schema.clone());
        assert!(rule.condition.vulnerabilities.is_empty());
        assert_eq!(ComplianceRuleSchema::from(&rule).condition, None);
    }
}
