use super::{map_from, map_into};
use crate::client::models::{Tag, TagVuln};
use crate::schema::{TagAssignmentSchema, TagSchema};

impl From<TagAssignmentSchema> for TagVuln {
    fn from(s: TagAssignmentSchema) -> Self {
        Self {
            id: s.id,
            package_name: s.package_name,
            resource_type: s.resource_type,
            resources: s.resources,
            comment: s.comment,
        }
    }
}

impl From<&TagVuln> for TagAssignmentSchema {
    fn from(v: &TagVuln) -> Self {
        Self {
            id: v.id.clone(),
            package_name: v.package_name.clone(),
            resource_type: v.resource_type.clone(),
            resources: v.resources.clone(),
            comment: v.comment.clone(),
        }
    }
}

impl From<TagSchema> for Tag {
    fn from(s: TagSchema) -> Self {
        Self {
            name: s.name,
            description: s.description,
            color: s.color,
            vulns: map_into(s.assignment),
        }
    }
}

impl From<&Tag> for TagSchema {
    fn from(t: &Tag) -> Self {
        Self {
            name: t.name.clone(),
            description: t.description.clone(),
            color: t.color.clone(),
            assignment: map_from(&t.vulns),
        }
    }
}
