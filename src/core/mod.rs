//! Canonical data model for normalized scan results.
//!
//! Every renderer consumes these types, so the serialized field names are
//! load-bearing: they stay camelCase (`auditScore`, `issuePoints`, ...)
//! regardless of which input shape produced them.

pub mod score;

pub use score::AuditScore;

use serde::{Deserialize, Serialize};

/// Sentinel label for records that carry no usable label of their own.
pub const UNKNOWN_LABEL: &str = "unknown";

/// What kind of thing an entity describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Component,
    File,
    Page,
}

/// One accessibility defect reported by a rule check.
///
/// `weight` is attached during assembly, never by the producer. `entity`
/// and `audit_score` are only present on the flattened copies in
/// [`NormalizedResult::issues`], where renderers need to know which
/// entity owns each issue without walking the entity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub check: String,
    pub message: String,
    pub file: String,
    /// 1-based; degraded records default to line 1.
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_score: Option<AuditScore>,
}

impl Issue {
    /// A fully-degraded issue with every field at its documented default.
    pub fn unknown() -> Self {
        Self {
            check: UNKNOWN_LABEL.to_string(),
            message: UNKNOWN_LABEL.to_string(),
            file: UNKNOWN_LABEL.to_string(),
            line: 1,
            element: None,
            weight: None,
            entity: None,
            audit_score: None,
        }
    }
}

/// Cross-entity prioritization metric: severity mass times reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePoints {
    /// Sum of per-issue weights, duplicates counted.
    pub base_points: u32,
    /// `max(1, |affected|)` - entities with no reuse data count once.
    pub usage_count: u32,
    /// `base_points * usage_count`, the primary sort key.
    pub total_points: u32,
}

/// One audited unit: a component, the scanned file set, or a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub label: String,
    pub kind: EntityKind,
    pub audit_score: AuditScore,
    pub issues: Vec<Issue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audits_passed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audits_total: Option<u32>,
    /// Pages/routes that reference this entity (component-reuse shape only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_points: Option<IssuePoints>,
}

impl Entity {
    pub fn new(label: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            label: label.into(),
            kind,
            audit_score: AuditScore::new(100),
            issues: Vec::new(),
            audits_passed: None,
            audits_total: None,
            affected: None,
            issue_points: None,
        }
    }

    /// Number of times this entity is used across pages, minimum 1.
    pub fn usage_count(&self) -> u32 {
        match &self.affected {
            Some(pages) => (pages.len() as u32).max(1),
            None => 1,
        }
    }
}

/// Passing/warning/failing counts over a set of entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub passing: u64,
    pub warning: u64,
    pub failing: u64,
}

impl Distribution {
    pub fn total(&self) -> u64 {
        self.passing + self.warning + self.failing
    }
}

/// The single output shape every renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    /// Rule-set depth of the scan (e.g. basic/material/full), passed through.
    pub tier: String,
    /// Scanned unit count for the shape; may exceed `entities.len()` for
    /// component scans, where clean components are never listed.
    pub total: u64,
    pub distribution: Distribution,
    /// Sorted by `issue_points.total_points` descending, ties stable.
    pub entities: Vec<Entity>,
    /// Every entity's issues flattened, sorted by `weight` descending,
    /// ties stable, each tagged with its owning entity and score.
    pub issues: Vec<Issue>,
}

impl NormalizedResult {
    /// Zeroed result for input the engine does not recognize.
    pub fn empty(tier: impl Into<String>) -> Self {
        Self {
            tier: tier.into(),
            total: 0,
            distribution: Distribution::default(),
            entities: Vec::new(),
            issues: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn usage_count_floors_at_one() {
        let mut entity = Entity::new("app-banner", EntityKind::Component);
        assert_eq!(entity.usage_count(), 1);

        entity.affected = Some(vec![]);
        assert_eq!(entity.usage_count(), 1);

        entity.affected = Some(vec!["/".into(), "/about".into()]);
        assert_eq!(entity.usage_count(), 2);
    }

    #[test]
    fn issue_serializes_with_camel_case_field_names() {
        let issue = Issue {
            weight: Some(9),
            audit_score: Some(AuditScore::new(40)),
            entity: Some("app-banner".into()),
            ..Issue::unknown()
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["auditScore"], serde_json::json!(40));
        assert_eq!(json["weight"], serde_json::json!(9));
        assert!(json.get("element").is_none());
    }

    #[test]
    fn entity_omits_absent_optional_fields() {
        let json = serde_json::to_value(Entity::new("/", EntityKind::Page)).unwrap();
        assert_eq!(json["auditScore"], serde_json::json!(100));
        assert!(json.get("affected").is_none());
        assert!(json.get("issuePoints").is_none());
        assert!(json.get("auditsPassed").is_none());
    }

    #[test]
    fn distribution_total_sums_bands() {
        let dist = Distribution {
            passing: 3,
            warning: 2,
            failing: 1,
        };
        assert_eq!(dist.total(), 6);
    }
}
