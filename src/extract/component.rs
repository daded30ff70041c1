//! Component-scan adapter.
//!
//! The component scanner only enumerates defective components, so this
//! list is not the full scanned population; the clean remainder is
//! accounted for by the distribution classifier, not here.

use super::{count_field, issue::normalize_issues, str_field};
use crate::core::{AuditScore, Entity, EntityKind, UNKNOWN_LABEL};
use crate::scoring;
use serde_json::Value;

/// Map each component record to one `kind = component` entity.
pub fn extract(report: &Value) -> Vec<Entity> {
    report
        .get("components")
        .and_then(Value::as_array)
        .map(|components| components.iter().map(component_entity).collect())
        .unwrap_or_default()
}

fn component_entity(record: &Value) -> Entity {
    let label = str_field(record, "name").unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    let mut entity = Entity::new(label, EntityKind::Component);
    entity.issues = normalize_issues(record.get("issues"));
    entity.affected = affected_pages(record);
    entity.audits_passed = count_field(record, "auditsPassed");
    entity.audits_total = count_field(record, "auditsTotal");

    // Score precedence: verbatim, then per-check aggregates, then binary.
    if let Some(score) = record.get("auditScore").and_then(Value::as_f64) {
        entity.audit_score = AuditScore::from_f64(score);
    } else if let Some(aggregates) = record.get("checkAggregates").and_then(Value::as_object) {
        let outcome = scoring::aggregate_score(aggregates);
        entity.audit_score = outcome.score;
        entity.audits_passed = Some(outcome.audits_passed);
        entity.audits_total = Some(outcome.audits_total);
    } else {
        entity.audit_score = scoring::binary_score(&entity.issues);
    }
    entity
}

// Reuse data comes as `affectedUrls` (a set upstream) or `affected`
// (an array); both serialize to a JSON array of strings.
fn affected_pages(record: &Value) -> Option<Vec<String>> {
    let pages = record
        .get("affectedUrls")
        .or_else(|| record.get("affected"))?
        .as_array()?;
    Some(
        pages
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}
