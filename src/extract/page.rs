//! Page adapter, covering both sitemap (`urls`) and route-list
//! (`routes`) reports. One entity per page record; sitemap `urls` wins
//! when both collections are somehow present, since the route list is
//! its own top-level shape.

use super::{count_field, issue::normalize_issues, str_field};
use crate::core::{AuditScore, Entity, EntityKind, UNKNOWN_LABEL};
use crate::scoring;
use serde_json::Value;

/// Map each page/route record to one `kind = page` entity.
pub fn extract(report: &Value) -> Vec<Entity> {
    page_records(report)
        .map(|records| records.iter().map(page_entity).collect())
        .unwrap_or_default()
}

fn page_records(report: &Value) -> Option<&Vec<Value>> {
    report
        .get("urls")
        .and_then(Value::as_array)
        .or_else(|| report.get("routes").and_then(Value::as_array))
}

fn page_entity(record: &Value) -> Entity {
    // Label fallback order: path, then url, then the sentinel.
    let label = str_field(record, "path")
        .or_else(|| str_field(record, "url"))
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    let mut entity = Entity::new(label, EntityKind::Page);
    entity.issues = normalize_issues(record.get("issues"));
    entity.audits_passed = count_field(record, "auditsPassed");
    entity.audits_total = count_field(record, "auditsTotal");
    entity.audit_score = match record.get("auditScore").and_then(Value::as_f64) {
        Some(score) => AuditScore::from_f64(score),
        None => scoring::binary_score(&entity.issues),
    };
    entity
}
