//! File-scan adapter.
//!
//! A file scan audits a set of template/style files as one unit, so the
//! whole report collapses into a single entity under a fixed label.

use super::issue::normalize_issues;
use crate::core::{AuditScore, Entity, EntityKind};
use crate::scoring;
use serde_json::Value;

/// Label used for the single entity representing the scanned file set.
pub const FILE_SCAN_LABEL: &str = "scanned files";

/// Produce the single `kind = file` entity for a file-scan report.
pub fn extract(report: &Value) -> Vec<Entity> {
    let summary = report.get("summary");
    let mut entity = Entity::new(FILE_SCAN_LABEL, EntityKind::File);
    entity.issues = normalize_issues(summary.and_then(|summary| summary.get("issues")));
    entity.audit_score = match summary.and_then(|s| s.get("auditScore")).and_then(Value::as_f64) {
        Some(score) => AuditScore::from_f64(score),
        None => scoring::binary_score(&entity.issues),
    };
    vec![entity]
}
