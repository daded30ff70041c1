//! Final result assembly.
//!
//! `normalize` is the single entry point renderers build on: shape
//! detection, adapter extraction, score resolution, classification,
//! prioritization, and flattening, in one synchronous pass. It is total
//! over arbitrary JSON input - malformed reports degrade, they never
//! panic - and allocates fresh output on every call.

use crate::core::{Distribution, Entity, Issue, NormalizedResult, UNKNOWN_LABEL};
use crate::extract::{self, ReportKind};
use crate::priority::{self, distribution, WeightCache};
use serde_json::Value;

/// Normalize one raw analyzer report into the canonical result shape.
///
/// Entities come back sorted by `issuePoints.totalPoints` descending and
/// the flattened issue list by `weight` descending; both sorts are
/// stable, so ties keep their input order.
pub fn normalize(report: &Value, cache: &WeightCache) -> NormalizedResult {
    let tier = extract::str_field(report, "tier").unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    let kind = extract::detect_kind(report);
    if kind == ReportKind::Unrecognized {
        log::warn!("unrecognized report shape; emitting empty result");
        return NormalizedResult::empty(tier);
    }

    let mut entities = extract::extract_entities(report, kind);
    for entity in &mut entities {
        for issue in &mut entity.issues {
            issue.weight = Some(cache.weight(&issue.check));
        }
        let points = priority::issue_points(entity, cache);
        entity.issue_points = Some(points);
    }

    let total = total_for(report, kind, &entities);
    let distribution = match kind {
        ReportKind::Component => distribution::component_distribution(total, &entities),
        ReportKind::File | ReportKind::Page => distribution::supplied(report)
            .unwrap_or_else(|| distribution::from_entities(&entities)),
        ReportKind::Unrecognized => Distribution::default(),
    };

    entities.sort_by(|a, b| total_points(b).cmp(&total_points(a)));
    let issues = flatten_issues(&entities);

    NormalizedResult {
        tier,
        total,
        distribution,
        entities,
        issues,
    }
}

/// Scanned unit count for the shape. For component scans this is the
/// scanned population, not the (defective-only) listed count.
fn total_for(report: &Value, kind: ReportKind, entities: &[Entity]) -> u64 {
    let listed = entities.len() as u64;
    match kind {
        ReportKind::Component => extract::count_field(report, "totalComponentsScanned")
            .map(u64::from)
            .unwrap_or(listed),
        ReportKind::Page => extract::count_field(report, "urlCount")
            .or_else(|| extract::count_field(report, "routeCount"))
            .map(u64::from)
            .unwrap_or(listed),
        ReportKind::File => 1,
        ReportKind::Unrecognized => 0,
    }
}

fn total_points(entity: &Entity) -> u32 {
    entity
        .issue_points
        .map(|points| points.total_points)
        .unwrap_or(0)
}

// Flattening happens after the entity sort, so weight ties in the flat
// list follow the prioritized entity order.
fn flatten_issues(entities: &[Entity]) -> Vec<Issue> {
    let mut issues: Vec<Issue> = entities
        .iter()
        .flat_map(|entity| {
            entity.issues.iter().map(|issue| Issue {
                entity: Some(entity.label.clone()),
                audit_score: Some(entity.audit_score),
                ..issue.clone()
            })
        })
        .collect();
    issues.sort_by(|a, b| b.weight.unwrap_or(0).cmp(&a.weight.unwrap_or(0)));
    issues
}
