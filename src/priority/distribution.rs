//! Passing/warning/failing classification.
//!
//! Thresholds are fixed: 90 and above passes, 50-89 warns, below 50
//! fails. Component scans additionally fold in the clean remainder of
//! the scanned population (see [`component_distribution`]).

use crate::core::{AuditScore, Distribution, Entity};
use serde_json::Value;

/// Scores at or above this pass.
pub const PASSING_THRESHOLD: u32 = 90;
/// Scores at or above this (but below passing) warn; below fails.
pub const WARNING_THRESHOLD: u32 = 50;

/// Classification band for one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Passing,
    Warning,
    Failing,
}

/// Classify a single score by the fixed thresholds.
pub fn classify(score: AuditScore) -> Band {
    if score.value() >= PASSING_THRESHOLD {
        Band::Passing
    } else if score.value() >= WARNING_THRESHOLD {
        Band::Warning
    } else {
        Band::Failing
    }
}

/// Compute a distribution purely from entity scores.
pub fn from_entities(entities: &[Entity]) -> Distribution {
    let mut distribution = Distribution::default();
    for entity in entities {
        match classify(entity.audit_score) {
            Band::Passing => distribution.passing += 1,
            Band::Warning => distribution.warning += 1,
            Band::Failing => distribution.failing += 1,
        }
    }
    distribution
}

/// Distribution for a component scan.
///
/// The component scanner only enumerates defective components; the
/// clean remainder (`scanned - listed`) is assumed passing. That
/// assumption is part of the producer's contract and cannot be verified
/// here.
pub fn component_distribution(scanned: u64, entities: &[Entity]) -> Distribution {
    let mut distribution = from_entities(entities);
    distribution.passing += scanned.saturating_sub(entities.len() as u64);
    distribution
}

/// A producer-supplied distribution, if the report carries a usable one.
///
/// Only trusted when all three bands are numeric; anything less is
/// recomputed from entity scores instead.
pub fn supplied(report: &Value) -> Option<Distribution> {
    let distribution = report.get("distribution")?;
    Some(Distribution {
        passing: band(distribution, "passing")?,
        warning: band(distribution, "warning")?,
        failing: band(distribution, "failing")?,
    })
}

fn band(distribution: &Value, name: &str) -> Option<u64> {
    let raw = distribution.get(name)?.as_f64()?;
    if raw.is_nan() || raw < 0.0 {
        return None;
    }
    Some(raw.round() as u64)
}
