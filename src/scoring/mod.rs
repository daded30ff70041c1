//! Audit score derivation.
//!
//! Used when a raw record carries no usable `auditScore` of its own.
//! Two strategies exist: the binary rule (any issue fails the entity
//! outright) and the richer per-check aggregate formula available on
//! component scans.

use crate::core::{AuditScore, Issue};
use serde_json::{Map, Value};

/// Result of the check-aggregate formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOutcome {
    pub score: AuditScore,
    pub audits_passed: u32,
    pub audits_total: u32,
}

/// Binary fallback: no issues scores 100, anything else scores 0.
pub fn binary_score(issues: &[Issue]) -> AuditScore {
    if issues.is_empty() {
        AuditScore::new(100)
    } else {
        AuditScore::new(0)
    }
}

/// Weighted check-aggregate formula.
///
/// A check is *applicable* when it found elements or produced any
/// issue/error/warning. The score is the rounded percentage of
/// applicable checks that passed cleanly. No applicable checks at all
/// is a vacuous pass (score 100): a template with nothing for a check
/// to inspect cannot fail it. That policy is deliberate.
pub fn aggregate_score(aggregates: &Map<String, Value>) -> AggregateOutcome {
    let mut audits_total = 0u32;
    let mut audits_passed = 0u32;
    for aggregate in aggregates.values() {
        let elements_found = tally(aggregate, "elementsFound");
        let issues = tally(aggregate, "issues");
        let errors = tally(aggregate, "errors");
        let warnings = tally(aggregate, "warnings");
        if elements_found == 0 && issues == 0 && errors == 0 && warnings == 0 {
            continue;
        }
        audits_total += 1;
        if issues == 0 && errors == 0 && warnings == 0 {
            audits_passed += 1;
        }
    }

    let score = if audits_total == 0 {
        AuditScore::new(100)
    } else {
        AuditScore::from_f64(100.0 * f64::from(audits_passed) / f64::from(audits_total))
    };
    log::debug!(
        "aggregate score: {}/{} applicable checks passed -> {}",
        audits_passed,
        audits_total,
        score
    );
    AggregateOutcome {
        score,
        audits_passed,
        audits_total,
    }
}

fn tally(aggregate: &Value, field: &str) -> u64 {
    aggregate
        .get(field)
        .and_then(Value::as_f64)
        .filter(|count| count.is_finite() && *count > 0.0)
        .map(|count| count.round() as u64)
        .unwrap_or(0)
}
