//! Shape discrimination and entity extraction.
//!
//! Raw analyzer reports arrive as duck-typed JSON in one of four shapes
//! (component scan, file scan, sitemap pages, route-list pages). The
//! boundary probes the shape exactly once, producing a [`ReportKind`],
//! and an exhaustive match dispatches to one adapter per variant. Input
//! that matches no shape is an explicit `Unrecognized` variant, not a
//! silent fallthrough.
//!
//! Adapters never fail: missing or mistyped fields degrade to safe
//! defaults instead of erroring.

pub mod component;
pub mod file;
pub mod issue;
pub mod page;

use crate::core::Entity;
use serde_json::Value;

/// Which of the four analyzer output shapes a report matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Has an array `components` field: per-component scan results.
    Component,
    /// Has `summary.issues`: one aggregate record for the scanned file set.
    File,
    /// Has `urls` (sitemap) or `routes` (route list): per-page results.
    Page,
    /// Matched none of the above; normalizes to an empty result.
    Unrecognized,
}

/// Probe a raw report for its shape. First match wins; the shapes are
/// not expected to overlap.
pub fn detect_kind(report: &Value) -> ReportKind {
    let kind = if field_is_array(report, "components") {
        ReportKind::Component
    } else if report
        .get("summary")
        .and_then(|summary| summary.get("issues"))
        .is_some_and(Value::is_array)
    {
        ReportKind::File
    } else if field_is_array(report, "urls") || field_is_array(report, "routes") {
        ReportKind::Page
    } else {
        ReportKind::Unrecognized
    };
    log::debug!("detected report shape: {:?}", kind);
    kind
}

/// Run the adapter for a detected shape, yielding canonical entities.
pub fn extract_entities(report: &Value, kind: ReportKind) -> Vec<Entity> {
    match kind {
        ReportKind::Component => component::extract(report),
        ReportKind::File => file::extract(report),
        ReportKind::Page => page::extract(report),
        ReportKind::Unrecognized => Vec::new(),
    }
}

fn field_is_array(report: &Value, field: &str) -> bool {
    report.get(field).is_some_and(Value::is_array)
}

/// String field lookup with `None` for missing or mistyped values.
pub(crate) fn str_field(record: &Value, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Non-negative integer field lookup, tolerating float-typed JSON numbers.
pub(crate) fn count_field(record: &Value, field: &str) -> Option<u32> {
    let raw = record.get(field).and_then(Value::as_f64)?;
    if raw.is_nan() || raw < 0.0 {
        return None;
    }
    Some(raw.round().min(u32::MAX as f64) as u32)
}
