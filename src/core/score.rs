//! Type-safe audit score scale.
//!
//! Audit scores are integer percentages on a 0-100 scale. Encoding the
//! scale in a newtype keeps raw JSON numbers (which may be fractional,
//! negative, or absurdly large) from leaking into the rest of the engine.

use serde::{Deserialize, Serialize};

/// Audit score on the 0-100 integer scale.
///
/// Values are clamped to the [0, 100] range on construction. Raw JSON
/// numbers are rounded to the nearest integer before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditScore(u32);

impl AuditScore {
    /// Create a new score, clamping to [0, 100].
    pub fn new(value: u32) -> Self {
        Self(value.min(100))
    }

    /// Create a score from a raw JSON number, rounding then clamping.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self(0);
        }
        Self(value.round().clamp(0.0, 100.0) as u32)
    }

    /// Get the raw score value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AuditScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_upper_bound() {
        assert_eq!(AuditScore::new(150).value(), 100);
    }

    #[test]
    fn from_f64_rounds_to_nearest() {
        assert_eq!(AuditScore::from_f64(66.6).value(), 67);
        assert_eq!(AuditScore::from_f64(66.4).value(), 66);
    }

    #[test]
    fn from_f64_handles_pathological_input() {
        assert_eq!(AuditScore::from_f64(f64::NAN).value(), 0);
        assert_eq!(AuditScore::from_f64(-10.0).value(), 0);
        assert_eq!(AuditScore::from_f64(1e12).value(), 100);
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_value(AuditScore::new(85)).unwrap();
        assert_eq!(json, serde_json::json!(85));
    }
}
