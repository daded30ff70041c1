//! Severity weight configuration.
//!
//! Every rule check carries a static 1-10 severity weight used by the
//! prioritization engine. The built-in table covers the shipped Angular
//! Material checks; deployments can override individual weights (or the
//! unknown-check default) from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Smallest allowed severity weight.
pub const MIN_WEIGHT: u32 = 1;
/// Largest allowed severity weight.
pub const MAX_WEIGHT: u32 = 10;
/// Weight assigned to checks missing from the table.
pub const DEFAULT_WEIGHT: u32 = 5;

/// Check name to severity weight mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckWeights {
    #[serde(default = "builtin_weights")]
    weights: HashMap<String, u32>,
    #[serde(default = "default_unknown_weight")]
    default_weight: u32,
}

impl Default for CheckWeights {
    fn default() -> Self {
        Self {
            weights: builtin_weights(),
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl CheckWeights {
    /// Look up the weight for a check name, clamped to [1, 10].
    ///
    /// Unknown checks resolve to the configured default weight.
    pub fn weight_for(&self, check: &str) -> u32 {
        self.weights
            .get(check)
            .copied()
            .unwrap_or(self.default_weight)
            .clamp(MIN_WEIGHT, MAX_WEIGHT)
    }

    /// Parse overrides from TOML and merge them over the built-in table.
    ///
    /// ```toml
    /// default-weight = 4
    ///
    /// [weights]
    /// image-alt = 10
    /// theme-contrast = 2
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let overrides: WeightOverrides =
            toml::from_str(content).context("failed to parse weight configuration")?;
        let mut merged = Self::default();
        if let Some(default_weight) = overrides.default_weight {
            merged.default_weight = default_weight;
        }
        merged.weights.extend(overrides.weights);
        Ok(merged)
    }

    /// Load overrides from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read weight configuration: {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct WeightOverrides {
    #[serde(default)]
    default_weight: Option<u32>,
    #[serde(default)]
    weights: HashMap<String, u32>,
}

fn default_unknown_weight() -> u32 {
    DEFAULT_WEIGHT
}

/// Shipped weights for the Angular Material check set.
///
/// 10 = blocks assistive technology outright, 1 = cosmetic.
fn builtin_weights() -> HashMap<String, u32> {
    [
        ("image-alt", 10),
        ("button-label", 10),
        ("icon-button-label", 9),
        ("form-field-label", 9),
        ("checkbox-label", 9),
        ("click-events-have-key-events", 9),
        ("anchor-content", 8),
        ("select-label", 8),
        ("dialog-label", 7),
        ("menu-trigger-label", 7),
        ("mouse-events-have-key-events", 7),
        ("table-header", 6),
        ("tooltip-focusable", 6),
        ("tabindex-no-positive", 5),
        ("autofocus", 4),
        ("theme-contrast", 3),
        ("distracting-elements", 2),
    ]
    .into_iter()
    .map(|(name, weight)| (name.to_string(), weight))
    .collect()
}
