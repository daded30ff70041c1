//! Severity-weighted prioritization.
//!
//! Two independent ranking strategies coexist on purpose. *Issue points*
//! (`Σ weight × usage`) is the primary cross-entity metric: it rewards
//! fixing a lightly-broken but widely-reused component over a
//! heavily-broken unique one whenever the product is larger.
//! *Efficiency* (`unique-check weight density × usage`) instead rewards
//! fixes that are cheap per issue. Renderers pick one; the engine does
//! not reconcile them into a single canonical order.

pub mod distribution;

use crate::config::CheckWeights;
use crate::core::{Entity, IssuePoints};
use dashmap::DashMap;

/// Read-through memoization of check-name weight lookups.
///
/// Constructed once at startup and shared by reference across every
/// normalization run. Population is idempotent: concurrent first-writes
/// of the same key compute and store the same value, so lookups are
/// lock-free via `DashMap` and entries are never invalidated.
pub struct WeightCache {
    weights: CheckWeights,
    resolved: DashMap<String, u32>,
}

impl WeightCache {
    pub fn new(weights: CheckWeights) -> Self {
        Self {
            weights,
            resolved: DashMap::new(),
        }
    }

    /// Severity weight for a check name, memoized.
    pub fn weight(&self, check: &str) -> u32 {
        if let Some(weight) = self.resolved.get(check) {
            return *weight;
        }
        let weight = self.weights.weight_for(check);
        self.resolved.insert(check.to_string(), weight);
        weight
    }
}

impl Default for WeightCache {
    fn default() -> Self {
        Self::new(CheckWeights::default())
    }
}

/// Compute the issue-points triple for one entity.
///
/// `base_points` counts every issue instance; duplicates of the same
/// check are deliberately not deduplicated, since each instance is a
/// separate defect to fix.
pub fn issue_points(entity: &Entity, cache: &WeightCache) -> IssuePoints {
    let base_points: u32 = entity
        .issues
        .iter()
        .map(|issue| cache.weight(&issue.check))
        .sum();
    let usage_count = entity.usage_count();
    IssuePoints {
        base_points,
        usage_count,
        total_points: base_points * usage_count,
    }
}

/// Weight density per issue, counting each distinct check once.
///
/// An entity with no issues has efficiency 0 rather than an undefined
/// quotient.
pub fn efficiency(entity: &Entity, cache: &WeightCache) -> f64 {
    if entity.issues.is_empty() {
        return 0.0;
    }
    let mut seen = std::collections::HashSet::new();
    let unique_weight: u32 = entity
        .issues
        .iter()
        .filter(|issue| seen.insert(issue.check.as_str()))
        .map(|issue| cache.weight(&issue.check))
        .sum();
    f64::from(unique_weight) / entity.issues.len() as f64
}

/// One of the two ranking metrics, behind a common interface so callers
/// (renderers) select a strategy explicitly.
pub trait RankingStrategy {
    fn name(&self) -> &'static str;

    /// The value this strategy ranks an entity by; higher sorts first.
    fn rank_value(&self, entity: &Entity, cache: &WeightCache) -> f64;
}

/// Primary strategy: `base_points × usage_count`.
pub struct IssuePointsRanking;

impl RankingStrategy for IssuePointsRanking {
    fn name(&self) -> &'static str {
        "issue-points"
    }

    fn rank_value(&self, entity: &Entity, cache: &WeightCache) -> f64 {
        let points = entity
            .issue_points
            .unwrap_or_else(|| issue_points(entity, cache));
        f64::from(points.total_points)
    }
}

/// Alternate strategy: `efficiency × usage_count`.
pub struct EfficiencyRanking;

impl RankingStrategy for EfficiencyRanking {
    fn name(&self) -> &'static str {
        "efficiency"
    }

    fn rank_value(&self, entity: &Entity, cache: &WeightCache) -> f64 {
        efficiency(entity, cache) * f64::from(entity.usage_count())
    }
}

/// Sort entities by a strategy's rank value, descending. The sort is
/// stable: equal rank values keep their input order.
pub fn rank_entities(
    mut entities: Vec<Entity>,
    strategy: &dyn RankingStrategy,
    cache: &WeightCache,
) -> Vec<Entity> {
    entities.sort_by(|a, b| {
        let rank_a = strategy.rank_value(a, cache);
        let rank_b = strategy.rank_value(b, cache);
        rank_b
            .partial_cmp(&rank_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityKind, Issue};
    use pretty_assertions::assert_eq;

    fn entity_with_checks(label: &str, checks: &[&str], affected: Option<&[&str]>) -> Entity {
        let mut entity = Entity::new(label, EntityKind::Component);
        entity.issues = checks
            .iter()
            .map(|check| Issue {
                check: check.to_string(),
                ..Issue::unknown()
            })
            .collect();
        entity.affected = affected.map(|pages| pages.iter().map(|p| p.to_string()).collect());
        entity
    }

    #[test]
    fn base_points_count_duplicate_checks() {
        let cache = WeightCache::default();
        // image-alt (10) twice plus dialog-label (7).
        let entity = entity_with_checks(
            "app-banner",
            &["image-alt", "image-alt", "dialog-label"],
            Some(&["/", "/a", "/b"]),
        );
        let points = issue_points(&entity, &cache);
        assert_eq!(points.base_points, 27);
        assert_eq!(points.usage_count, 3);
        assert_eq!(points.total_points, 81);
    }

    #[test]
    fn no_reuse_data_means_usage_count_one() {
        let cache = WeightCache::default();
        let entity = entity_with_checks("app-footer", &["autofocus"], None);
        let points = issue_points(&entity, &cache);
        assert_eq!(points.usage_count, 1);
        assert_eq!(points.total_points, points.base_points);
    }

    #[test]
    fn efficiency_deduplicates_checks() {
        let cache = WeightCache::default();
        // Unique weight 10, spread across 4 issue instances.
        let entity = entity_with_checks(
            "app-banner",
            &["image-alt", "image-alt", "image-alt", "image-alt"],
            None,
        );
        assert_eq!(efficiency(&entity, &cache), 2.5);
    }

    #[test]
    fn efficiency_of_clean_entity_is_zero() {
        let cache = WeightCache::default();
        let entity = entity_with_checks("clean", &[], None);
        assert_eq!(efficiency(&entity, &cache), 0.0);
    }

    #[test]
    fn strategies_agree_on_weight_values() {
        let cache = WeightCache::default();
        let entity = entity_with_checks("app-card", &["table-header"], None);
        // Single issue, usage 1: both strategies reduce to the same weight.
        assert_eq!(
            IssuePointsRanking.rank_value(&entity, &cache),
            EfficiencyRanking.rank_value(&entity, &cache)
        );
    }

    #[test]
    fn strategies_can_disagree_on_order() {
        let cache = WeightCache::default();
        // Heavy absolute mass, low density.
        let pile = entity_with_checks(
            "pile",
            &["autofocus", "autofocus", "autofocus", "autofocus", "autofocus"],
            None,
        );
        // One severe issue: lower mass, high density.
        let spike = entity_with_checks("spike", &["image-alt"], None);

        assert!(
            IssuePointsRanking.rank_value(&pile, &cache)
                > IssuePointsRanking.rank_value(&spike, &cache)
        );
        assert!(
            EfficiencyRanking.rank_value(&spike, &cache)
                > EfficiencyRanking.rank_value(&pile, &cache)
        );
    }

    #[test]
    fn rank_entities_sorts_descending_and_stable() {
        let cache = WeightCache::default();
        let entities = vec![
            entity_with_checks("low", &["autofocus"], None),
            entity_with_checks("tie-first", &["image-alt"], None),
            entity_with_checks("tie-second", &["button-label"], None),
        ];
        let ranked = rank_entities(entities, &IssuePointsRanking, &cache);
        assert_eq!(ranked[0].label, "tie-first");
        assert_eq!(ranked[1].label, "tie-second");
        assert_eq!(ranked[2].label, "low");
    }

    #[test]
    fn cache_returns_consistent_weights() {
        let cache = WeightCache::default();
        let first = cache.weight("click-events-have-key-events");
        let second = cache.weight("click-events-have-key-events");
        assert_eq!(first, second);
        assert_eq!(cache.weight("never-seen-before"), crate::config::DEFAULT_WEIGHT);
    }
}
