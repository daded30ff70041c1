use a11ymap::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn normalized() -> NormalizedResult {
    let report = json!({
        "tier": "material",
        "totalComponentsScanned": 3,
        "components": [
            // Many low-weight issues: heavy absolute mass, low density.
            {"name": "app-form", "issues": [
                {"check": "autofocus"}, {"check": "autofocus"},
                {"check": "autofocus"}, {"check": "autofocus"},
                {"check": "autofocus"}, {"check": "autofocus"}
            ]},
            // One severe issue reused on two pages.
            {"name": "app-banner", "issues": [{"check": "image-alt"}],
             "affected": ["/", "/about"]},
            // One mid-weight issue, no reuse.
            {"name": "app-table", "issues": [{"check": "table-header"}]}
        ]
    });
    normalize(&report, &WeightCache::default())
}

#[test]
fn issue_points_is_the_assemblers_primary_order() {
    let result = normalized();
    let labels: Vec<&str> = result.entities.iter().map(|e| e.label.as_str()).collect();
    // app-form 24, app-banner 10 * 2 = 20, app-table 6.
    assert_eq!(labels, vec!["app-form", "app-banner", "app-table"]);
}

#[test]
fn efficiency_ranking_prefers_cheap_dense_fixes() {
    let cache = WeightCache::default();
    let result = normalized();
    let ranked = rank_entities(result.entities, &EfficiencyRanking, &cache);
    let labels: Vec<&str> = ranked.iter().map(|e| e.label.as_str()).collect();
    // app-banner 10/1 * 2 = 20, app-table 6, app-form 4/6.
    assert_eq!(labels, vec!["app-banner", "app-table", "app-form"]);
}

#[test]
fn reranking_by_issue_points_reproduces_the_assembler_order() {
    let cache = WeightCache::default();
    let result = normalized();
    let expected: Vec<String> = result.entities.iter().map(|e| e.label.clone()).collect();

    let mut shuffled = result.entities.clone();
    shuffled.reverse();
    let ranked = rank_entities(shuffled, &IssuePointsRanking, &cache);
    let labels: Vec<String> = ranked.iter().map(|e| e.label.clone()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn both_strategies_resolve_identical_weights_per_check() {
    let cache = WeightCache::default();
    let result = normalized();
    for entity in &result.entities {
        for issue in &entity.issues {
            assert_eq!(issue.weight, Some(cache.weight(&issue.check)));
        }
    }
}

#[test]
fn strategy_names_identify_the_metric() {
    assert_eq!(IssuePointsRanking.name(), "issue-points");
    assert_eq!(EfficiencyRanking.name(), "efficiency");
}
