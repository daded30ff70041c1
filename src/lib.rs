// Export modules for library usage
pub mod assemble;
pub mod config;
pub mod core;
pub mod extract;
pub mod priority;
pub mod scoring;

// Re-export commonly used types
pub use crate::assemble::normalize;
pub use crate::config::{CheckWeights, DEFAULT_WEIGHT, MAX_WEIGHT, MIN_WEIGHT};
pub use crate::core::{
    AuditScore, Distribution, Entity, EntityKind, Issue, IssuePoints, NormalizedResult,
};
pub use crate::extract::{detect_kind, extract_entities, ReportKind};
pub use crate::priority::{
    distribution::{classify, Band, PASSING_THRESHOLD, WARNING_THRESHOLD},
    efficiency, issue_points, rank_entities, EfficiencyRanking, IssuePointsRanking,
    RankingStrategy, WeightCache,
};
pub use crate::scoring::{aggregate_score, binary_score, AggregateOutcome};
