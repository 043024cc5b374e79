//! # gloss-score
//!
//! Pure scoring of a single term record: a 0..=100 quality score built from
//! five independently capped components, plus a set of badges. Scores are
//! recomputed on demand and never stored.

mod badge;
mod scorer;

pub use badge::Badge;
pub use scorer::{
    MaxScores, ScoreBreakdown, ScoreCard, TermScore, score, score_breakdown, score_snapshot,
};
