//! Score components.
//!
//! | component         | rule                                   | cap |
//! |-------------------|----------------------------------------|-----|
//! | base              | 20 when `term` and `definition` present | 20  |
//! | humor             | one point per 5 characters             | 30  |
//! | explanation       | 20 when longer than 20 characters      | 20  |
//! | tags              | 3 per tag                              | 10  |
//! | cross references  | 5 per `see_also` entry                 | 20  |
//!
//! The caps sum to exactly 100. Text and list entries only count when
//! non-blank after trimming; a counted text is measured untrimmed.

use gloss_core::{Snapshot, TermRecord, present_text};
use serde::Serialize;

use crate::badge::Badge;

const BASE_POINTS: u32 = 20;
const HUMOR_CHARS_PER_POINT: usize = 5;
const COMEDY_GOLD_MIN_CHARS: usize = 101;
const EXPLANATION_POINTS: u32 = 20;
const EXPLANATION_MIN_CHARS: usize = 21;
const POINTS_PER_TAG: u32 = 3;
const POINTS_PER_CROSS_REFERENCE: u32 = 5;
const MAX_TOTAL: u32 = 100;

/// Cap of each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxScores {
    pub base: u32,
    pub humor: u32,
    pub explanation: u32,
    pub tags: u32,
    pub cross_references: u32,
}

impl MaxScores {
    pub const DEFAULT: Self = Self {
        base: BASE_POINTS,
        humor: 30,
        explanation: EXPLANATION_POINTS,
        tags: 10,
        cross_references: 20,
    };

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.base + self.humor + self.explanation + self.tags + self.cross_references
    }
}

/// The five capped components of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: u32,
    pub humor: u32,
    pub explanation: u32,
    pub tags: u32,
    pub cross_references: u32,
    pub max_scores: MaxScores,
}

impl ScoreBreakdown {
    /// Sum of the components, bounded to 100.
    #[must_use]
    pub fn total(&self) -> u32 {
        (self.base + self.humor + self.explanation + self.tags + self.cross_references)
            .min(MAX_TOTAL)
    }
}

/// Score and badges of one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub score: u32,
    pub badges: Vec<Badge>,
}

/// A [`ScoreCard`] keyed by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermScore {
    pub slug: String,
    pub score: u32,
    pub badges: Vec<Badge>,
}

#[must_use]
pub fn score_breakdown(term: &TermRecord) -> ScoreBreakdown {
    let max = MaxScores::DEFAULT;

    let base = if present_text(Some(term.term.as_str())).is_some()
        && present_text(Some(term.definition.as_str())).is_some()
    {
        BASE_POINTS
    } else {
        0
    };

    let humor = capped_points(
        text_len(term.humor.as_deref()) / HUMOR_CHARS_PER_POINT,
        1,
        max.humor,
    );

    let explanation = if text_len(term.explanation.as_deref()) >= EXPLANATION_MIN_CHARS {
        EXPLANATION_POINTS
    } else {
        0
    };

    let tags = capped_points(entry_count(term.tags.as_deref()), POINTS_PER_TAG, max.tags);

    let cross_references = capped_points(
        entry_count(term.see_also.as_deref()),
        POINTS_PER_CROSS_REFERENCE,
        max.cross_references,
    );

    ScoreBreakdown {
        base,
        humor,
        explanation,
        tags,
        cross_references,
        max_scores: max,
    }
}

#[must_use]
pub fn score(term: &TermRecord) -> ScoreCard {
    let total = score_breakdown(term).total();

    let mut badges = Vec::new();
    if text_len(term.humor.as_deref()) >= COMEDY_GOLD_MIN_CHARS {
        badges.push(Badge::ComedyGold);
    }
    if let Some(badge) = term.controversy_level.and_then(Badge::for_controversy) {
        badges.push(badge);
    }
    if let Some(badge) = Badge::for_score(total) {
        badges.push(badge);
    }

    ScoreCard {
        score: total,
        badges,
    }
}

/// Score every term, in snapshot order.
#[must_use]
pub fn score_snapshot(snapshot: &Snapshot) -> Vec<TermScore> {
    snapshot
        .terms
        .iter()
        .map(|term| {
            let card = score(term);
            TermScore {
                slug: term.slug.clone(),
                score: card.score,
                badges: card.badges,
            }
        })
        .collect()
}

/// Length of a present (non-blank) value, surrounding whitespace included.
fn text_len(value: Option<&str>) -> usize {
    value
        .filter(|text| present_text(Some(text)).is_some())
        .map_or(0, |text| text.chars().count())
}

fn entry_count(values: Option<&[String]>) -> usize {
    values
        .unwrap_or_default()
        .iter()
        .filter(|entry| present_text(Some(entry.as_str())).is_some())
        .count()
}

fn capped_points(units: usize, points_per_unit: u32, cap: u32) -> u32 {
    u32::try_from(units)
        .unwrap_or(u32::MAX)
        .saturating_mul(points_per_unit)
        .min(cap)
}
