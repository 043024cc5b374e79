use anyhow::bail;
use gloss_check::ValidationError;
use gloss_score::{ScoreBreakdown, TermScore, score_breakdown, score_snapshot};
use serde::Serialize;

use crate::cli::{GlobalFlags, ScoreArgs};
use crate::input;
use crate::output;

#[derive(Debug, Serialize)]
struct ScoreEntry {
    #[serde(flatten)]
    score: TermScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
}

/// Handle `gloss score`.
///
/// Only the schema is checked first; consistency problems do not prevent
/// scoring.
pub fn handle(args: &ScoreArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = input::read_json(&args.input)?;
    let mut snapshot = gloss_schema::validate_schema(&raw)
        .map_err(|error| super::fail_validation(flags, &ValidationError::from(error)))?;

    if let Some(slug) = args.slug.as_deref() {
        snapshot.terms.retain(|term| term.slug == slug);
        if snapshot.terms.is_empty() {
            bail!("no term with slug '{slug}'");
        }
    }

    let entries: Vec<ScoreEntry> = score_snapshot(&snapshot)
        .into_iter()
        .zip(&snapshot.terms)
        .map(|(score, term)| ScoreEntry {
            score,
            breakdown: args.breakdown.then(|| score_breakdown(term)),
        })
        .collect();

    let lines: Vec<String> = entries.iter().map(describe).collect();
    output::report(flags, &entries, &lines)
}

fn describe(entry: &ScoreEntry) -> String {
    let badges: Vec<&str> = entry.score.badges.iter().map(|badge| badge.label()).collect();
    let mut line = format!("{:<48} {:>3}", entry.score.slug, entry.score.score);
    if !badges.is_empty() {
        line.push_str("  ");
        line.push_str(&badges.join(", "));
    }
    if let Some(b) = &entry.breakdown {
        line.push_str(&format!(
            "\n    base {}/{} humor {}/{} explanation {}/{} tags {}/{} cross-references {}/{}",
            b.base,
            b.max_scores.base,
            b.humor,
            b.max_scores.humor,
            b.explanation,
            b.max_scores.explanation,
            b.tags,
            b.max_scores.tags,
            b.cross_references,
            b.max_scores.cross_references,
        ));
    }
    line
}
