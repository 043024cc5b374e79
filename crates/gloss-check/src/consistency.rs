//! The consistency checker.
//!
//! Four passes over the snapshot, each backed by a hash map:
//! 1. slug -> first position
//! 2. normalized label -> first claim, over every `term` and alias
//! 3. the same label index for the base snapshot, compared by slug
//! 4. redirect sources and targets against the active slug set
//!
//! All passes always run. Violations are reported in pass order, and in
//! snapshot order within a pass.

use std::collections::HashMap;

use gloss_core::{Snapshot, TermRecord, normalize_name};
use tracing::debug;

use crate::error::ConsistencyError;
use crate::violation::Violation;

/// The first term to use a normalized label.
#[derive(Debug, Clone, Copy)]
struct NameClaim<'a> {
    position: usize,
    label: &'a str,
    slug: &'a str,
}

/// Normalized label -> first claim, with keys kept in first-seen order.
struct NameIndex<'a> {
    claims: HashMap<String, NameClaim<'a>>,
    order: Vec<String>,
}

impl<'a> NameIndex<'a> {
    /// Index every label of every term. Collisions between different terms
    /// are returned as `DuplicateName` violations; the first claim is kept.
    ///
    /// Labels whose key is empty (nothing left after stripping) are skipped.
    fn build(terms: &'a [TermRecord]) -> (Self, Vec<Violation>) {
        let mut claims: HashMap<String, NameClaim<'a>> = HashMap::with_capacity(terms.len());
        let mut order = Vec::with_capacity(terms.len());
        let mut violations = Vec::new();

        for (position, term) in terms.iter().enumerate() {
            for label in term.labels() {
                let key = normalize_name(label);
                if key.is_empty() {
                    continue;
                }
                match claims.get(&key) {
                    Some(existing) if existing.position != position => {
                        violations.push(Violation::DuplicateName {
                            label: label.to_string(),
                            position,
                            existing_label: existing.label.to_string(),
                            existing_position: existing.position,
                            key,
                        });
                    }
                    Some(_) => {}
                    None => {
                        claims.insert(
                            key.clone(),
                            NameClaim {
                                position,
                                label,
                                slug: term.slug.as_str(),
                            },
                        );
                        order.push(key);
                    }
                }
            }
        }

        (Self { claims, order }, violations)
    }

    fn claims_in_order(&self) -> impl Iterator<Item = (&str, &NameClaim<'a>)> {
        self.order
            .iter()
            .filter_map(|key| self.claims.get(key).map(|claim| (key.as_str(), claim)))
    }
}

/// Check a snapshot for duplicates, slug changes against `base`, and redirect
/// integrity.
///
/// # Errors
///
/// Returns a [`ConsistencyError`] carrying every violation found.
pub fn check_consistency(
    snapshot: &Snapshot,
    base: Option<&Snapshot>,
) -> Result<(), ConsistencyError> {
    let mut violations = Vec::new();

    let slugs = index_slugs(&snapshot.terms, &mut violations);

    let (names, name_conflicts) = NameIndex::build(&snapshot.terms);
    violations.extend(name_conflicts);

    if let Some(base) = base {
        violations.extend(slug_changes(&names, base));
    }

    violations.extend(redirect_problems(snapshot, &slugs));

    debug!(
        terms = snapshot.terms.len(),
        redirects = snapshot.redirects.len(),
        with_base = base.is_some(),
        violations = violations.len(),
        "consistency check complete"
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConsistencyError { violations })
    }
}

/// slug -> first position. One violation per repeat.
fn index_slugs<'a>(
    terms: &'a [TermRecord],
    violations: &mut Vec<Violation>,
) -> HashMap<&'a str, usize> {
    let mut slugs: HashMap<&str, usize> = HashMap::with_capacity(terms.len());
    for (position, term) in terms.iter().enumerate() {
        let slug = term.slug.as_str();
        if let Some(&first_position) = slugs.get(slug) {
            violations.push(Violation::DuplicateSlug {
                slug: slug.to_string(),
                position,
                first_position,
            });
        } else {
            slugs.insert(slug, position);
        }
    }
    slugs
}

fn slug_changes(names: &NameIndex<'_>, base: &Snapshot) -> Vec<Violation> {
    let (base_names, _) = NameIndex::build(&base.terms);
    names
        .claims_in_order()
        .filter_map(|(key, claim)| {
            let published = base_names.claims.get(key)?;
            (published.slug != claim.slug).then(|| Violation::SlugChanged {
                label: claim.label.to_string(),
                base_slug: published.slug.to_string(),
                slug: claim.slug.to_string(),
            })
        })
        .collect()
}

fn redirect_problems(snapshot: &Snapshot, slugs: &HashMap<&str, usize>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for redirect in snapshot.redirect_pairs() {
        if slugs.contains_key(redirect.source) {
            violations.push(Violation::RedirectSourceActive {
                source: redirect.source.to_string(),
                target: redirect.target.to_string(),
            });
        }
        if !slugs.contains_key(redirect.target) {
            violations.push(Violation::RedirectTargetMissing {
                source: redirect.source.to_string(),
                target: redirect.target.to_string(),
            });
        }
    }
    violations
}
