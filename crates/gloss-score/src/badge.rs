use std::fmt;

use gloss_core::ControversyLevel;
use serde::Serialize;

/// Qualitative label derived from a term's score or metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Badge {
    /// Humor longer than 100 characters.
    #[serde(rename = "Comedy Gold")]
    ComedyGold,
    /// `controversy_level: high`.
    #[serde(rename = "Flame Warrior")]
    FlameWarrior,
    /// `controversy_level: medium`.
    #[serde(rename = "Spicy Take")]
    SpicyTake,
    /// Score of 90 or more.
    #[serde(rename = "Perfectionist")]
    Perfectionist,
    /// Score of 80 to 89.
    #[serde(rename = "Star Contributor")]
    StarContributor,
    /// Score of 70 to 79.
    #[serde(rename = "Strong Entry")]
    StrongEntry,
}

impl Badge {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ComedyGold => "Comedy Gold",
            Self::FlameWarrior => "Flame Warrior",
            Self::SpicyTake => "Spicy Take",
            Self::Perfectionist => "Perfectionist",
            Self::StarContributor => "Star Contributor",
            Self::StrongEntry => "Strong Entry",
        }
    }

    #[must_use]
    pub const fn for_controversy(level: ControversyLevel) -> Option<Self> {
        match level {
            ControversyLevel::High => Some(Self::FlameWarrior),
            ControversyLevel::Medium => Some(Self::SpicyTake),
            ControversyLevel::Low => None,
        }
    }

    /// Achievement badge for a total score. Only the highest threshold
    /// reached is awarded.
    #[must_use]
    pub const fn for_score(score: u32) -> Option<Self> {
        if score >= 90 {
            Some(Self::Perfectionist)
        } else if score >= 80 {
            Some(Self::StarContributor)
        } else if score >= 70 {
            Some(Self::StrongEntry)
        } else {
            None
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(100, Some(Badge::Perfectionist))]
    #[case(90, Some(Badge::Perfectionist))]
    #[case(89, Some(Badge::StarContributor))]
    #[case(80, Some(Badge::StarContributor))]
    #[case(79, Some(Badge::StrongEntry))]
    #[case(70, Some(Badge::StrongEntry))]
    #[case(69, None)]
    #[case(0, None)]
    fn achievement_thresholds(#[case] score: u32, #[case] expected: Option<Badge>) {
        assert_eq!(Badge::for_score(score), expected);
    }

    #[test]
    fn serializes_as_label() {
        for badge in [Badge::ComedyGold, Badge::FlameWarrior, Badge::StrongEntry] {
            assert_eq!(
                serde_json::to_value(badge).unwrap(),
                serde_json::Value::String(badge.label().to_string())
            );
        }
    }
}
