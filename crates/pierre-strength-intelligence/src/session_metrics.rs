// ABOUTME: Per-session strength metrics: estimated one-rep max and best-set selection
// ABOUTME: Picks the highest-e1RM set of a session as the unit of session-to-session comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::OneRepMaxAlgorithm;
use crate::config::AnalyticsConfig;
use crate::quality::SetQualityScorer;
use pierre_strength_core::models::{SessionBest, SetRecord};

/// Estimated one-rep max using the Epley formula
///
/// `weight × (1 + reps/30)` rounded to one decimal. Returns `0.0` when the
/// weight is not positive or reps are zero; returns `weight` exactly for a
/// single rep.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    OneRepMaxAlgorithm::Epley.estimate(weight, reps)
}

/// Estimated one-rep max using the configured formula
#[must_use]
pub fn estimate_one_rep_max_with(weight: f64, reps: u32, config: &AnalyticsConfig) -> f64 {
    config.one_rep_max_algorithm().estimate(weight, reps)
}

/// Best set of a session with the global analytics configuration
#[must_use]
pub fn session_best(sets: &[SetRecord]) -> Option<SessionBest> {
    session_best_with(sets, AnalyticsConfig::global())
}

/// Best set of a session with an explicit configuration
#[must_use]
pub fn session_best_with(sets: &[SetRecord], config: &AnalyticsConfig) -> Option<SessionBest> {
    SessionBestSelector::session_best(sets, config)
}

/// The best set of a session together with its estimated one-rep max
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedSet<'a> {
    /// Position of the set within the session
    pub position: usize,
    /// The set itself
    pub record: &'a SetRecord,
    /// Estimated one-rep max of the set
    pub e1rm: f64,
}

/// Selects session bests from raw sets
pub struct SessionBestSelector;

impl SessionBestSelector {
    /// Find the set with the highest estimated one-rep max
    ///
    /// Ties keep the earlier set. Sets whose e1RM is the `0.0` sentinel never
    /// qualify, so a session without a valid lift yields `None`.
    pub fn best_set<'a, I>(sets: I, algorithm: OneRepMaxAlgorithm) -> Option<RankedSet<'a>>
    where
        I: IntoIterator<Item = &'a SetRecord>,
    {
        sets.into_iter()
            .enumerate()
            .map(|(position, record)| RankedSet {
                position,
                record,
                e1rm: algorithm.estimate(record.weight, record.reps),
            })
            .filter(|ranked| ranked.e1rm > 0.0)
            .fold(None, |best: Option<RankedSet<'a>>, candidate| match best {
                Some(current) if current.e1rm >= candidate.e1rm => Some(current),
                _ => Some(candidate),
            })
    }

    /// Build the `SessionBest` of a session, scoring the winning set's quality
    pub fn session_best<'a, I>(sets: I, config: &AnalyticsConfig) -> Option<SessionBest>
    where
        I: IntoIterator<Item = &'a SetRecord>,
    {
        Self::best_set(sets, config.one_rep_max_algorithm()).map(|ranked| {
            let quality = SetQualityScorer::assess_record(ranked.record, &config.quality);
            SessionBest::from_record(ranked.record, quality.score)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_strength_core::models::Tempo;

    #[test]
    fn test_best_set_prefers_earliest_on_tie() {
        // 200x8 and 200x8 tie; the first must win
        let sets = [
            SetRecord::new(200.0, 8, 2, Tempo::Controlled),
            SetRecord::new(200.0, 8, 0, Tempo::Fast),
            SetRecord::new(180.0, 9, 1, Tempo::Slow),
        ];
        let best = SessionBestSelector::best_set(&sets, OneRepMaxAlgorithm::Epley).unwrap();
        assert_eq!(best.position, 0);
    }

    #[test]
    fn test_best_set_ignores_sentinel_sets() {
        let sets = [
            SetRecord::new(0.0, 10, 2, Tempo::Controlled),
            SetRecord::new(135.0, 0, 2, Tempo::Controlled),
        ];
        assert!(SessionBestSelector::best_set(&sets, OneRepMaxAlgorithm::Epley).is_none());
    }
}
