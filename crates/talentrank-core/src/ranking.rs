//! Ranking pass: score every profile for one job, keep the best
//!
//! Profiles are scored sequentially. A profile that fails validation is
//! skipped without affecting the rest of the pass. Zero scores mean "no
//! match" and are dropped. Results are ordered by score descending, then
//! by original input position, and truncated to `top_n`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::error::{RankError, Result};
use crate::profile::TalentProfile;
use crate::requirement::JobRequirement;
use crate::scoring::{ScoreBreakdown, ScoringEngine};
use crate::trace_time;

/// One ranked profile with the fields needed for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Position of the profile in the input sequence
    pub index: usize,
    pub name: String,
    pub location: String,
    pub job_types: String,
    pub skills: String,
    pub software: String,
    pub monthly_rate: String,
    pub content_verticals: String,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    fn new(index: usize, profile: &TalentProfile, breakdown: ScoreBreakdown) -> Self {
        Self {
            index,
            name: profile.name(),
            location: profile.display_location(),
            job_types: profile.job_types.clone(),
            skills: profile.skills.clone(),
            software: profile.software.clone(),
            monthly_rate: profile.monthly_rate.raw().to_string(),
            content_verticals: profile.content_verticals.clone(),
            score: breakdown.total,
            breakdown,
        }
    }
}

/// Output of a ranking pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ranking {
    /// At most `top_n` results, best first
    pub results: Vec<ScoreResult>,
    /// Profiles scored successfully
    pub evaluated: usize,
    /// Profiles with a positive score, before truncation
    pub matched: usize,
    /// Profiles skipped because they failed validation
    pub skipped: usize,
}

/// Applies a scoring engine across a profile set
pub struct Ranker<'e, 'o> {
    engine: &'e ScoringEngine<'o>,
    top_n: usize,
    progress_interval: usize,
    interrupt: Option<Arc<AtomicBool>>,
}

impl<'e, 'o> Ranker<'e, 'o> {
    pub fn new(engine: &'e ScoringEngine<'o>, top_n: usize) -> Self {
        Self {
            engine,
            top_n,
            progress_interval: 100,
            interrupt: None,
        }
    }

    /// Report progress on profiles 1, 1 + interval, 1 + 2 * interval, ... and on the last one
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Abandon the pass between profiles once `flag` is set
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Run one ranking pass
    #[tracing::instrument(skip_all, fields(job = %requirement.title, profiles = profiles.len()))]
    pub fn rank(
        &self,
        profiles: &[TalentProfile],
        requirement: &JobRequirement,
        mut progress: Option<&mut dyn FnMut(usize, usize)>,
    ) -> Result<Ranking> {
        let start = Instant::now();
        let total = profiles.len();
        let mut ranking = Ranking::default();

        for (index, profile) in profiles.iter().enumerate() {
            if self
                .interrupt
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::SeqCst))
            {
                tracing::info!(scored = index, total, "ranking interrupted");
                return Err(RankError::Interrupted);
            }

            match self.engine.score(profile, requirement) {
                Ok(breakdown) => {
                    ranking.evaluated += 1;
                    if breakdown.total > 0 {
                        ranking
                            .results
                            .push(ScoreResult::new(index, profile, breakdown));
                    }
                }
                Err(e) => {
                    ranking.skipped += 1;
                    tracing::warn!(index, error = %e, "skipping profile");
                }
            }

            let done = index + 1;
            if index % self.progress_interval == 0 || done == total {
                if let Some(cb) = progress.as_mut() {
                    cb(done, total);
                }
            }
        }

        ranking.matched = ranking.results.len();
        ranking
            .results
            .sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
        ranking.results.truncate(self.top_n);

        trace_time!(start, "rank", matched = ranking.matched);
        tracing::debug!(
            evaluated = ranking.evaluated,
            matched = ranking.matched,
            skipped = ranking.skipped,
            returned = ranking.results.len(),
            "ranking complete"
        );

        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use crate::config::ScoringConfig;
    use crate::oracle::NoopOracle;

    fn requirement() -> JobRequirement {
        JobRequirement {
            title: "COO".to_string(),
            skills: "Strategy, Operations".to_string(),
            software: "Excel, Notion".to_string(),
            location: "Remote".to_string(),
            budget: Amount::from(10000),
            content_type: "Productivity".to_string(),
        }
    }

    fn profile(name: &str, skills: &str, software: &str) -> TalentProfile {
        TalentProfile {
            first_name: name.to_string(),
            skills: skills.to_string(),
            software: software.to_string(),
            country: "Portugal".to_string(),
            monthly_rate: Amount::from("n/a"),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_profile_set() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let ranking = Ranker::new(&engine, 10)
            .rank(&[], &requirement(), None)
            .unwrap();
        assert!(ranking.results.is_empty());
        assert_eq!(ranking.evaluated, 0);
    }

    #[test]
    fn test_zero_scores_are_excluded() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let profiles = vec![profile("A", "Cooking", "Photoshop"), profile("B", "", "")];
        let ranking = Ranker::new(&engine, 10)
            .rank(&profiles, &requirement(), None)
            .unwrap();
        assert!(ranking.results.is_empty());
        assert_eq!(ranking.evaluated, 2);
        assert_eq!(ranking.matched, 0);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let profiles = vec![
            profile("Low", "Strategy", ""),
            profile("TieFirst", "Strategy", "Excel"),
            profile("High", "Strategy, Operations", "Excel, Notion"),
            profile("TieSecond", "Operations", "Notion"),
        ];
        let ranking = Ranker::new(&engine, 10)
            .rank(&profiles, &requirement(), None)
            .unwrap();

        let names: Vec<_> = ranking.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["High", "TieFirst", "TieSecond", "Low"]);
        assert_eq!(ranking.results[0].score, 50);
        assert_eq!(ranking.results[1].score, 25);
        assert_eq!(ranking.results[2].score, 25);
        assert_eq!(ranking.results[3].score, 15);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let profiles: Vec<_> = (0..25)
            .map(|i| profile(&format!("P{}", i), "Strategy", ""))
            .collect();
        let ranking = Ranker::new(&engine, 10)
            .rank(&profiles, &requirement(), None)
            .unwrap();
        assert_eq!(ranking.results.len(), 10);
        assert_eq!(ranking.matched, 25);
        assert_eq!(ranking.results[0].index, 0);
        assert_eq!(ranking.results[9].index, 9);
    }

    #[test]
    fn test_invalid_profile_is_skipped_not_fatal() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let profiles = vec![
            profile("", "Strategy", ""),
            profile("Valid", "Strategy", ""),
        ];
        let ranking = Ranker::new(&engine, 10)
            .rank(&profiles, &requirement(), None)
            .unwrap();
        assert_eq!(ranking.skipped, 1);
        assert_eq!(ranking.results.len(), 1);
        assert_eq!(ranking.results[0].name, "Valid");
        assert_eq!(ranking.results[0].index, 1);
    }

    #[test]
    fn test_progress_reports_first_then_interval_and_last() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let profiles: Vec<_> = (0..7).map(|i| profile(&format!("P{}", i), "", "")).collect();

        let mut reports = Vec::new();
        let mut record = |done: usize, total: usize| reports.push((done, total));
        Ranker::new(&engine, 10)
            .with_progress_interval(3)
            .rank(&profiles, &requirement(), Some(&mut record))
            .unwrap();

        assert_eq!(reports, vec![(1, 7), (4, 7), (7, 7)]);
    }

    #[test]
    fn test_progress_single_report_for_small_pass() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let profiles: Vec<_> = (0..5).map(|i| profile(&format!("P{}", i), "", "")).collect();

        let mut reports = Vec::new();
        let mut record = |done: usize, total: usize| reports.push((done, total));
        Ranker::new(&engine, 10)
            .rank(&profiles, &requirement(), Some(&mut record))
            .unwrap();

        assert_eq!(reports, vec![(1, 5), (5, 5)]);
    }

    #[test]
    fn test_interrupt_abandons_pass() {
        let engine = ScoringEngine::new(ScoringConfig::default(), &NoopOracle);
        let flag = Arc::new(AtomicBool::new(true));
        let profiles = vec![profile("A", "Strategy", "")];
        let result = Ranker::new(&engine, 10)
            .with_interrupt(flag)
            .rank(&profiles, &requirement(), None);
        assert!(matches!(result, Err(RankError::Interrupted)));
    }
}
