pub mod engine;
pub mod memo;
pub mod types;

pub use self::engine::score;
pub use self::memo::MemoizedEvaluator;
pub use self::types::{CoverageEntry, DuplicateEntry, ScoreBreakdown, ScoreDetails};
use crate::catalog::Catalog;
use crate::error::{TeamForgeError, TfResult};
use crate::playstyle::PlaystyleProfile;
use crate::roster::Roster;

/// Anything the optimizers can ask for a roster's score.
///
/// Implementations must be pure: the same roster always yields the same
/// breakdown. Evaluation runs on rayon worker threads, hence `Sync`.
pub trait RosterEvaluator: Sync {
    fn evaluate(&self, roster: &Roster) -> ScoreBreakdown;
}

/// Scores rosters of a fixed size against one playstyle.
pub struct Scorer<'a> {
    catalog: &'a Catalog,
    profile: &'a PlaystyleProfile,
    team_size: usize,
}

impl<'a> Scorer<'a> {
    pub fn new(
        catalog: &'a Catalog,
        profile: &'a PlaystyleProfile,
        team_size: usize,
    ) -> TfResult<Self> {
        if team_size == 0 {
            return Err(TeamForgeError::Config("team_size must be at least 1".into()));
        }
        profile.validate()?;
        Ok(Self {
            catalog,
            profile,
            team_size,
        })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn profile(&self) -> &'a PlaystyleProfile {
        self.profile
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn check_length(&self, roster: &Roster) -> TfResult<()> {
        if roster.len() != self.team_size {
            return Err(TeamForgeError::RosterLength {
                expected: self.team_size,
                actual: roster.len(),
            });
        }
        Ok(())
    }

    /// Scores a roster after checking it has exactly `team_size` slots.
    pub fn score(&self, roster: &Roster) -> TfResult<ScoreBreakdown> {
        self.check_length(roster)?;
        Ok(engine::score(roster, self.catalog, self.profile))
    }

    /// Detailed scoring for reports (Rich Data)
    pub fn score_details(&self, roster: &Roster) -> TfResult<ScoreDetails> {
        self.check_length(roster)?;
        Ok(engine::score_details(roster, self.catalog, self.profile))
    }
}

impl RosterEvaluator for Scorer<'_> {
    fn evaluate(&self, roster: &Roster) -> ScoreBreakdown {
        debug_assert_eq!(roster.len(), self.team_size);
        engine::score(roster, self.catalog, self.profile)
    }
}
