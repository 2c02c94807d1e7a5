use tracing::warn;

use super::domain::{CandidateProfile, ClbScores, LanguageSkill};

pub const MIN_AGE: u8 = 16;
pub const MAX_AGE: u8 = 100;
pub const MIN_CLB: u8 = 1;
pub const MAX_CLB: u8 = 12;

/// Validation errors raised before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("age {0} is outside the accepted range 16-100")]
    AgeOutOfRange(u8),
    #[error("{} score {value} is outside CLB 1-12", skill.label())]
    LanguageScoreOutOfRange { skill: LanguageSkill, value: u8 },
    #[error("{field} must be a finite, non-negative number")]
    NegativeOrNonFinite { field: &'static str },
    #[error("spouse details supplied for a single applicant")]
    SpouseWithoutMarriage,
}

/// Caller-side range checks. The engine assumes they have already passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    pub fn check(&self, profile: &CandidateProfile) -> Result<(), ProfileViolation> {
        let outcome = Self::validate(profile);
        if let Err(violation) = &outcome {
            warn!(%violation, "candidate profile rejected");
        }
        outcome
    }

    fn validate(profile: &CandidateProfile) -> Result<(), ProfileViolation> {
        if !(MIN_AGE..=MAX_AGE).contains(&profile.age) {
            return Err(ProfileViolation::AgeOutOfRange(profile.age));
        }

        check_scores(&profile.language.primary.scores)?;
        if let Some(secondary) = &profile.language.secondary {
            check_scores(&secondary.scores)?;
        }

        let work = &profile.work;
        non_negative("work.canadian_years", work.canadian_years)?;
        non_negative("work.foreign_years", work.foreign_years)?;
        if let Some(offer) = &work.job_offer {
            non_negative("work.job_offer.hourly_wage", offer.hourly_wage)?;
        }
        for record in &work.history {
            non_negative("work.history.years", record.years)?;
        }

        if profile.spouse.is_some() && !profile.is_married() {
            return Err(ProfileViolation::SpouseWithoutMarriage);
        }
        if let Some(scores) = profile.spouse.as_ref().and_then(|spouse| spouse.language) {
            check_scores(&scores)?;
        }

        Ok(())
    }
}

fn check_scores(scores: &ClbScores) -> Result<(), ProfileViolation> {
    for (skill, value) in scores.by_skill() {
        if !(MIN_CLB..=MAX_CLB).contains(&value) {
            return Err(ProfileViolation::LanguageScoreOutOfRange { skill, value });
        }
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ProfileViolation> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProfileViolation::NegativeOrNonFinite { field })
    }
}
