//! Eligibility engine: CRS scoring, jurisdiction program modules and ranking.
//!
//! Everything in here is a pure function over an immutable [`CandidateProfile`]. Range
//! validation happens earlier, in [`ProfileGuard`].

pub mod aggregator;
pub mod crs;
pub mod domain;
pub mod intake;
pub mod programs;

#[cfg(test)]
pub(crate) mod tests;

pub use aggregator::{assess, rank, EligibilityAggregator};
pub use crs::{calculate_crs, CrsBreakdown, CrsFactor, CrsResult, CRS_MAX};
pub use domain::{
    CandidateProfile, CanadianEducation, ClbScores, Connections, DrawProbability,
    EducationLevel, EducationProfile, FieldOfStudy, JobOffer, JobRecord, Jurisdiction,
    LanguageProfile, LanguageSkill, LanguageTest, MaritalStatus, OccupationCategory,
    OfficialLanguage, ProgramResult, SkillTier, SpouseProfile, WorkProfile,
};
pub use intake::{ProfileGuard, ProfileViolation};
pub use programs::{ProgramModule, ProgramRegistry, UnknownProgram, STANDARD_MODULES};
