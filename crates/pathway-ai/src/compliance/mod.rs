//! Cross-cutting risk analyses layered on top of the eligibility ranking.
//!
//! Each validator is a standalone decision procedure over its own narrow input and never
//! depends on the aggregator or on another validator.

pub mod legal;
pub mod status;
pub mod work_experience;

pub use legal::{
    analyze_legal_defense, CriminalRecord, DefenseStrategy, Inadmissibility,
    InadmissibilityGround, LegalDefense, LegalInput, MedicalCondition, RefusalReason,
    RefusalRecord,
};
pub use status::{
    analyze_status_strategy, ActionStep, Location, StatusInput, StatusState, StatusStrategy,
};
pub use work_experience::{
    validate_work_experience, ExperienceProgram, WorkExperienceInput, WorkExperienceValidation,
};

use chrono::{Local, NaiveDate};

/// Evaluation date used when a request leaves `as_of` out.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
