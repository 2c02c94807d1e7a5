//! Eligibility assessment engine for skilled-immigration pathways.
//!
//! [`eligibility`] holds the CRS calculator, the jurisdiction program modules and the
//! ranking aggregator; [`compliance`] holds the three risk validators; [`assessment`]
//! combines both behind one service and an axum router.

pub mod assessment;
pub mod compliance;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;

pub use assessment::{
    assessment_router, AssessmentError, AssessmentReport, AssessmentRequest, AssessmentService,
};
pub use eligibility::{assess, calculate_crs, CandidateProfile, ProgramResult};
