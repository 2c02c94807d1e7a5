//! Assessment facade combining the ranked opportunities with the compliance findings.

pub mod router;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::compliance::{
    analyze_legal_defense, analyze_status_strategy, validate_work_experience, LegalDefense,
    LegalInput, StatusInput, StatusStrategy, WorkExperienceInput, WorkExperienceValidation,
};
use crate::eligibility::{
    calculate_crs, CandidateProfile, CrsResult, EligibilityAggregator, ProfileGuard,
    ProfileViolation, ProgramRegistry, ProgramResult,
};

pub use router::assessment_router;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub work_experience: Option<WorkExperienceInput>,
    #[serde(default)]
    pub status: Option<StatusInput>,
    #[serde(default)]
    pub legal: Option<LegalInput>,
}

impl AssessmentRequest {
    pub fn for_profile(profile: CandidateProfile) -> Self {
        Self {
            profile,
            work_experience: None,
            status: None,
            legal: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<WorkExperienceValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<LegalDefense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub crs: CrsResult,
    pub opportunities: Vec<ProgramResult>,
    pub eligible_count: usize,
    pub compliance: ComplianceFindings,
}

impl AssessmentReport {
    /// Highest-ranked eligible opportunity.
    pub fn best(&self) -> Option<&ProgramResult> {
        self.opportunities.iter().find(|result| result.eligible)
    }
}

/// Service composing the intake guard, the aggregator and the compliance validators.
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    guard: ProfileGuard,
    aggregator: EligibilityAggregator,
}

impl AssessmentService {
    pub fn new(registry: ProgramRegistry) -> Self {
        Self {
            guard: ProfileGuard,
            aggregator: EligibilityAggregator::new(registry),
        }
    }

    pub fn registry(&self) -> &ProgramRegistry {
        self.aggregator.registry()
    }

    pub fn assess(&self, request: AssessmentRequest) -> Result<AssessmentReport, AssessmentError> {
        let AssessmentRequest {
            profile,
            work_experience,
            status,
            legal,
        } = request;

        self.guard.check(&profile)?;

        let crs = calculate_crs(&profile);
        let opportunities = self.aggregator.assess_with_crs(&profile, crs.total);
        let eligible_count = opportunities.iter().filter(|result| result.eligible).count();

        let compliance = ComplianceFindings {
            work_experience: work_experience.as_ref().map(validate_work_experience),
            status: status.as_ref().map(analyze_status_strategy),
            legal: legal.as_ref().map(analyze_legal_defense),
        };

        info!(
            crs = crs.total,
            opportunities = opportunities.len(),
            eligible = eligible_count,
            "assessment completed"
        );

        Ok(AssessmentReport {
            crs,
            opportunities,
            eligible_count,
            compliance,
        })
    }

    /// CRS only, behind the same intake guard.
    pub fn score(&self, profile: &CandidateProfile) -> Result<CrsResult, AssessmentError> {
        self.guard.check(profile)?;
        Ok(calculate_crs(profile))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Profile(#[from] ProfileViolation),
}
