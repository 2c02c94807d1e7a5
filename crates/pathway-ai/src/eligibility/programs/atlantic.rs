use super::Stream;
use crate::eligibility::domain::{
    CandidateProfile, DrawProbability, EducationLevel, JobOffer, ProgramResult, SkillTier,
};

/// Every stream here hangs off a designated-employer offer in an Atlantic province; without
/// one the module has nothing to report.
pub fn evaluate_atlantic(profile: &CandidateProfile, _crs: u32) -> Vec<ProgramResult> {
    let Some(offer) = profile
        .work
        .job_offer
        .as_ref()
        .filter(|offer| offer.jurisdiction.is_atlantic())
    else {
        return Vec::new();
    };

    let mut results = Vec::new();
    match offer.tier {
        SkillTier::High => results.push(high_skilled(profile, offer)),
        SkillTier::Semi | SkillTier::Entry => results.push(intermediate_skilled(profile, offer)),
    }
    if profile
        .education
        .completed_canadian()
        .is_some_and(|record| record.jurisdiction.is_atlantic())
    {
        results.push(international_graduate(profile, offer));
    }

    results
}

fn high_skilled(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(offer.jurisdiction, "Atlantic Immigration Program: High-Skilled");

    stream.require(
        profile.work.total_years() >= 1.0,
        "one year of skilled work experience in the last five years is required",
    );
    stream.require(profile.language.best_floor() >= 5, "CLB 5 is required");
    designated_employer_warnings(&mut stream);

    graded(stream)
        .checklist(&[
            "endorsement_certificate",
            "job_offer_form",
            "settlement_plan",
            "language_test",
        ])
        .finish()
}

fn intermediate_skilled(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(
        offer.jurisdiction,
        "Atlantic Immigration Program: Intermediate-Skilled",
    );

    stream.require(
        offer.tier == SkillTier::Semi,
        "offer must be in an intermediate-skilled occupation",
    );
    stream.require(
        profile.work.total_years() >= 1.0,
        "one year of work experience in the last five years is required",
    );
    stream.require(profile.language.best_floor() >= 4, "CLB 4 is required");
    designated_employer_warnings(&mut stream);

    graded(stream)
        .checklist(&[
            "endorsement_certificate",
            "job_offer_form",
            "settlement_plan",
            "language_test",
        ])
        .finish()
}

fn international_graduate(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(
        offer.jurisdiction,
        "Atlantic Immigration Program: International Graduate",
    );

    stream.require(
        profile
            .education
            .completed_canadian()
            .is_some_and(|record| record.level >= EducationLevel::TwoYear),
        "a two-year credential from a recognised Atlantic institution is required",
    );
    stream.require(profile.language.best_floor() >= 4, "CLB 4 is required");
    stream.warn("candidate must have lived in the region for 16 of the last 24 months of study");
    designated_employer_warnings(&mut stream);

    graded(stream)
        .checklist(&["endorsement_certificate", "degree_certificate", "settlement_plan"])
        .finish()
}

fn designated_employer_warnings(stream: &mut Stream) {
    stream.warn("employer must be designated by the province");
    stream.warn("a settlement plan from a designated service provider is required");
}

/// Pass/fail streams: endorsement depends on the employer, so a clean gate is only Medium.
fn graded(stream: Stream) -> Stream {
    let probability = if stream.is_eligible() {
        DrawProbability::Medium
    } else {
        DrawProbability::None
    };
    stream.probability(probability)
}
