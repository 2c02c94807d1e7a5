use super::{Stream, Thresholds};
use crate::eligibility::crs::whole_years;
use crate::eligibility::domain::{
    CandidateProfile, EducationLevel, Jurisdiction, OccupationCategory, ProgramResult,
};

const GRID_MAX: u32 = 110;
const PASS_MARK: u32 = 60;
const EOI_ROUND: Thresholds = Thresholds::new(80, 70, PASS_MARK - 1);
const FUNDS_SINGLE: u32 = 13_757;

/// Occupations excluded from the in-demand sub-category.
const EXCLUDED_OCCUPATIONS: [OccupationCategory; 2] =
    [OccupationCategory::Hospitality, OccupationCategory::Other];

pub fn evaluate_saskatchewan(profile: &CandidateProfile, _crs: u32) -> Vec<ProgramResult> {
    let grid = assessment_grid(profile);
    let mut results = vec![occupation_in_demand(profile, grid), express_entry(profile, grid)];

    if profile.work.offer_in(Jurisdiction::Saskatchewan).is_some() {
        results.push(employment_offer(profile, grid));
    }

    results
}

fn occupation_in_demand(profile: &CandidateProfile, grid: u32) -> ProgramResult {
    let mut stream = Stream::new(
        Jurisdiction::Saskatchewan,
        "International Skilled Worker: Occupation In-Demand",
    );

    common_gates(&mut stream, profile, grid);
    stream.require(
        has_in_demand_experience(profile),
        "one year of experience in an in-demand occupation is required",
    );
    stream.require(
        profile.settlement_funds >= FUNDS_SINGLE,
        format!("settlement funds of at least ${FUNDS_SINGLE} are required"),
    );

    stream
        .points(grid, GRID_MAX)
        .cutoff(PASS_MARK)
        .ranked(EOI_ROUND)
        .checklist(&[
            "language_test",
            "educational_credential_assessment",
            "proof_of_funds",
            "employment_reference_letters",
        ])
        .finish()
}

fn express_entry(profile: &CandidateProfile, grid: u32) -> ProgramResult {
    let mut stream = Stream::new(
        Jurisdiction::Saskatchewan,
        "International Skilled Worker: Saskatchewan Express Entry",
    );

    common_gates(&mut stream, profile, grid);
    stream.require_pool_entry(profile);
    stream.require(
        has_in_demand_experience(profile),
        "one year of experience in an in-demand occupation is required",
    );

    stream
        .points(grid, GRID_MAX)
        .cutoff(PASS_MARK)
        .ranked(EOI_ROUND)
        .checklist(&[
            "express_entry_profile",
            "language_test",
            "educational_credential_assessment",
            "employment_reference_letters",
        ])
        .finish()
}

fn employment_offer(profile: &CandidateProfile, grid: u32) -> ProgramResult {
    let mut stream = Stream::new(
        Jurisdiction::Saskatchewan,
        "International Skilled Worker: Employment Offer",
    );

    common_gates(&mut stream, profile, grid);
    stream.warn("employer must hold a Job Approval Letter from the province");

    stream
        .points(grid, GRID_MAX)
        .cutoff(PASS_MARK)
        .ranked(EOI_ROUND)
        .checklist(&[
            "job_approval_letter",
            "job_offer_letter",
            "language_test",
            "employment_reference_letters",
        ])
        .finish()
}

fn common_gates(stream: &mut Stream, profile: &CandidateProfile, grid: u32) {
    stream.require(
        grid >= PASS_MARK,
        format!("assessment grid score {grid}/{GRID_MAX} is below the pass mark of {PASS_MARK}"),
    );
    stream.require(profile.language.best_floor() >= 4, "CLB 4 is required");
    stream.require(
        profile.education.level.is_post_secondary() || profile.education.trade_certificate,
        "one year of post-secondary education or trade training is required",
    );
}

fn has_in_demand_experience(profile: &CandidateProfile) -> bool {
    profile
        .work
        .history
        .iter()
        .filter(|record| !EXCLUDED_OCCUPATIONS.contains(&record.occupation))
        .map(|record| record.years)
        .sum::<f32>()
        >= 1.0
}

/// Point assessment grid out of 110.
fn assessment_grid(profile: &CandidateProfile) -> u32 {
    let education = match profile.education.level {
        EducationLevel::Masters | EducationLevel::PhD => 23,
        EducationLevel::Bachelors => 20,
        EducationLevel::TwoYear => 15,
        EducationLevel::OneYear => 12,
        EducationLevel::HighSchool if profile.education.trade_certificate => 12,
        EducationLevel::HighSchool => 0,
    };

    // Recent experience counts up to five years, older experience adds a smaller bonus.
    let years = whole_years(profile.work.total_years());
    let recent = match years.min(5) {
        0 => 0,
        n => 2 * n,
    };
    let prior = match years.saturating_sub(5) {
        0 => 0,
        1 | 2 => 2,
        3 | 4 => 4,
        _ => 5,
    };

    let first_language: u32 = match profile.language.primary_floor() {
        0..=3 => 0,
        4 => 12,
        5 => 14,
        6 => 16,
        7 => 18,
        _ => 20,
    };
    let second_language = match profile.language.secondary_floor() {
        Some(clb) if clb >= 7 => 10,
        Some(clb) if clb >= 4 => 5,
        _ => 0,
    };

    let age = match profile.age {
        18..=21 => 8,
        22..=34 => 12,
        35..=45 => 10,
        46..=50 => 8,
        _ => 0,
    };

    let connections = &profile.connections;
    let mut connection: u32 = 0;
    if profile.work.offer_in(Jurisdiction::Saskatchewan).is_some() {
        connection += 30;
    }
    if connections.relatives.contains(&Jurisdiction::Saskatchewan) {
        connection += 20;
    }
    if connections.worked.contains(&Jurisdiction::Saskatchewan) {
        connection += 5;
    }
    if connections.studied.contains(&Jurisdiction::Saskatchewan) {
        connection += 5;
    }

    education
        + recent
        + prior
        + (first_language + second_language).min(30)
        + age
        + connection.min(30)
}
