use std::collections::BTreeSet;

use super::{Stream, Thresholds};
use crate::eligibility::crs::whole_years;
use crate::eligibility::domain::{
    CandidateProfile, DrawProbability, EducationLevel, Jurisdiction, ProgramResult,
};

const GRID_MAX: u32 = 1000;
const OVERSEAS_ROUND: Thresholds = Thresholds::new(700, 600, 500);
const OVERSEAS_CUTOFF: u32 = 650;
const IN_PROVINCE_ROUND: Thresholds = Thresholds::new(600, 500, 400);
const IN_PROVINCE_CUTOFF: u32 = 550;

const RISK_PENALTY: i32 = 100;

/// Manitoba ignores wage entirely and leans on connection strength instead.
pub fn evaluate_manitoba(profile: &CandidateProfile, _crs: u32) -> Vec<ProgramResult> {
    let mut results = Vec::new();
    let grid = ranking_grid(profile);

    if let Some(result) = skilled_worker_overseas(profile, grid) {
        results.push(result);
    }
    if profile.work.offer_in(Jurisdiction::Manitoba).is_some() {
        results.push(skilled_worker_in_manitoba(profile, grid));
        if let Some(result) = career_employment_pathway(profile) {
            results.push(result);
        }
    }

    results
}

fn skilled_worker_overseas(profile: &CandidateProfile, grid: u32) -> Option<ProgramResult> {
    let connections = &profile.connections;
    let connected = connections.relatives.contains(&Jurisdiction::Manitoba)
        || connections.friends.contains(&Jurisdiction::Manitoba)
        || connections.studied.contains(&Jurisdiction::Manitoba)
        || connections.worked.contains(&Jurisdiction::Manitoba);
    if !connected {
        return None;
    }

    let mut stream = Stream::new(Jurisdiction::Manitoba, "Skilled Worker Overseas");
    stream.require(profile.language.best_floor() >= 5, "CLB 5 is required");
    stream.require(
        profile.work.total_years() >= 2.0,
        "two years of full-time experience in the last five years are required",
    );
    stream.require(
        profile.education.level.is_post_secondary() || profile.education.trade_certificate,
        "one year of post-secondary education or training is required",
    );
    if connections.friends.contains(&Jurisdiction::Manitoba)
        && !connections.relatives.contains(&Jurisdiction::Manitoba)
    {
        stream.warn("friend and distant relative supporters must sign a settlement declaration");
    }
    stream.warn("an exploratory visit or invitation may be requested to confirm the connection");

    Some(
        stream
            .points(grid, GRID_MAX)
            .cutoff(OVERSEAS_CUTOFF)
            .ranked(OVERSEAS_ROUND)
            .checklist(&[
                "language_test",
                "proof_of_connection",
                "settlement_plan",
                "proof_of_funds",
            ])
            .finish(),
    )
}

fn skilled_worker_in_manitoba(profile: &CandidateProfile, grid: u32) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Manitoba, "Skilled Worker in Manitoba");

    stream.require(
        profile.work.current_jurisdiction == Jurisdiction::Manitoba,
        "candidate must currently be working for the Manitoba employer",
    );
    stream.require(
        profile.connections.worked.contains(&Jurisdiction::Manitoba),
        "six months of work for the supporting employer is required",
    );
    stream.require(profile.language.best_floor() >= 4, "CLB 4 is required");

    stream
        .points(grid, GRID_MAX)
        .cutoff(IN_PROVINCE_CUTOFF)
        .ranked(IN_PROVINCE_ROUND)
        .checklist(&[
            "job_offer_letter",
            "work_permit",
            "language_test",
            "employment_reference_letters",
        ])
        .finish()
}

fn career_employment_pathway(profile: &CandidateProfile) -> Option<ProgramResult> {
    let record = profile.education.completed_in(Jurisdiction::Manitoba)?;
    let mut stream = Stream::new(
        Jurisdiction::Manitoba,
        "International Education: Career Employment Pathway",
    );

    stream.require(
        record.level.is_post_secondary(),
        "a completed one-year Manitoba post-secondary program is required",
    );
    stream.require(profile.language.best_floor() >= 7, "CLB 7 is required");
    stream.warn("offer must be in an in-demand occupation related to the program of study");

    Some(
        stream
            .probability(DrawProbability::High)
            .checklist(&[
                "job_offer_letter",
                "degree_certificate",
                "official_transcripts",
                "language_test",
            ])
            .finish(),
    )
}

/// Five-factor ranking grid out of 1000, with risk deductions.
fn ranking_grid(profile: &CandidateProfile) -> u32 {
    let first_language: i32 = match profile.language.primary_floor() {
        0..=4 => 0,
        5 => 17,
        6 => 20,
        7 => 22,
        _ => 25,
    } * 4;
    let second_language: i32 = match profile.language.secondary_floor() {
        Some(clb) if clb >= 5 => 25,
        _ => 0,
    };

    let age: i32 = match profile.age {
        18 => 20,
        19 => 30,
        20 => 40,
        21..=45 => 75,
        46 => 40,
        47 => 30,
        48 => 20,
        49 => 10,
        _ => 0,
    };

    let experience: i32 = match whole_years(profile.work.total_years()) {
        0 => 0,
        1 => 40,
        2 => 50,
        3 => 60,
        _ => 75,
    };

    let education: i32 = match profile.education.level {
        EducationLevel::Masters | EducationLevel::PhD => 125,
        EducationLevel::Bachelors => 110,
        EducationLevel::TwoYear => 100,
        EducationLevel::OneYear => 70,
        EducationLevel::HighSchool if profile.education.trade_certificate => 70,
        EducationLevel::HighSchool => 0,
    };

    let connections = &profile.connections;
    let mut adaptability: i32 = 0;
    if connections.relatives.contains(&Jurisdiction::Manitoba) {
        adaptability += 200;
    } else if connections.friends.contains(&Jurisdiction::Manitoba) {
        adaptability += 50;
    }
    if connections.worked.contains(&Jurisdiction::Manitoba) {
        adaptability += 100;
    }
    if connections.studied.contains(&Jurisdiction::Manitoba) {
        adaptability += 100;
    }
    if profile.work.offer_in(Jurisdiction::Manitoba).is_some() {
        adaptability += 500;
    }
    let adaptability = adaptability.min(500);

    // Ties to another province count against the candidate.
    let elsewhere = |places: &BTreeSet<Jurisdiction>| {
        places
            .iter()
            .any(|place| place.is_domestic() && *place != Jurisdiction::Manitoba)
    };
    let mut risk: i32 = 0;
    if elsewhere(&connections.worked) {
        risk -= RISK_PENALTY;
    }
    if elsewhere(&connections.studied) {
        risk -= RISK_PENALTY;
    }
    if elsewhere(&connections.relatives)
        && !connections.relatives.contains(&Jurisdiction::Manitoba)
    {
        risk -= RISK_PENALTY;
    }

    let total =
        first_language + second_language + age + experience + education + adaptability + risk;
    total.clamp(0, GRID_MAX as i32) as u32
}
