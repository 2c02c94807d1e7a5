use super::{Stream, Thresholds};
use crate::eligibility::crs::CRS_MAX;
use crate::eligibility::domain::{
    CandidateProfile, DrawProbability, EducationLevel, FieldOfStudy, JobOffer, Jurisdiction,
    OccupationCategory, OfficialLanguage, ProgramResult, SkillTier,
};

const HCP_ROUND: Thresholds = Thresholds::new(490, 460, 430);
const HCP_TECH_ROUND: Thresholds = Thresholds::new(470, 440, 410);
const HCP_CUTOFF: u32 = 460;

const GRADUATE_MAX: u32 = 60;
const GRADUATE_ROUND: Thresholds = Thresholds::new(45, 38, 30);
const GRADUATE_CUTOFF: u32 = 40;

const EMPLOYER_MAX: u32 = 50;
const EMPLOYER_ROUND: Thresholds = Thresholds::new(36, 29, 22);
const EMPLOYER_CUTOFF: u32 = 30;

/// Study-location bonus; city of study is not collected so every graduate gets the midpoint.
const REGIONAL_POINTS: u32 = 4;

pub fn evaluate_ontario(profile: &CandidateProfile, crs: u32) -> Vec<ProgramResult> {
    let mut results = vec![human_capital_priorities(profile, crs)];

    if let Some(result) = french_speaking_skilled_worker(profile) {
        results.push(result);
    }
    for level in [EducationLevel::Masters, EducationLevel::PhD] {
        if let Some(result) = graduate_stream(profile, level) {
            results.push(result);
        }
    }
    if let Some(offer) = profile.work.offer_in(Jurisdiction::Ontario) {
        results.push(employer_job_offer(profile, offer));
    }

    results
}

fn human_capital_priorities(profile: &CandidateProfile, crs: u32) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Ontario, "Express Entry: Human Capital Priorities");

    stream.require(
        profile.education.level >= EducationLevel::Bachelors,
        "a bachelor's degree or higher is required",
    );
    stream.require(
        profile.language.best_floor() >= 7,
        "CLB 7 in every skill is required",
    );
    stream.require(
        profile.work.total_years() >= 1.0,
        "one year of continuous full-time experience is required",
    );
    if !profile.targets(Jurisdiction::Ontario) {
        stream.warn("intention to reside in Ontario must be declared");
    }

    let tech = profile.work.years_in(OccupationCategory::Technology) >= 1.0;
    let round = if tech {
        stream.warn("technology occupations have been targeted with lower cut-offs");
        HCP_TECH_ROUND
    } else {
        HCP_ROUND
    };

    stream
        .points(crs, CRS_MAX)
        .cutoff(HCP_CUTOFF)
        .ranked(round)
        .checklist(&[
            "express_entry_profile",
            "language_test",
            "educational_credential_assessment",
            "proof_of_funds",
        ])
        .finish()
}

fn french_speaking_skilled_worker(profile: &CandidateProfile) -> Option<ProgramResult> {
    let french = profile.language.floor_for(OfficialLanguage::French)?;
    let english = profile
        .language
        .floor_for(OfficialLanguage::English)
        .unwrap_or(0);
    let mut stream = Stream::new(
        Jurisdiction::Ontario,
        "Express Entry: French-Speaking Skilled Worker",
    );

    stream.require(french >= 7, format!("NCLC 7 in French is required, found {french}"));
    stream.require(english >= 6, format!("CLB 6 in English is required, found {english}"));
    stream.require(
        profile.work.total_years() >= 1.0,
        "one year of continuous full-time experience is required",
    );
    stream.require_pool_entry(profile);

    Some(
        stream
            .probability(DrawProbability::High)
            .checklist(&["express_entry_profile", "language_test", "french_language_test"])
            .finish(),
    )
}

fn graduate_stream(profile: &CandidateProfile, level: EducationLevel) -> Option<ProgramResult> {
    let record = profile.education.completed_in(Jurisdiction::Ontario)?;
    if record.level != level {
        return None;
    }

    let name = match level {
        EducationLevel::PhD => "PhD Graduate",
        _ => "Masters Graduate",
    };
    let mut stream = Stream::new(Jurisdiction::Ontario, name);

    if level == EducationLevel::Masters {
        stream.require(
            profile.language.best_floor() >= 7,
            "CLB 7 in English or French is required",
        );
    }
    stream.warn("application must be made within two years of degree completion");
    if !profile.targets(Jurisdiction::Ontario) {
        stream.warn("intention to reside in Ontario must be declared");
    }

    let level_points = if level == EducationLevel::PhD { 10 } else { 8 };
    let field_points = match profile.education.field {
        FieldOfStudy::Stem | FieldOfStudy::Health | FieldOfStudy::Trades => 12,
        FieldOfStudy::Business | FieldOfStudy::SocialSciences | FieldOfStudy::Education => 6,
        FieldOfStudy::Arts | FieldOfStudy::Other => 0,
    };
    let canadian_credential = 5;
    let bilingual = both_languages_points(profile);
    let score = level_points
        + field_points
        + canadian_credential
        + language_points(profile)
        + bilingual
        + REGIONAL_POINTS;

    Some(
        stream
            .points(score, GRADUATE_MAX)
            .cutoff(GRADUATE_CUTOFF)
            .ranked(GRADUATE_ROUND)
            .checklist(&[
                "degree_certificate",
                "official_transcripts",
                "language_test",
                "proof_of_funds",
            ])
            .finish(),
    )
}

fn employer_job_offer(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let (name, tier_points) = match offer.tier {
        SkillTier::High => ("Employer Job Offer: Foreign Worker", 10),
        SkillTier::Semi | SkillTier::Entry => ("Employer Job Offer: In-Demand Skills", 8),
    };
    let mut stream = Stream::new(Jurisdiction::Ontario, name);

    if offer.tier != SkillTier::High {
        stream.require(
            matches!(
                offer.occupation,
                OccupationCategory::Agriculture
                    | OccupationCategory::Trades
                    | OccupationCategory::Healthcare
                    | OccupationCategory::Transport
            ),
            "occupation is not on the in-demand list",
        );
        stream.require(profile.language.best_floor() >= 4, "CLB 4 is required");
    }
    stream.warn("offer must be full-time, permanent and meet the prevailing wage");

    let wage_points = match offer.hourly_wage {
        w if w >= 40.0 => 10,
        w if w >= 35.0 => 8,
        w if w >= 30.0 => 7,
        w if w >= 25.0 => 6,
        w if w >= 20.0 => 5,
        _ => 0,
    };
    let sector_points = match offer.occupation {
        OccupationCategory::Healthcare | OccupationCategory::Technology => 5,
        OccupationCategory::Trades => 4,
        _ => 0,
    };
    let ontario_experience = if profile.connections.worked.contains(&Jurisdiction::Ontario) {
        4
    } else {
        0
    };
    let earnings = if profile
        .work
        .history
        .iter()
        .any(|record| record.annual_earnings >= 40_000)
    {
        3
    } else {
        0
    };
    let score = wage_points
        + tier_points
        + sector_points
        + ontario_experience
        + earnings
        + language_points(profile)
        + REGIONAL_POINTS;

    stream
        .points(score, EMPLOYER_MAX)
        .cutoff(EMPLOYER_CUTOFF)
        .ranked(EMPLOYER_ROUND)
        .checklist(&[
            "job_offer_form",
            "employer_information_form",
            "language_test",
            "employment_reference_letters",
        ])
        .finish()
}

fn language_points(profile: &CandidateProfile) -> u32 {
    match profile.language.best_floor() {
        0..=6 => 0,
        7 => 4,
        8 => 6,
        _ => 10,
    }
}

fn both_languages_points(profile: &CandidateProfile) -> u32 {
    let english = profile.language.floor_for(OfficialLanguage::English);
    let french = profile.language.floor_for(OfficialLanguage::French);
    match (english, french) {
        (Some(en), Some(fr)) if en >= 6 && fr >= 6 => 10,
        _ => 0,
    }
}
