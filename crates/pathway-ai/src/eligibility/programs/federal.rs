use super::{Stream, Thresholds};
use crate::eligibility::crs::{whole_years, CRS_MAX};
use crate::eligibility::domain::{
    CandidateProfile, EducationLevel, Jurisdiction, OccupationCategory, OfficialLanguage,
    ProgramResult, SkillTier,
};

const GENERAL_ROUND: Thresholds = Thresholds::new(520, 490, 450);
const GENERAL_CUTOFF: u32 = 520;
const CATEGORY_ROUND: Thresholds = Thresholds::new(470, 430, 400);
const CATEGORY_CUTOFF: u32 = 470;

const FSW_PASS_MARK: u32 = 67;
const FSW_MAX: u32 = 100;
const FUNDS_SINGLE: u32 = 14_690;
const FUNDS_COUPLE: u32 = 18_288;
const CATEGORY_MIN_YEARS: f32 = 0.5;

pub fn evaluate_federal(profile: &CandidateProfile, crs: u32) -> Vec<ProgramResult> {
    let cec = canadian_experience_class(profile, crs);
    let fsw = federal_skilled_worker(profile, crs);
    let fst = federal_skilled_trades(profile, crs);
    let pool_eligible = cec.eligible || fsw.eligible || fst.eligible;
    let category = category_based(profile, crs, pool_eligible);

    vec![cec, fsw, fst, category]
}

fn canadian_experience_class(profile: &CandidateProfile, crs: u32) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Federal, "Express Entry: Canadian Experience Class");
    let clb = profile.language.best_floor();

    stream.require(
        profile.work.canadian_years >= 1.0,
        "at least one year of skilled Canadian work experience is required",
    );
    stream.require(clb >= 5, format!("minimum CLB 5 required, best language floor is CLB {clb}"));
    if (5..7).contains(&clb) {
        stream.warn("CLB 5-6 only qualifies TEER 2 and 3 occupations; TEER 0 and 1 need CLB 7");
    }
    stream.warn("Canadian experience must be authorized and gained outside full-time study");

    stream
        .points(crs, CRS_MAX)
        .cutoff(GENERAL_CUTOFF)
        .ranked(GENERAL_ROUND)
        .checklist(&[
            "passport",
            "language_test",
            "employment_reference_letters",
            "police_certificates",
        ])
        .finish()
}

fn federal_skilled_worker(profile: &CandidateProfile, crs: u32) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Federal, "Express Entry: Federal Skilled Worker");
    let grid = selection_grid(profile);

    stream.require(
        profile.work.total_years() >= 1.0,
        "one year of continuous skilled work experience is required",
    );
    stream.require(
        profile.language.primary_floor() >= 7,
        "CLB 7 in every skill of the first official language is required",
    );
    stream.require(
        grid >= FSW_PASS_MARK,
        format!("selection grid score {grid}/{FSW_MAX} is below the pass mark of {FSW_PASS_MARK}"),
    );

    let has_arranged_employment = profile
        .work
        .job_offer
        .as_ref()
        .is_some_and(|offer| offer.tier == SkillTier::High);
    let authorized_in_country = profile.work.current_jurisdiction.is_domestic();
    if !has_arranged_employment && !authorized_in_country {
        let required = if profile.is_married() {
            FUNDS_COUPLE
        } else {
            FUNDS_SINGLE
        };
        stream.require(
            profile.settlement_funds >= required,
            format!(
                "settlement funds of ${} are below the required ${required}",
                profile.settlement_funds
            ),
        );
    }

    if profile.education.completed_canadian().is_none() {
        stream.warn("foreign credentials need an Educational Credential Assessment");
    }

    stream
        .points(crs, CRS_MAX)
        .cutoff(GENERAL_CUTOFF)
        .ranked(GENERAL_ROUND)
        .checklist(&[
            "passport",
            "language_test",
            "educational_credential_assessment",
            "employment_reference_letters",
            "proof_of_funds",
            "police_certificates",
        ])
        .finish()
}

fn federal_skilled_trades(profile: &CandidateProfile, crs: u32) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Federal, "Express Entry: Federal Skilled Trades");
    let scores = profile.language.primary.scores;
    let trade_offer = profile
        .work
        .job_offer
        .as_ref()
        .is_some_and(|offer| offer.occupation == OccupationCategory::Trades);

    stream.require(
        profile.education.trade_certificate || trade_offer,
        "a certificate of qualification or a job offer in a skilled trade is required",
    );
    stream.require(
        profile.work.years_in(OccupationCategory::Trades) >= 2.0,
        "two years of experience in a skilled trade are required",
    );
    stream.require(
        scores.speaking >= 5 && scores.listening >= 5 && scores.reading >= 4 && scores.writing >= 4,
        "CLB 5 speaking and listening and CLB 4 reading and writing are required",
    );

    stream
        .points(crs, CRS_MAX)
        .cutoff(GENERAL_CUTOFF)
        .ranked(GENERAL_ROUND)
        .checklist(&[
            "passport",
            "language_test",
            "trade_certificate",
            "employment_reference_letters",
        ])
        .finish()
}

fn category_based(profile: &CandidateProfile, crs: u32, pool_eligible: bool) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Federal, "Express Entry: Category-Based Selection");
    let occupation_years = [
        OccupationCategory::Technology,
        OccupationCategory::Healthcare,
        OccupationCategory::Trades,
    ]
    .iter()
    .map(|category| profile.work.years_in(*category))
    .fold(0.0_f32, f32::max);
    let french = profile
        .language
        .floor_for(OfficialLanguage::French)
        .is_some_and(|clb| clb >= 7);

    stream.require(pool_eligible, "no Express Entry class is met");
    stream.require(
        profile.education.field.is_priority() || occupation_years >= CATEGORY_MIN_YEARS || french,
        "no STEM, health, trade or French-language category applies",
    );
    stream.warn("category rounds are held irregularly and cut-offs vary between rounds");

    stream
        .points(crs, CRS_MAX)
        .cutoff(CATEGORY_CUTOFF)
        .ranked(CATEGORY_ROUND)
        .checklist(&["passport", "language_test", "employment_reference_letters"])
        .finish()
}

/// Six-factor selection grid out of 100.
fn selection_grid(profile: &CandidateProfile) -> u32 {
    let first = match profile.language.primary_floor() {
        0..=6 => 0,
        7 => 4,
        8 => 5,
        _ => 6,
    } * 4;
    let second = match profile.language.secondary_floor() {
        Some(clb) if clb >= 5 => 4,
        _ => 0,
    };

    let education = match profile.education.level {
        EducationLevel::HighSchool => 5,
        EducationLevel::OneYear => 15,
        EducationLevel::TwoYear => 19,
        EducationLevel::Bachelors => 21,
        EducationLevel::Masters => 23,
        EducationLevel::PhD => 25,
    };

    let experience = match whole_years(profile.work.total_years()) {
        0 => 0,
        1 => 9,
        2 | 3 => 11,
        4 | 5 => 13,
        _ => 15,
    };

    let age = match profile.age {
        18..=35 => 12,
        36..=46 => 47 - u32::from(profile.age),
        _ => 0,
    };

    let arranged = profile
        .work
        .job_offer
        .as_ref()
        .is_some_and(|offer| offer.tier == SkillTier::High);
    let arranged_points = if arranged { 10 } else { 0 };

    let mut adaptability: u32 = 0;
    if profile
        .spouse
        .as_ref()
        .and_then(|spouse| spouse.language)
        .is_some_and(|scores| scores.floor() >= 4)
    {
        adaptability += 5;
    }
    if profile.education.completed_canadian().is_some() {
        adaptability += 5;
    }
    if profile.work.canadian_years >= 1.0 {
        adaptability += 10;
    }
    if arranged {
        adaptability += 5;
    }
    if profile.connections.has_relative_in_country() {
        adaptability += 5;
    }

    first + second + education + experience + age + arranged_points + adaptability.min(10)
}
