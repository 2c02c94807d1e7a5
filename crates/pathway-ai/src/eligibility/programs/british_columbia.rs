use super::{enters_express_entry_pool, Stream, Thresholds};
use crate::eligibility::crs::whole_years;
use crate::eligibility::domain::{
    CandidateProfile, DrawProbability, EducationLevel, FieldOfStudy, JobOffer, Jurisdiction,
    OccupationCategory, OfficialLanguage, ProgramResult, SkillTier,
};

const SIRS_MAX: u32 = 200;
const SKILLED_ROUND: Thresholds = Thresholds::new(110, 95, 80);
const SKILLED_CUTOFF: u32 = 100;
const ENTRY_ROUND: Thresholds = Thresholds::new(100, 85, 70);
const ENTRY_CUTOFF: u32 = 90;

/// Area-of-employment bonus; the community of the offer is not collected.
const REGIONAL_POINTS: u32 = 10;

pub fn evaluate_british_columbia(profile: &CandidateProfile, _crs: u32) -> Vec<ProgramResult> {
    let mut results = Vec::new();

    if let Some(offer) = profile.work.offer_in(Jurisdiction::BritishColumbia) {
        match offer.tier {
            SkillTier::High => results.push(skilled_worker(profile, offer)),
            SkillTier::Semi | SkillTier::Entry => results.push(entry_level(profile, offer)),
        }
        if offer.occupation == OccupationCategory::Healthcare {
            results.push(healthcare_professional(profile));
        }
        if profile.education.completed_canadian().is_some() {
            results.push(international_graduate(profile, offer));
        }
    }

    if let Some(result) = international_post_graduate(profile) {
        results.push(result);
    }

    results
}

fn skilled_worker(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(
        Jurisdiction::BritishColumbia,
        "Skills Immigration: Skilled Worker",
    );

    stream.require(
        profile.work.total_years() >= 2.0,
        "two years of directly related experience are required",
    );
    stream.warn("employer must have operated in British Columbia for at least one year");
    if enters_express_entry_pool(profile) && profile.language.best_floor() >= 7 {
        stream.warn("Express Entry BC option is available with an active Express Entry profile");
    }

    stream
        .points(registration_score(profile, offer), SIRS_MAX)
        .cutoff(SKILLED_CUTOFF)
        .ranked(SKILLED_ROUND)
        .checklist(&[
            "job_offer_letter",
            "employer_declaration",
            "language_test",
            "employment_reference_letters",
        ])
        .finish()
}

fn entry_level(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(
        Jurisdiction::BritishColumbia,
        "Skills Immigration: Entry Level and Semi-Skilled",
    );

    stream.require(
        matches!(
            offer.occupation,
            OccupationCategory::Hospitality
                | OccupationCategory::Agriculture
                | OccupationCategory::Transport
        ),
        "only tourism, food processing and long-haul trucking occupations qualify",
    );
    stream.require(
        profile.work.current_jurisdiction == Jurisdiction::BritishColumbia,
        "candidate must currently be working for the employer in British Columbia",
    );
    stream.require(profile.language.best_floor() >= 4, "CLB 4 is required");

    stream
        .points(registration_score(profile, offer), SIRS_MAX)
        .cutoff(ENTRY_CUTOFF)
        .ranked(ENTRY_ROUND)
        .checklist(&["job_offer_letter", "employer_declaration", "language_test", "work_permit"])
        .finish()
}

fn healthcare_professional(profile: &CandidateProfile) -> ProgramResult {
    let mut stream = Stream::new(
        Jurisdiction::BritishColumbia,
        "Skills Immigration: Healthcare Professional",
    );

    stream.require(
        profile.work.years_in(OccupationCategory::Healthcare) >= 1.0,
        "experience in the offered health occupation is required",
    );
    stream.warn("offer must come from a public health authority or eligible private employer");
    stream.warn("professional registration with the provincial regulator is required");

    stream
        .probability(DrawProbability::High)
        .checklist(&[
            "job_offer_letter",
            "professional_registration",
            "employment_reference_letters",
        ])
        .finish()
}

fn international_graduate(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(
        Jurisdiction::BritishColumbia,
        "Skills Immigration: International Graduate",
    );

    stream.require(
        offer.tier == SkillTier::High,
        "offer must be in a high-skilled occupation",
    );
    stream.require(
        profile
            .education
            .completed_canadian()
            .is_some_and(|record| record.level.is_post_secondary()),
        "a completed Canadian post-secondary credential is required",
    );
    stream.warn("credential must have been completed within the last three years");

    stream
        .points(registration_score(profile, offer), SIRS_MAX)
        .cutoff(SKILLED_CUTOFF)
        .ranked(SKILLED_ROUND)
        .checklist(&["job_offer_letter", "degree_certificate", "official_transcripts"])
        .finish()
}

fn international_post_graduate(profile: &CandidateProfile) -> Option<ProgramResult> {
    let record = profile.education.completed_in(Jurisdiction::BritishColumbia)?;
    if record.level < EducationLevel::Masters {
        return None;
    }
    let mut stream = Stream::new(
        Jurisdiction::BritishColumbia,
        "Skills Immigration: International Post-Graduate",
    );

    stream.require(
        matches!(profile.education.field, FieldOfStudy::Stem | FieldOfStudy::Health),
        "degree must be in natural, applied or health sciences",
    );
    stream.warn("application must be made within three years of graduation");

    Some(
        stream
            .probability(DrawProbability::High)
            .checklist(&["degree_certificate", "official_transcripts", "proof_of_funds"])
            .finish(),
    )
}

/// Skills Immigration Registration System score.
fn registration_score(profile: &CandidateProfile, offer: &JobOffer) -> u32 {
    let skill = match offer.tier {
        SkillTier::High => 25,
        SkillTier::Semi => 10,
        SkillTier::Entry => 5,
    };

    let annual = offer.annual_wage();
    let wage = match annual {
        w if w >= 100_000.0 => 55,
        w if w >= 90_000.0 => 50,
        w if w >= 80_000.0 => 45,
        w if w >= 70_000.0 => 40,
        w if w >= 60_000.0 => 33,
        w if w >= 50_000.0 => 25,
        w if w >= 40_000.0 => 15,
        w if w >= 30_000.0 => 5,
        _ => 0,
    };

    let experience = match whole_years(profile.work.total_years()) {
        0 if profile.work.total_years() > 0.0 => 1,
        0 => 0,
        1 => 4,
        2 => 8,
        3 => 12,
        4 => 16,
        _ => 20,
    };
    let canadian_bonus = if profile.work.canadian_years >= 1.0 { 10 } else { 0 };

    let education = match profile.education.level {
        EducationLevel::HighSchool => 0,
        EducationLevel::OneYear | EducationLevel::TwoYear => 4,
        EducationLevel::Bachelors => 11,
        EducationLevel::Masters | EducationLevel::PhD => 17,
    };
    let education_bonus = match profile.education.completed_canadian() {
        Some(record) if record.jurisdiction == Jurisdiction::BritishColumbia => 8,
        Some(_) => 6,
        None => 0,
    };

    let language = match profile.language.best_floor() {
        0..=3 => 0,
        4 => 6,
        5 => 10,
        6 => 14,
        7 => 18,
        8 => 22,
        9 => 26,
        _ => 30,
    };
    let bilingual = match (
        profile.language.floor_for(OfficialLanguage::English),
        profile.language.floor_for(OfficialLanguage::French),
    ) {
        (Some(en), Some(fr)) if en >= 4 && fr >= 4 => 10,
        _ => 0,
    };

    skill
        + wage
        + REGIONAL_POINTS
        + experience
        + canadian_bonus
        + education
        + education_bonus
        + language
        + bilingual
}
