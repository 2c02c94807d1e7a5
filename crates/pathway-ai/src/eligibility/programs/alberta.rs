use super::{Stream, Thresholds};
use crate::eligibility::crs::CRS_MAX;
use crate::eligibility::domain::{
    CandidateProfile, DrawProbability, JobOffer, Jurisdiction, OccupationCategory, ProgramResult,
    SkillTier,
};

const EXPRESS_ENTRY_MIN_CRS: u32 = 300;
const EXPRESS_ENTRY_ROUND: Thresholds = Thresholds::new(400, 350, EXPRESS_ENTRY_MIN_CRS);

const OPPORTUNITY_MAX: u32 = 70;
const OPPORTUNITY_ROUND: Thresholds = Thresholds::new(50, 40, 30);
const OPPORTUNITY_CUTOFF: u32 = 45;

/// Rural workplace bonus; employer location beyond the province is not collected.
const REGIONAL_POINTS: u32 = 5;

const PRIORITY_SECTORS: [OccupationCategory; 4] = [
    OccupationCategory::Healthcare,
    OccupationCategory::Technology,
    OccupationCategory::Agriculture,
    OccupationCategory::Trades,
];

pub fn evaluate_alberta(profile: &CandidateProfile, crs: u32) -> Vec<ProgramResult> {
    let mut results = vec![express_entry(profile, crs)];

    if let Some(offer) = profile.work.offer_in(Jurisdiction::Alberta) {
        if offer.occupation == OccupationCategory::Technology {
            results.push(accelerated_tech(profile));
        }
        results.push(opportunity_stream(profile, offer));
        results.push(rural_renewal(profile));
    }

    results
}

fn express_entry(profile: &CandidateProfile, crs: u32) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Alberta, "Alberta Express Entry");
    let connections = &profile.connections;
    let tied = profile.work.current_jurisdiction == Jurisdiction::Alberta
        || connections.worked.contains(&Jurisdiction::Alberta)
        || connections.studied.contains(&Jurisdiction::Alberta)
        || connections.relatives.contains(&Jurisdiction::Alberta)
        || profile.work.offer_in(Jurisdiction::Alberta).is_some();
    let priority_sector = PRIORITY_SECTORS
        .iter()
        .any(|sector| profile.work.years_in(*sector) >= 1.0);

    stream.require(
        crs >= EXPRESS_ENTRY_MIN_CRS,
        format!("CRS {crs} is below the provincial minimum of {EXPRESS_ENTRY_MIN_CRS}"),
    );
    stream.require_pool_entry(profile);
    stream.require(
        tied || priority_sector,
        "an Alberta connection or experience in a priority sector is required",
    );
    if !profile.targets(Jurisdiction::Alberta) {
        stream.warn("intention to reside in Alberta must be declared");
    }

    stream
        .points(crs, CRS_MAX)
        .cutoff(EXPRESS_ENTRY_MIN_CRS)
        .ranked(EXPRESS_ENTRY_ROUND)
        .checklist(&["express_entry_profile", "language_test", "proof_of_connection"])
        .finish()
}

fn accelerated_tech(profile: &CandidateProfile) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Alberta, "Accelerated Tech Pathway");

    stream.require_pool_entry(profile);
    stream.require(
        profile.language.best_floor() >= 5,
        "CLB 5 is required for Express Entry eligibility",
    );
    stream.warn("employer must be an Alberta technology industry employer");

    stream
        .probability(DrawProbability::High)
        .checklist(&["express_entry_profile", "job_offer_letter", "language_test"])
        .finish()
}

fn opportunity_stream(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Alberta, "Alberta Opportunity Stream");
    let required_clb = if offer.tier == SkillTier::High { 5 } else { 4 };

    stream.require(
        profile.work.current_jurisdiction == Jurisdiction::Alberta,
        "candidate must be working in Alberta on a valid work permit",
    );
    stream.require(
        profile.language.best_floor() >= required_clb,
        format!("CLB {required_clb} is required for this occupation"),
    );
    stream.require(
        profile.work.canadian_years >= 1.0,
        "twelve months of full-time Canadian experience are required",
    );

    let connections = &profile.connections;
    let skill = match offer.tier {
        SkillTier::High => 10,
        SkillTier::Semi => 6,
        SkillTier::Entry => 3,
    };
    let alberta_work = if connections.worked.contains(&Jurisdiction::Alberta) {
        10
    } else {
        0
    };
    let language = match profile.language.best_floor() {
        0..=3 => 0,
        4 => 5,
        5 | 6 => 10,
        _ => 15,
    };
    let alberta_education = if profile.education.completed_in(Jurisdiction::Alberta).is_some() {
        10
    } else {
        0
    };
    let relative = if connections.relatives.contains(&Jurisdiction::Alberta) {
        10
    } else {
        0
    };
    let age = if (21..=34).contains(&profile.age) { 10 } else { 0 };
    let score =
        skill + alberta_work + language + alberta_education + relative + age + REGIONAL_POINTS;

    stream
        .points(score, OPPORTUNITY_MAX)
        .cutoff(OPPORTUNITY_CUTOFF)
        .ranked(OPPORTUNITY_ROUND)
        .checklist(&[
            "job_offer_letter",
            "work_permit",
            "language_test",
            "employment_reference_letters",
        ])
        .finish()
}

fn rural_renewal(profile: &CandidateProfile) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::Alberta, "Rural Renewal Stream");

    stream.require(profile.language.best_floor() >= 4, "CLB 4 is required");
    stream.warn("employer must be endorsed by a designated rural community");
    stream.warn("a community endorsement letter must accompany the application");

    stream
        .probability(DrawProbability::Medium)
        .checklist(&["community_endorsement_letter", "job_offer_letter", "language_test"])
        .finish()
}
