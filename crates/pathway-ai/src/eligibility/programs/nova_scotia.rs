use super::Stream;
use crate::eligibility::domain::{
    CandidateProfile, DrawProbability, JobOffer, Jurisdiction, OccupationCategory, OfficialLanguage,
    ProgramResult, SkillTier,
};

const PRIORITY_OCCUPATIONS: [OccupationCategory; 3] = [
    OccupationCategory::Healthcare,
    OccupationCategory::Trades,
    OccupationCategory::EarlyChildhoodEducation,
];

pub fn evaluate_nova_scotia(profile: &CandidateProfile, _crs: u32) -> Vec<ProgramResult> {
    let mut results = vec![labour_market_priorities(profile)];

    if let Some(result) = experience_express_entry(profile) {
        results.push(result);
    }
    if let Some(offer) = profile.work.offer_in(Jurisdiction::NovaScotia) {
        results.push(skilled_worker(profile, offer));
        if let Some(result) = international_graduate_in_demand(profile, offer) {
            results.push(result);
        }
    }

    results
}

fn labour_market_priorities(profile: &CandidateProfile) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::NovaScotia, "Labour Market Priorities");
    let priority_experience = PRIORITY_OCCUPATIONS
        .iter()
        .any(|occupation| profile.work.years_in(*occupation) >= 1.0);
    let french = profile
        .language
        .floor_for(OfficialLanguage::French)
        .is_some_and(|clb| clb >= 7);

    stream.require_pool_entry(profile);
    stream.require(
        priority_experience || french,
        "experience in a targeted occupation or French ability is required",
    );
    stream.warn("selection happens only through a letter of interest from the province");

    // Letters of interest are issued to the profile, not ranked by a published grid.
    let probability = match (priority_experience, french) {
        (true, true) => DrawProbability::High,
        (true, false) | (false, true) => DrawProbability::Medium,
        (false, false) => DrawProbability::None,
    };

    stream
        .probability(probability)
        .checklist(&["express_entry_profile", "letter_of_interest", "language_test"])
        .finish()
}

fn experience_express_entry(profile: &CandidateProfile) -> Option<ProgramResult> {
    if !profile.connections.worked.contains(&Jurisdiction::NovaScotia)
        && profile.work.current_jurisdiction != Jurisdiction::NovaScotia
    {
        return None;
    }
    let mut stream = Stream::new(Jurisdiction::NovaScotia, "Nova Scotia Experience: Express Entry");

    stream.require_pool_entry(profile);
    stream.require(
        profile.work.canadian_years >= 1.0,
        "one year of skilled experience in Nova Scotia is required",
    );
    stream.require(
        (21..=55).contains(&profile.age),
        "candidate must be between 21 and 55",
    );
    stream.require(profile.language.best_floor() >= 7, "CLB 7 is required");

    Some(
        stream
            .probability(DrawProbability::High)
            .checklist(&["express_entry_profile", "employment_reference_letters", "language_test"])
            .finish(),
    )
}

fn skilled_worker(profile: &CandidateProfile, offer: &JobOffer) -> ProgramResult {
    let mut stream = Stream::new(Jurisdiction::NovaScotia, "Skilled Worker");
    let required_clb = if offer.tier == SkillTier::High { 5 } else { 4 };

    stream.require(
        profile.work.total_years() >= 1.0,
        "one year of experience related to the offer is required",
    );
    stream.require(
        profile.language.best_floor() >= required_clb,
        format!("CLB {required_clb} is required for this occupation"),
    );
    stream.require(
        (21..=55).contains(&profile.age),
        "candidate must be between 21 and 55",
    );
    stream.warn("offer must be full-time and permanent from a Nova Scotia employer");

    let probability = if offer.tier == SkillTier::High {
        DrawProbability::High
    } else {
        DrawProbability::Medium
    };

    stream
        .probability(probability)
        .checklist(&["job_offer_letter", "employment_reference_letters", "language_test"])
        .finish()
}

fn international_graduate_in_demand(
    profile: &CandidateProfile,
    offer: &JobOffer,
) -> Option<ProgramResult> {
    profile.education.completed_in(Jurisdiction::NovaScotia)?;
    let mut stream = Stream::new(Jurisdiction::NovaScotia, "International Graduate in Demand");

    stream.require(
        matches!(
            offer.occupation,
            OccupationCategory::Healthcare | OccupationCategory::EarlyChildhoodEducation
        ),
        "offer must be in an eligible in-demand occupation",
    );
    stream.require(profile.language.best_floor() >= 5, "CLB 5 is required");
    stream.warn("application must be made within three years of graduation");

    Some(
        stream
            .probability(DrawProbability::High)
            .checklist(&["job_offer_letter", "degree_certificate", "official_transcripts"])
            .finish(),
    )
}
