use super::common::*;
use crate::eligibility::crs::{calculate_crs, CrsFactor, CRS_MAX};
use crate::eligibility::domain::{
    CanadianEducation, ClbScores, EducationLevel, JobOffer, Jurisdiction, MaritalStatus,
    OccupationCategory, SkillTier,
};

#[test]
fn skilled_profile_scores_expected_buckets() {
    let result = calculate_crs(&skilled_profile());

    assert_eq!(result.total, 509);
    assert_eq!(result.breakdown.core_human_capital, 409);
    assert_eq!(result.breakdown.spouse_factors, 0);
    assert_eq!(result.breakdown.skill_transferability, 100);
    assert_eq!(result.breakdown.additional_points, 0);
    assert_eq!(result.details.get(&CrsFactor::Age), Some(&110));
    assert_eq!(result.details.get(&CrsFactor::FirstLanguage), Some(&124));
}

#[test]
fn buckets_always_sum_to_total() {
    for profile in profile_variants() {
        let result = calculate_crs(&profile);
        assert_eq!(result.breakdown.sum(), result.total);
        assert!(result.total <= CRS_MAX);
    }
}

#[test]
fn fully_loaded_profile_reaches_the_ceiling() {
    let mut profile = skilled_profile();
    profile.age = 25;
    profile.education.level = EducationLevel::PhD;
    profile.education.trade_certificate = true;
    profile.education.canadian = Some(CanadianEducation {
        jurisdiction: Jurisdiction::Ontario,
        level: EducationLevel::PhD,
        completed: true,
    });
    profile.language.primary = english(10);
    profile.language.secondary = Some(french(10));
    profile.work.canadian_years = 5.0;
    profile.work.job_offer = Some(JobOffer {
        tier: SkillTier::High,
        jurisdiction: Jurisdiction::Ontario,
        hourly_wage: 60.0,
        occupation: OccupationCategory::Technology,
    });
    profile.connections.relatives.insert(Jurisdiction::Ontario);
    profile.provincial_nomination = true;

    let result = calculate_crs(&profile);
    assert_eq!(result.total, CRS_MAX);
    assert_eq!(result.breakdown.additional_points, 600);
    assert_eq!(result.breakdown.sum(), result.total);
}

#[test]
fn offer_bonus_scales_with_the_skill_tier() {
    let job_offer = |tier| {
        let profile = with_offer(
            skilled_profile(),
            offer(Jurisdiction::Ontario, tier, OccupationCategory::Technology, 32.0),
        );
        calculate_crs(&profile)
    };

    let high = job_offer(SkillTier::High);
    let semi = job_offer(SkillTier::Semi);
    let entry = job_offer(SkillTier::Entry);

    assert_eq!(high.details.get(&CrsFactor::JobOffer), Some(&50));
    assert_eq!(semi.details.get(&CrsFactor::JobOffer), Some(&25));
    assert_eq!(entry.details.get(&CrsFactor::JobOffer), None);
    assert_eq!(semi.total, 534);
    assert!(entry.total < semi.total && semi.total < high.total);
}

#[test]
fn language_credit_follows_the_weakest_skill() {
    let mut profile = skilled_profile();
    profile.language.primary.scores = ClbScores {
        listening: 7,
        reading: 9,
        writing: 8,
        speaking: 10,
    };
    let baseline = calculate_crs(&profile);

    profile.language.primary.scores.reading = 12;
    profile.language.primary.scores.speaking = 12;
    let raised = calculate_crs(&profile);

    assert_eq!(baseline.details.get(&CrsFactor::FirstLanguage), Some(&68));
    assert_eq!(
        baseline.details.get(&CrsFactor::FirstLanguage),
        raised.details.get(&CrsFactor::FirstLanguage)
    );
    assert_eq!(baseline.total, raised.total);
}

#[test]
fn married_without_spouse_details_scores_as_single() {
    let single = calculate_crs(&skilled_profile());

    let mut married = skilled_profile();
    married.marital_status = MaritalStatus::Married;
    married.spouse = None;
    let result = calculate_crs(&married);

    assert_eq!(result, single);
    assert_eq!(result.breakdown.spouse_factors, 0);
}

#[test]
fn fractional_years_are_floored() {
    let mut profile = skilled_profile();
    profile.work.canadian_years = 1.9;
    profile.work.foreign_years = 3.99;

    assert_eq!(calculate_crs(&profile).total, calculate_crs(&skilled_profile()).total);
}

#[test]
fn spouse_factors_only_count_when_married() {
    let married = calculate_crs(&married_profile());
    assert_eq!(married.breakdown.core_human_capital, 377);
    assert_eq!(married.breakdown.spouse_factors, 25);

    let mut single = married_profile();
    single.marital_status = MaritalStatus::Single;
    assert_eq!(calculate_crs(&single).breakdown.spouse_factors, 0);
}

#[test]
fn french_bonus_depends_on_english_ability() {
    let mut bilingual = skilled_profile();
    bilingual.language.secondary = Some(french(7));
    let result = calculate_crs(&bilingual);
    assert_eq!(result.details.get(&CrsFactor::FrenchAbility), Some(&50));

    let mut francophone = skilled_profile();
    francophone.language.primary = french(9);
    let result = calculate_crs(&francophone);
    assert_eq!(result.details.get(&CrsFactor::FrenchAbility), Some(&25));
}

#[test]
fn sibling_bonus_requires_a_domestic_relative() {
    let mut abroad = skilled_profile();
    abroad.connections.relatives.insert(Jurisdiction::Abroad);
    assert!(!calculate_crs(&abroad).details.contains_key(&CrsFactor::Sibling));

    let mut domestic = skilled_profile();
    domestic.connections.relatives.insert(Jurisdiction::Alberta);
    let result = calculate_crs(&domestic);
    assert_eq!(result.details.get(&CrsFactor::Sibling), Some(&15));
    assert_eq!(result.total, 524);
}
