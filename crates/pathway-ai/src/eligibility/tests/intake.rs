use super::common::*;
use crate::eligibility::domain::{
    EducationLevel, JobRecord, LanguageSkill, OccupationCategory, SpouseProfile,
};
use crate::eligibility::intake::{ProfileGuard, ProfileViolation};

#[test]
fn guard_accepts_fixture_profiles() {
    for profile in profile_variants() {
        ProfileGuard.check(&profile).expect("fixture profile is valid");
    }
}

#[test]
fn guard_rejects_out_of_range_age() {
    let mut profile = skilled_profile();
    profile.age = 12;

    match ProfileGuard.check(&profile) {
        Err(ProfileViolation::AgeOutOfRange(12)) => {}
        other => panic!("expected age violation, got {other:?}"),
    }
}

#[test]
fn guard_reports_the_offending_language_skill() {
    let mut profile = skilled_profile();
    profile.language.primary.scores.writing = 13;

    match ProfileGuard.check(&profile) {
        Err(ProfileViolation::LanguageScoreOutOfRange { skill, value }) => {
            assert_eq!(skill, LanguageSkill::Writing);
            assert_eq!(value, 13);
        }
        other => panic!("expected language violation, got {other:?}"),
    }
}

#[test]
fn guard_rejects_zero_scores_on_the_second_language() {
    let mut profile = skilled_profile();
    let mut test = french(7);
    test.scores.listening = 0;
    profile.language.secondary = Some(test);

    match ProfileGuard.check(&profile) {
        Err(ProfileViolation::LanguageScoreOutOfRange { skill, .. }) => {
            assert_eq!(skill, LanguageSkill::Listening);
        }
        other => panic!("expected language violation, got {other:?}"),
    }
}

#[test]
fn guard_rejects_negative_or_non_finite_numbers() {
    let mut negative = skilled_profile();
    negative.work.foreign_years = -1.0;
    match ProfileGuard.check(&negative) {
        Err(ProfileViolation::NegativeOrNonFinite { field }) => {
            assert_eq!(field, "work.foreign_years");
        }
        other => panic!("expected numeric violation, got {other:?}"),
    }

    let mut history = skilled_profile();
    history.work.history.push(JobRecord {
        years: f32::NAN,
        occupation: OccupationCategory::Other,
        annual_earnings: 0,
    });
    match ProfileGuard.check(&history) {
        Err(ProfileViolation::NegativeOrNonFinite { field }) => {
            assert_eq!(field, "work.history.years");
        }
        other => panic!("expected numeric violation, got {other:?}"),
    }
}

#[test]
fn guard_rejects_spouse_on_single_applicant() {
    let mut profile = skilled_profile();
    profile.spouse = Some(SpouseProfile {
        education: EducationLevel::Bachelors,
        language: None,
        canadian_years: 0,
    });

    match ProfileGuard.check(&profile) {
        Err(ProfileViolation::SpouseWithoutMarriage) => {}
        other => panic!("expected spouse violation, got {other:?}"),
    }
}

#[test]
fn violations_render_readable_messages() {
    let violation = ProfileViolation::LanguageScoreOutOfRange {
        skill: LanguageSkill::Speaking,
        value: 0,
    };
    assert_eq!(violation.to_string(), "speaking score 0 is outside CLB 1-12");
}
