use chrono::{Duration, NaiveDate};
use pathway_ai::compliance::{
    analyze_legal_defense, analyze_status_strategy, validate_work_experience, LegalInput,
    Location, StatusInput, StatusState, WorkExperienceInput,
};
use pathway_ai::eligibility::{
    assess, calculate_crs, ClbScores, CrsFactor, DrawProbability, EligibilityAggregator,
    Jurisdiction, MaritalStatus, ProgramRegistry, CRS_MAX,
};
use pathway_ai::{AssessmentRequest, AssessmentService, CandidateProfile};
use serde_json::json;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid evaluation date")
}

fn sample_candidate() -> CandidateProfile {
    serde_json::from_value(json!({
        "age": 29,
        "marital_status": "single",
        "education": { "level": "masters", "field": "stem" },
        "language": {
            "primary": {
                "language": "english",
                "scores": { "listening": 9, "reading": 9, "writing": 9, "speaking": 9 }
            }
        },
        "work": {
            "canadian_years": 1.0,
            "foreign_years": 3.0,
            "current_jurisdiction": "ontario"
        }
    }))
    .expect("sample candidate deserializes")
}

fn candidates() -> Vec<CandidateProfile> {
    let base = sample_candidate();

    let mut married = base.clone();
    married.marital_status = MaritalStatus::Married;

    let mut older = base.clone();
    older.age = 52;
    older.language.primary.scores = ClbScores::uniform(5);
    older.work.canadian_years = 0.0;

    let mut hired: CandidateProfile = serde_json::from_value(json!({
        "age": 34,
        "marital_status": "single",
        "education": { "level": "bachelors", "field": "health" },
        "language": {
            "primary": {
                "language": "english",
                "scores": { "listening": 8, "reading": 7, "writing": 7, "speaking": 8 }
            },
            "secondary": {
                "language": "french",
                "scores": { "listening": 7, "reading": 7, "writing": 7, "speaking": 7 }
            }
        },
        "work": {
            "canadian_years": 2.0,
            "foreign_years": 0.0,
            "current_jurisdiction": "nova_scotia",
            "job_offer": {
                "tier": "high",
                "jurisdiction": "nova_scotia",
                "hourly_wage": 38.5,
                "occupation": "healthcare"
            },
            "history": [
                { "years": 2.0, "occupation": "healthcare", "annual_earnings": 72000 }
            ]
        },
        "connections": { "worked": ["nova_scotia"] },
        "settlement_funds": 25000
    }))
    .expect("hired candidate deserializes");
    hired.intent.insert(Jurisdiction::NovaScotia);

    vec![base, married, older, hired]
}

#[test]
fn sample_candidate_is_competitive_for_express_entry() {
    let profile = sample_candidate();
    let results = assess(&profile);

    assert!(
        results.iter().any(|result| result.stream.contains("Express Entry")
            && matches!(
                result.draw_probability,
                DrawProbability::High | DrawProbability::Medium
            )),
        "expected a competitive Express Entry stream in {results:#?}"
    );

    let offer_only = [
        Jurisdiction::BritishColumbia,
        Jurisdiction::Manitoba,
        Jurisdiction::NewBrunswick,
        Jurisdiction::PrinceEdwardIsland,
        Jurisdiction::NewfoundlandAndLabrador,
    ];
    assert!(results
        .iter()
        .all(|result| !offer_only.contains(&result.jurisdiction)));
    assert!(results
        .iter()
        .all(|result| !result.stream.starts_with("Employer Job Offer")));
}

#[test]
fn report_through_the_service_matches_the_free_function() {
    let profile = sample_candidate();
    let report = AssessmentService::default()
        .assess(AssessmentRequest::for_profile(profile.clone()))
        .expect("sample candidate is valid");

    assert_eq!(report.crs, calculate_crs(&profile));
    assert_eq!(report.opportunities, assess(&profile));
}

#[test]
fn opportunities_are_sorted_by_tier_then_score() {
    for profile in candidates() {
        let results = assess(&profile);
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            assert!(
                left.draw_probability > right.draw_probability
                    || (left.draw_probability == right.draw_probability
                        && left.score >= right.score),
                "out of order: {pair:#?}"
            );
        }
    }
}

#[test]
fn repeated_assessments_are_identical() {
    for profile in candidates() {
        let copy: CandidateProfile =
            serde_json::from_str(&serde_json::to_string(&profile).expect("serialize"))
                .expect("deserialize");
        assert_eq!(assess(&profile), assess(&copy));
    }
}

#[test]
fn registering_more_modules_leaves_existing_results_alone() {
    let keys = [
        "federal",
        "ontario",
        "british_columbia",
        "saskatchewan",
        "manitoba",
        "alberta",
        "atlantic",
        "nova_scotia",
    ];

    for profile in candidates() {
        let full = EligibilityAggregator::new(ProgramRegistry::standard()).assess(&profile);
        for key in keys {
            let alone = EligibilityAggregator::new(
                ProgramRegistry::from_keys([key]).expect("known module"),
            )
            .assess(&profile);
            for result in &alone {
                assert!(full.contains(result), "{key} result changed: {result:#?}");
            }
        }
    }
}

#[test]
fn crs_total_equals_bucket_sum() {
    for profile in candidates() {
        let result = calculate_crs(&profile);
        assert_eq!(result.breakdown.sum(), result.total);
        assert!(result.total <= CRS_MAX);
    }
}

#[test]
fn first_language_points_follow_the_weakest_skill() {
    let profile = sample_candidate();

    for floor in 4..=10u8 {
        let mut uniform = profile.clone();
        uniform.language.primary.scores = ClbScores::uniform(floor);
        let expected = calculate_crs(&uniform).details.get(&CrsFactor::FirstLanguage).copied();

        for raised in floor..=12 {
            let mut varied = profile.clone();
            varied.language.primary.scores = ClbScores {
                listening: floor,
                reading: raised,
                writing: raised.max(floor + 1).min(12),
                speaking: 12,
            };
            assert_eq!(
                calculate_crs(&varied).details.get(&CrsFactor::FirstLanguage).copied(),
                expected,
                "floor {floor}, raised {raised}"
            );
        }
    }
}

#[test]
fn expired_permit_without_extension_is_never_valid() {
    for days in [1, 30, 90, 91, 365] {
        let strategy = analyze_status_strategy(&StatusInput {
            expiry_date: as_of() - Duration::days(days),
            has_submitted_extension: false,
            location: Location::InCanada,
            as_of: as_of(),
        });

        assert!(strategy.days_remaining < 0);
        let expected = if days <= 90 {
            StatusState::RestorationPeriod
        } else {
            StatusState::OutOfStatus
        };
        assert_eq!(strategy.status_state, expected, "{days} days past expiry");
    }
}

#[test]
fn part_time_work_is_flagged_and_full_time_is_clean() {
    let part_time: WorkExperienceInput =
        serde_json::from_value(json!({ "hours_per_week": 15.0, "weeks_worked": 20 }))
            .expect("part-time input");
    assert!(!validate_work_experience(&part_time).warnings.is_empty());

    let full_time: WorkExperienceInput = serde_json::from_value(json!({
        "hours_per_week": 40.0,
        "weeks_worked": 52,
        "is_seasonal": false,
        "is_student": false,
        "is_coop": false
    }))
    .expect("full-time input");
    assert!(validate_work_experience(&full_time).warnings.is_empty());
}

#[test]
fn clean_history_is_admissible_without_strategies() {
    let defense = analyze_legal_defense(&LegalInput {
        criminal_record: None,
        medical_condition: None,
        prior_refusal: None,
        as_of: as_of(),
    });

    assert!(!defense.inadmissibility.is_inadmissible);
    assert!(defense.inadmissibility.ground.is_none());
    assert!(defense.defense_strategy.is_empty());
}
