use std::collections::BTreeSet;

use crate::eligibility::domain::{
    CandidateProfile, CanadianEducation, ClbScores, Connections, EducationLevel,
    EducationProfile, FieldOfStudy, JobOffer, JobRecord, Jurisdiction, LanguageProfile,
    LanguageTest, MaritalStatus, OccupationCategory, OfficialLanguage, ProgramResult, SkillTier,
    SpouseProfile, WorkProfile,
};

/// 29-year-old single Masters STEM graduate, CLB 9 English, one year in-country and three
/// abroad, no job offer. Scores 509 CRS.
pub(crate) fn skilled_profile() -> CandidateProfile {
    CandidateProfile {
        age: 29,
        marital_status: MaritalStatus::Single,
        spouse: None,
        education: EducationProfile {
            level: EducationLevel::Masters,
            field: FieldOfStudy::Stem,
            canadian: None,
            trade_certificate: false,
        },
        language: LanguageProfile {
            primary: english(9),
            secondary: None,
        },
        work: WorkProfile {
            canadian_years: 1.0,
            foreign_years: 3.0,
            current_jurisdiction: Jurisdiction::Ontario,
            job_offer: None,
            history: vec![
                JobRecord {
                    years: 3.0,
                    occupation: OccupationCategory::Technology,
                    annual_earnings: 68_000,
                },
                JobRecord {
                    years: 1.0,
                    occupation: OccupationCategory::Technology,
                    annual_earnings: 82_000,
                },
            ],
        },
        connections: Connections {
            worked: BTreeSet::from([Jurisdiction::Ontario]),
            ..Connections::default()
        },
        intent: BTreeSet::from([Jurisdiction::Ontario]),
        provincial_nomination: false,
        settlement_funds: 20_000,
    }
}

/// Entry-level applicant with weak language results and no post-secondary education.
pub(crate) fn limited_profile() -> CandidateProfile {
    CandidateProfile {
        age: 47,
        marital_status: MaritalStatus::Single,
        spouse: None,
        education: EducationProfile {
            level: EducationLevel::HighSchool,
            field: FieldOfStudy::Other,
            canadian: None,
            trade_certificate: false,
        },
        language: LanguageProfile {
            primary: english(4),
            secondary: None,
        },
        work: WorkProfile {
            canadian_years: 0.0,
            foreign_years: 0.5,
            current_jurisdiction: Jurisdiction::Abroad,
            job_offer: None,
            history: Vec::new(),
        },
        connections: Connections::default(),
        intent: BTreeSet::new(),
        provincial_nomination: false,
        settlement_funds: 0,
    }
}

pub(crate) fn married_profile() -> CandidateProfile {
    let mut profile = skilled_profile();
    profile.marital_status = MaritalStatus::Married;
    profile.spouse = Some(SpouseProfile {
        education: EducationLevel::Bachelors,
        language: Some(ClbScores::uniform(7)),
        canadian_years: 1,
    });
    profile
}

pub(crate) fn english(level: u8) -> LanguageTest {
    LanguageTest {
        language: OfficialLanguage::English,
        scores: ClbScores::uniform(level),
    }
}

pub(crate) fn french(level: u8) -> LanguageTest {
    LanguageTest {
        language: OfficialLanguage::French,
        scores: ClbScores::uniform(level),
    }
}

pub(crate) fn offer(
    jurisdiction: Jurisdiction,
    tier: SkillTier,
    occupation: OccupationCategory,
    hourly_wage: f32,
) -> JobOffer {
    JobOffer {
        tier,
        jurisdiction,
        hourly_wage,
        occupation,
    }
}

pub(crate) fn with_offer(mut profile: CandidateProfile, offer: JobOffer) -> CandidateProfile {
    profile.work.job_offer = Some(offer);
    profile
}

pub(crate) fn graduate_of(
    mut profile: CandidateProfile,
    jurisdiction: Jurisdiction,
    level: EducationLevel,
) -> CandidateProfile {
    profile.education.canadian = Some(CanadianEducation {
        jurisdiction,
        level,
        completed: true,
    });
    profile.connections.studied.insert(jurisdiction);
    profile
}

/// A spread of profiles used by the ordering and determinism properties.
pub(crate) fn profile_variants() -> Vec<CandidateProfile> {
    vec![
        skilled_profile(),
        limited_profile(),
        married_profile(),
        with_offer(
            skilled_profile(),
            offer(
                Jurisdiction::BritishColumbia,
                SkillTier::High,
                OccupationCategory::Technology,
                52.0,
            ),
        ),
        with_offer(
            graduate_of(
                limited_profile(),
                Jurisdiction::NovaScotia,
                EducationLevel::TwoYear,
            ),
            offer(
                Jurisdiction::NovaScotia,
                SkillTier::Semi,
                OccupationCategory::Healthcare,
                21.5,
            ),
        ),
        graduate_of(skilled_profile(), Jurisdiction::Ontario, EducationLevel::PhD),
    ]
}

pub(crate) fn streams_for(results: &[ProgramResult], jurisdiction: Jurisdiction) -> Vec<&str> {
    results
        .iter()
        .filter(|result| result.jurisdiction == jurisdiction)
        .map(|result| result.stream.as_str())
        .collect()
}

pub(crate) fn find<'a>(results: &'a [ProgramResult], stream: &str) -> &'a ProgramResult {
    results
        .iter()
        .find(|result| result.stream == stream)
        .unwrap_or_else(|| panic!("expected stream '{stream}' in {results:#?}"))
}
