//! Comprehensive Ranking System calculator.
//!
//! Point tables approximate the published grid. Every language factor is scored from the
//! weakest of the four skills, so a single low band caps the whole language credit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, EducationLevel, OfficialLanguage, SkillTier};

pub const CRS_MAX: u32 = 1200;

const TRANSFERABILITY_CAP: u32 = 100;
const TRANSFERABILITY_GROUP_CAP: u32 = 50;
const ADDITIONAL_CAP: u32 = 600;
const SPOUSE_SECOND_LANGUAGE_CAP: u32 = 22;

const SIBLING_POINTS: u32 = 15;
const HIGH_SKILL_OFFER_POINTS: u32 = 50;
const SEMI_SKILL_OFFER_POINTS: u32 = 25;
const NOMINATION_POINTS: u32 = 600;
const TRADE_CERTIFICATE_POINTS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrsFactor {
    Age,
    Education,
    FirstLanguage,
    SecondLanguage,
    CanadianExperience,
    SpouseEducation,
    SpouseLanguage,
    SpouseExperience,
    EducationTransferability,
    ForeignExperienceTransferability,
    Sibling,
    FrenchAbility,
    CanadianEducation,
    JobOffer,
    ProvincialNomination,
    TradeCertificate,
}

/// Bucket totals. Always sums to `CrsResult::total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsBreakdown {
    pub core_human_capital: u32,
    pub spouse_factors: u32,
    pub skill_transferability: u32,
    pub additional_points: u32,
}

impl CrsBreakdown {
    pub fn sum(&self) -> u32 {
        self.core_human_capital
            + self.spouse_factors
            + self.skill_transferability
            + self.additional_points
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsResult {
    pub total: u32,
    pub breakdown: CrsBreakdown,
    pub details: BTreeMap<CrsFactor, u32>,
}

pub fn calculate_crs(profile: &CandidateProfile) -> CrsResult {
    let mut details = BTreeMap::new();
    // Without spouse details the applicant is scored on the single grid.
    let with_spouse = profile.is_married() && profile.spouse.is_some();

    let core = core_human_capital(profile, with_spouse, &mut details);
    let spouse = spouse_factors(profile, &mut details);
    let transferability = skill_transferability(profile, &mut details);
    let mut additional = additional_points(profile, &mut details);

    let raw = core + spouse + transferability + additional;
    if raw > CRS_MAX {
        additional = additional.saturating_sub(raw - CRS_MAX);
    }

    let breakdown = CrsBreakdown {
        core_human_capital: core,
        spouse_factors: spouse,
        skill_transferability: transferability,
        additional_points: additional,
    };
    let total = breakdown.sum();

    tracing::debug!(
        total,
        core,
        spouse,
        transferability,
        additional,
        "computed CRS"
    );

    CrsResult {
        total,
        breakdown,
        details,
    }
}

fn core_human_capital(
    profile: &CandidateProfile,
    with_spouse: bool,
    details: &mut BTreeMap<CrsFactor, u32>,
) -> u32 {
    let age = age_points(profile.age, with_spouse);
    let education = education_points(profile.education.level, with_spouse);
    let first = 4 * first_language_points(profile.language.primary_floor(), with_spouse);
    let second = profile
        .language
        .secondary_floor()
        .map(|floor| {
            let cap = if with_spouse {
                SPOUSE_SECOND_LANGUAGE_CAP
            } else {
                24
            };
            (4 * second_language_points(floor)).min(cap)
        })
        .unwrap_or(0);
    let experience =
        canadian_experience_points(whole_years(profile.work.canadian_years), with_spouse);

    details.insert(CrsFactor::Age, age);
    details.insert(CrsFactor::Education, education);
    details.insert(CrsFactor::FirstLanguage, first);
    details.insert(CrsFactor::SecondLanguage, second);
    details.insert(CrsFactor::CanadianExperience, experience);

    age + education + first + second + experience
}

fn spouse_factors(profile: &CandidateProfile, details: &mut BTreeMap<CrsFactor, u32>) -> u32 {
    let Some(spouse) = profile.spouse.as_ref().filter(|_| profile.is_married()) else {
        return 0;
    };

    let education = match spouse.education {
        EducationLevel::HighSchool => 2,
        EducationLevel::OneYear => 6,
        EducationLevel::TwoYear => 7,
        EducationLevel::Bachelors => 8,
        EducationLevel::Masters | EducationLevel::PhD => 10,
    };
    let language = spouse
        .language
        .map(|scores| {
            4 * match scores.floor() {
                0..=4 => 0,
                5 | 6 => 1,
                7 | 8 => 3,
                _ => 5,
            }
        })
        .unwrap_or(0);
    let experience = match spouse.canadian_years {
        0 => 0,
        1 => 5,
        2 => 7,
        3 => 8,
        4 => 9,
        _ => 10,
    };

    details.insert(CrsFactor::SpouseEducation, education);
    details.insert(CrsFactor::SpouseLanguage, language);
    details.insert(CrsFactor::SpouseExperience, experience);

    education + language + experience
}

fn skill_transferability(
    profile: &CandidateProfile,
    details: &mut BTreeMap<CrsFactor, u32>,
) -> u32 {
    let clb = profile.language.primary_floor();
    let level = profile.education.level;
    let canadian = whole_years(profile.work.canadian_years);
    let foreign = whole_years(profile.work.foreign_years);

    // (moderate, strong) credit for the education combinations
    let (moderate, strong): (u32, u32) = match level {
        EducationLevel::HighSchool => (0, 0),
        EducationLevel::OneYear | EducationLevel::TwoYear | EducationLevel::Bachelors => (13, 25),
        EducationLevel::Masters | EducationLevel::PhD => (25, 50),
    };

    let education_language = match clb {
        0..=6 => 0,
        7 | 8 => moderate,
        _ => strong,
    };
    let education_experience = match canadian {
        0 => 0,
        1 => moderate,
        _ => strong,
    };
    let education_group =
        (education_language + education_experience).min(TRANSFERABILITY_GROUP_CAP);

    let foreign_language: u32 = match (foreign, clb) {
        (0, _) | (_, 0..=6) => 0,
        (1 | 2, 7 | 8) => 13,
        (1 | 2, _) => 25,
        (_, 7 | 8) => 25,
        _ => 50,
    };
    let foreign_canadian: u32 = match (foreign, canadian) {
        (0, _) | (_, 0) => 0,
        (1 | 2, 1) => 13,
        (1 | 2, _) => 25,
        (_, 1) => 25,
        _ => 50,
    };
    let foreign_group = (foreign_language + foreign_canadian).min(TRANSFERABILITY_GROUP_CAP);

    details.insert(CrsFactor::EducationTransferability, education_group);
    details.insert(CrsFactor::ForeignExperienceTransferability, foreign_group);

    (education_group + foreign_group).min(TRANSFERABILITY_CAP)
}

fn additional_points(profile: &CandidateProfile, details: &mut BTreeMap<CrsFactor, u32>) -> u32 {
    let mut total: u32 = 0;
    let mut award = |factor: CrsFactor, points: u32| {
        if points > 0 {
            details.insert(factor, points);
            total += points;
        }
    };

    if profile.connections.has_relative_in_country() {
        award(CrsFactor::Sibling, SIBLING_POINTS);
    }

    if let Some(french) = profile.language.floor_for(OfficialLanguage::French) {
        if french >= 7 {
            let english = profile
                .language
                .floor_for(OfficialLanguage::English)
                .unwrap_or(0);
            award(CrsFactor::FrenchAbility, if english >= 5 { 50 } else { 25 });
        }
    }

    if let Some(record) = profile.education.completed_canadian() {
        let points = match record.level {
            EducationLevel::HighSchool => 0,
            EducationLevel::OneYear | EducationLevel::TwoYear => 15,
            _ => 30,
        };
        award(CrsFactor::CanadianEducation, points);
    }

    if let Some(offer) = &profile.work.job_offer {
        let points = match offer.tier {
            SkillTier::High => HIGH_SKILL_OFFER_POINTS,
            SkillTier::Semi => SEMI_SKILL_OFFER_POINTS,
            SkillTier::Entry => 0,
        };
        award(CrsFactor::JobOffer, points);
    }

    if profile.provincial_nomination {
        award(CrsFactor::ProvincialNomination, NOMINATION_POINTS);
    }

    if profile.education.trade_certificate {
        award(CrsFactor::TradeCertificate, TRADE_CERTIFICATE_POINTS);
    }

    total.min(ADDITIONAL_CAP)
}

pub(crate) fn whole_years(years: f32) -> u32 {
    if years.is_finite() && years > 0.0 {
        years.floor() as u32
    } else {
        0
    }
}

fn age_points(age: u8, with_spouse: bool) -> u32 {
    let (single, married) = match age {
        0..=17 => (0, 0),
        18 => (99, 90),
        19 => (105, 95),
        20..=29 => (110, 100),
        30 => (105, 95),
        31 => (99, 90),
        32 => (94, 85),
        33 => (88, 80),
        34 => (83, 75),
        35 => (77, 70),
        36 => (72, 65),
        37 => (66, 60),
        38 => (61, 55),
        39 => (55, 50),
        40 => (50, 45),
        41 => (39, 35),
        42 => (28, 25),
        43 => (17, 15),
        44 => (6, 5),
        _ => (0, 0),
    };
    if with_spouse {
        married
    } else {
        single
    }
}

fn education_points(level: EducationLevel, with_spouse: bool) -> u32 {
    let (single, married) = match level {
        EducationLevel::HighSchool => (30, 28),
        EducationLevel::OneYear => (90, 84),
        EducationLevel::TwoYear => (98, 91),
        EducationLevel::Bachelors => (120, 112),
        EducationLevel::Masters => (135, 126),
        EducationLevel::PhD => (150, 140),
    };
    if with_spouse {
        married
    } else {
        single
    }
}

fn first_language_points(clb: u8, with_spouse: bool) -> u32 {
    let (single, married) = match clb {
        0..=3 => (0, 0),
        4 | 5 => (6, 6),
        6 => (9, 8),
        7 => (17, 16),
        8 => (23, 22),
        9 => (31, 29),
        _ => (34, 32),
    };
    if with_spouse {
        married
    } else {
        single
    }
}

fn second_language_points(clb: u8) -> u32 {
    match clb {
        0..=4 => 0,
        5 | 6 => 1,
        7 | 8 => 3,
        _ => 6,
    }
}

fn canadian_experience_points(years: u32, with_spouse: bool) -> u32 {
    let (single, married) = match years {
        0 => (0, 0),
        1 => (40, 35),
        2 => (53, 46),
        3 => (64, 56),
        4 => (72, 63),
        _ => (80, 70),
    };
    if with_spouse {
        married
    } else {
        single
    }
}
