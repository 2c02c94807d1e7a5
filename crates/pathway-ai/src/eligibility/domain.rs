use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Shared jurisdiction enumeration used by every sub-record and program module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Federal programs. Never a place of residence.
    Federal,
    Ontario,
    BritishColumbia,
    Alberta,
    Saskatchewan,
    Manitoba,
    Quebec,
    NovaScotia,
    NewBrunswick,
    PrinceEdwardIsland,
    NewfoundlandAndLabrador,
    Yukon,
    NorthwestTerritories,
    Nunavut,
    /// Residence or work outside the country.
    Abroad,
}

impl Jurisdiction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Federal => "Federal",
            Self::Ontario => "Ontario",
            Self::BritishColumbia => "British Columbia",
            Self::Alberta => "Alberta",
            Self::Saskatchewan => "Saskatchewan",
            Self::Manitoba => "Manitoba",
            Self::Quebec => "Quebec",
            Self::NovaScotia => "Nova Scotia",
            Self::NewBrunswick => "New Brunswick",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Self::Yukon => "Yukon",
            Self::NorthwestTerritories => "Northwest Territories",
            Self::Nunavut => "Nunavut",
            Self::Abroad => "Abroad",
        }
    }

    pub const fn is_atlantic(self) -> bool {
        matches!(
            self,
            Self::NovaScotia
                | Self::NewBrunswick
                | Self::PrinceEdwardIsland
                | Self::NewfoundlandAndLabrador
        )
    }

    /// True for provinces and territories.
    pub const fn is_domestic(self) -> bool {
        !matches!(self, Self::Federal | Self::Abroad)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

/// Highest completed credential, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    OneYear,
    TwoYear,
    Bachelors,
    Masters,
    #[serde(rename = "phd")]
    PhD,
}

impl EducationLevel {
    pub const fn is_post_secondary(self) -> bool {
        !matches!(self, Self::HighSchool)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOfStudy {
    Stem,
    Health,
    Trades,
    Business,
    Education,
    SocialSciences,
    Arts,
    Other,
}

impl FieldOfStudy {
    /// Fields targeted by category-based selection rounds.
    pub const fn is_priority(self) -> bool {
        matches!(self, Self::Stem | Self::Health | Self::Trades)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupationCategory {
    Technology,
    Healthcare,
    Trades,
    Agriculture,
    Transport,
    Hospitality,
    EarlyChildhoodEducation,
    Management,
    Business,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    /// No recognised skill level (labouring, entry positions).
    Entry,
    High,
    Semi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficialLanguage {
    English,
    French,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSkill {
    Listening,
    Reading,
    Writing,
    Speaking,
}

impl LanguageSkill {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Listening => "listening",
            Self::Reading => "reading",
            Self::Writing => "writing",
            Self::Speaking => "speaking",
        }
    }
}

/// CLB-equivalent score per skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClbScores {
    pub listening: u8,
    pub reading: u8,
    pub writing: u8,
    pub speaking: u8,
}

impl ClbScores {
    pub const fn uniform(level: u8) -> Self {
        Self {
            listening: level,
            reading: level,
            writing: level,
            speaking: level,
        }
    }

    /// The weakest skill governs overall proficiency credit.
    pub fn floor(&self) -> u8 {
        self.listening
            .min(self.reading)
            .min(self.writing)
            .min(self.speaking)
    }

    pub fn by_skill(&self) -> [(LanguageSkill, u8); 4] {
        [
            (LanguageSkill::Listening, self.listening),
            (LanguageSkill::Reading, self.reading),
            (LanguageSkill::Writing, self.writing),
            (LanguageSkill::Speaking, self.speaking),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTest {
    pub language: OfficialLanguage,
    pub scores: ClbScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub primary: LanguageTest,
    #[serde(default)]
    pub secondary: Option<LanguageTest>,
}

impl LanguageProfile {
    pub fn primary_floor(&self) -> u8 {
        self.primary.scores.floor()
    }

    pub fn secondary_floor(&self) -> Option<u8> {
        self.secondary.map(|test| test.scores.floor())
    }

    /// Floor CLB for the given official language, whichever test carries it.
    pub fn floor_for(&self, language: OfficialLanguage) -> Option<u8> {
        std::iter::once(&self.primary)
            .chain(self.secondary.iter())
            .filter(|test| test.language == language)
            .map(|test| test.scores.floor())
            .max()
    }

    /// Best floor across both official languages.
    pub fn best_floor(&self) -> u8 {
        self.secondary_floor()
            .map_or(self.primary_floor(), |second| second.max(self.primary_floor()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanadianEducation {
    pub jurisdiction: Jurisdiction,
    pub level: EducationLevel,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationProfile {
    pub level: EducationLevel,
    pub field: FieldOfStudy,
    #[serde(default)]
    pub canadian: Option<CanadianEducation>,
    #[serde(default)]
    pub trade_certificate: bool,
}

impl EducationProfile {
    /// Completed Canadian credential, if any.
    pub fn completed_canadian(&self) -> Option<&CanadianEducation> {
        self.canadian.as_ref().filter(|record| record.completed)
    }

    pub fn completed_in(&self, jurisdiction: Jurisdiction) -> Option<&CanadianEducation> {
        self.completed_canadian()
            .filter(|record| record.jurisdiction == jurisdiction)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    pub tier: SkillTier,
    pub jurisdiction: Jurisdiction,
    pub hourly_wage: f32,
    pub occupation: OccupationCategory,
}

impl JobOffer {
    /// Annualised on a 2,080 hour year.
    pub fn annual_wage(&self) -> f32 {
        self.hourly_wage * 2080.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub years: f32,
    pub occupation: OccupationCategory,
    pub annual_earnings: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkProfile {
    pub canadian_years: f32,
    pub foreign_years: f32,
    pub current_jurisdiction: Jurisdiction,
    #[serde(default)]
    pub job_offer: Option<JobOffer>,
    #[serde(default)]
    pub history: Vec<JobRecord>,
}

impl WorkProfile {
    pub fn total_years(&self) -> f32 {
        self.canadian_years + self.foreign_years
    }

    pub fn offer_in(&self, jurisdiction: Jurisdiction) -> Option<&JobOffer> {
        self.job_offer
            .as_ref()
            .filter(|offer| offer.jurisdiction == jurisdiction)
    }

    pub fn years_in(&self, occupation: OccupationCategory) -> f32 {
        self.history
            .iter()
            .filter(|record| record.occupation == occupation)
            .map(|record| record.years)
            .sum()
    }
}

/// Ties to individual jurisdictions. Membership matters, not ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
    #[serde(default)]
    pub relatives: BTreeSet<Jurisdiction>,
    #[serde(default)]
    pub friends: BTreeSet<Jurisdiction>,
    #[serde(default)]
    pub studied: BTreeSet<Jurisdiction>,
    #[serde(default)]
    pub worked: BTreeSet<Jurisdiction>,
}

impl Connections {
    pub fn has_relative_in_country(&self) -> bool {
        self.relatives.iter().any(|place| place.is_domestic())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpouseProfile {
    pub education: EducationLevel,
    #[serde(default)]
    pub language: Option<ClbScores>,
    #[serde(default)]
    pub canadian_years: u8,
}

/// Normalized applicant record consumed by every engine component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub age: u8,
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub spouse: Option<SpouseProfile>,
    pub education: EducationProfile,
    pub language: LanguageProfile,
    pub work: WorkProfile,
    #[serde(default)]
    pub connections: Connections,
    #[serde(default)]
    pub intent: BTreeSet<Jurisdiction>,
    #[serde(default)]
    pub provincial_nomination: bool,
    #[serde(default)]
    pub settlement_funds: u32,
}

impl CandidateProfile {
    pub fn is_married(&self) -> bool {
        self.marital_status == MaritalStatus::Married
    }

    pub fn targets(&self, jurisdiction: Jurisdiction) -> bool {
        self.intent.contains(&jurisdiction)
    }
}

/// Coarse estimate of how likely a stream is to select the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawProbability {
    None,
    Low,
    Medium,
    High,
}

impl DrawProbability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One jurisdiction + stream evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramResult {
    pub jurisdiction: Jurisdiction,
    pub stream: String,
    pub score: u32,
    /// Zero for pass/fail streams.
    pub max_score: u32,
    pub eligible: bool,
    pub draw_probability: DrawProbability,
    pub cutoff: Option<u32>,
    pub warnings: Vec<String>,
    pub checklist: Vec<String>,
}
