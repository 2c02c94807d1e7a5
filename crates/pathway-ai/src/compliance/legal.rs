use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Maximum sentence, in years, that makes an offence serious criminality.
pub const SERIOUS_CRIMINALITY_YEARS: u8 = 10;
/// Years after sentence completion before a non-serious offence is deemed rehabilitated.
pub const DEEMED_REHABILITATION_YEARS: u32 = 10;
/// Years after sentence completion before individual rehabilitation can be sought.
pub const INDIVIDUAL_REHABILITATION_YEARS: u32 = 5;
/// Annual cost above which a condition is treated as excessive demand.
pub const EXCESSIVE_DEMAND_THRESHOLD: u32 = 26_220;
/// Above this, a mitigation plan is not a credible answer.
pub const MITIGATION_CEILING: u32 = EXCESSIVE_DEMAND_THRESHOLD * 3;
/// Length of the re-entry bar after a misrepresentation finding.
pub const MISREPRESENTATION_BAR_MONTHS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriminalRecord {
    /// Maximum sentence of the equivalent domestic offence.
    pub max_sentence_years: u8,
    pub sentence_completed: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalCondition {
    pub annual_cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefusalReason {
    Misrepresentation,
    InsufficientFunds,
    PurposeOfVisit,
    Eligibility,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefusalRecord {
    pub reason: RefusalReason,
    pub refused_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalInput {
    #[serde(default)]
    pub criminal_record: Option<CriminalRecord>,
    #[serde(default)]
    pub medical_condition: Option<MedicalCondition>,
    #[serde(default)]
    pub prior_refusal: Option<RefusalRecord>,
    #[serde(default = "super::today")]
    pub as_of: NaiveDate,
}

/// Ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InadmissibilityGround {
    SeriousCriminality,
    Criminality,
    Misrepresentation,
    MedicalExcessiveDemand,
}

impl InadmissibilityGround {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SeriousCriminality => "Serious criminality",
            Self::Criminality => "Criminality",
            Self::Misrepresentation => "Misrepresentation",
            Self::MedicalExcessiveDemand => "Medical excessive demand",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inadmissibility {
    pub is_inadmissible: bool,
    pub ground: Option<InadmissibilityGround>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseStrategy {
    pub title: String,
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDefense {
    pub inadmissibility: Inadmissibility,
    pub defense_strategy: Vec<DefenseStrategy>,
}

pub fn analyze_legal_defense(input: &LegalInput) -> LegalDefense {
    let mut grounds = Vec::new();
    let mut strategies = Vec::new();

    if let Some(record) = &input.criminal_record {
        let (ground, strategy) = criminality(record, input.as_of);
        grounds.extend(ground);
        strategies.push(strategy);
    }
    if let Some(refusal) = &input.prior_refusal {
        let (ground, strategy) = refusal_history(refusal, input.as_of);
        grounds.extend(ground);
        strategies.push(strategy);
    }
    if let Some(condition) = &input.medical_condition {
        let (ground, strategy) = medical(condition);
        grounds.extend(ground);
        strategies.extend(strategy);
    }

    let ground = grounds.into_iter().min();
    LegalDefense {
        inadmissibility: Inadmissibility {
            is_inadmissible: ground.is_some(),
            ground,
        },
        defense_strategy: strategies,
    }
}

fn strategy(title: &str, arguments: &[String]) -> DefenseStrategy {
    DefenseStrategy {
        title: title.to_string(),
        arguments: arguments.to_vec(),
    }
}

fn criminality(
    record: &CriminalRecord,
    as_of: NaiveDate,
) -> (Option<InadmissibilityGround>, DefenseStrategy) {
    let serious = record.max_sentence_years >= SERIOUS_CRIMINALITY_YEARS;
    let elapsed = as_of.years_since(record.sentence_completed).unwrap_or(0);
    let ground = if serious {
        InadmissibilityGround::SeriousCriminality
    } else {
        InadmissibilityGround::Criminality
    };

    if !serious && elapsed >= DEEMED_REHABILITATION_YEARS {
        return (
            None,
            strategy(
                "Deemed rehabilitation",
                &[
                    format!("{elapsed} years have passed since the sentence was completed"),
                    "a single offence with a maximum sentence under ten years lapses after ten years"
                        .to_string(),
                    "carry court disposition records to show the completion date".to_string(),
                ],
            ),
        );
    }

    if elapsed >= INDIVIDUAL_REHABILITATION_YEARS {
        let mut arguments = vec![
            format!("{elapsed} years have passed since the sentence was completed"),
            "present evidence of stable employment, community ties and remorse".to_string(),
        ];
        if serious {
            arguments.push(
                "serious criminality is never deemed rehabilitated by time alone".to_string(),
            );
        }
        return (
            Some(ground),
            strategy("Individual rehabilitation application", &arguments),
        );
    }

    let eligible_on = record
        .sentence_completed
        .checked_add_months(Months::new(INDIVIDUAL_REHABILITATION_YEARS * 12));
    let mut arguments = vec![
        "a temporary resident permit can overcome inadmissibility for a specific purpose".to_string(),
        "the need to enter must outweigh the risk posed".to_string(),
    ];
    if let Some(date) = eligible_on {
        arguments.push(format!("individual rehabilitation becomes available on {date}"));
    }
    (Some(ground), strategy("Temporary resident permit", &arguments))
}

fn refusal_history(
    refusal: &RefusalRecord,
    as_of: NaiveDate,
) -> (Option<InadmissibilityGround>, DefenseStrategy) {
    if refusal.reason != RefusalReason::Misrepresentation {
        return (
            None,
            strategy(
                "Address prior refusal",
                &[
                    "disclose the refusal on every future application".to_string(),
                    "submit new evidence that answers the officer's stated concern".to_string(),
                ],
            ),
        );
    }

    let bar_ends = refusal
        .refused_on
        .checked_add_months(Months::new(MISREPRESENTATION_BAR_MONTHS));
    match bar_ends {
        Some(end) if as_of < end => (
            Some(InadmissibilityGround::Misrepresentation),
            strategy(
                "Misrepresentation bar",
                &[
                    format!("the five-year bar remains in force until {end}"),
                    "seek judicial review if the finding rested on an innocent error".to_string(),
                    "request the officer's notes to test procedural fairness".to_string(),
                ],
            ),
        ),
        _ => (
            None,
            strategy(
                "Reapply after misrepresentation bar",
                &[
                    "the five-year bar has expired".to_string(),
                    "provide complete and consistent disclosure on reapplication".to_string(),
                ],
            ),
        ),
    }
}

fn medical(
    condition: &MedicalCondition,
) -> (Option<InadmissibilityGround>, Option<DefenseStrategy>) {
    let cost = condition.annual_cost;
    if cost <= EXCESSIVE_DEMAND_THRESHOLD {
        return (None, None);
    }

    let strategy = if cost <= MITIGATION_CEILING {
        strategy(
            "Mitigation plan",
            &[
                format!(
                    "annual cost of ${cost} exceeds the ${EXCESSIVE_DEMAND_THRESHOLD} threshold"
                ),
                "show private coverage or a signed declaration to pay for services".to_string(),
                "obtain a specialist opinion that challenges the projected cost".to_string(),
            ],
        )
    } else {
        strategy(
            "Humanitarian and compassionate grounds",
            &[
                format!("annual cost of ${cost} is well beyond a credible mitigation plan"),
                "rely on family ties and hardship factors".to_string(),
            ],
        )
    };
    (Some(InadmissibilityGround::MedicalExcessiveDemand), Some(strategy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn clean() -> LegalInput {
        LegalInput {
            criminal_record: None,
            medical_condition: None,
            prior_refusal: None,
            as_of: date(2025, 6, 1),
        }
    }

    #[test]
    fn clean_history_is_admissible_without_strategies() {
        let defense = analyze_legal_defense(&clean());
        assert!(!defense.inadmissibility.is_inadmissible);
        assert!(defense.inadmissibility.ground.is_none());
        assert!(defense.defense_strategy.is_empty());
    }

    #[test]
    fn old_minor_offence_is_deemed_rehabilitated() {
        let input = LegalInput {
            criminal_record: Some(CriminalRecord {
                max_sentence_years: 2,
                sentence_completed: date(2012, 1, 15),
            }),
            ..clean()
        };

        let defense = analyze_legal_defense(&input);
        assert!(!defense.inadmissibility.is_inadmissible);
        assert_eq!(defense.defense_strategy[0].title, "Deemed rehabilitation");
    }

    #[test]
    fn serious_offence_needs_individual_rehabilitation() {
        let input = LegalInput {
            criminal_record: Some(CriminalRecord {
                max_sentence_years: 14,
                sentence_completed: date(2012, 1, 15),
            }),
            ..clean()
        };

        let defense = analyze_legal_defense(&input);
        assert_eq!(
            defense.inadmissibility.ground,
            Some(InadmissibilityGround::SeriousCriminality)
        );
        assert_eq!(
            defense.defense_strategy[0].title,
            "Individual rehabilitation application"
        );
    }

    #[test]
    fn recent_offence_falls_back_to_temporary_permit() {
        let input = LegalInput {
            criminal_record: Some(CriminalRecord {
                max_sentence_years: 5,
                sentence_completed: date(2023, 3, 1),
            }),
            ..clean()
        };

        let defense = analyze_legal_defense(&input);
        assert_eq!(defense.inadmissibility.ground, Some(InadmissibilityGround::Criminality));
        let strategy = &defense.defense_strategy[0];
        assert_eq!(strategy.title, "Temporary resident permit");
        assert!(strategy.arguments.iter().any(|arg| arg.contains("2028-03-01")));
    }

    #[test]
    fn misrepresentation_bar_runs_five_years() {
        let refusal = |refused_on| LegalInput {
            prior_refusal: Some(RefusalRecord {
                reason: RefusalReason::Misrepresentation,
                refused_on,
            }),
            ..clean()
        };

        let active = analyze_legal_defense(&refusal(date(2022, 1, 1)));
        assert_eq!(
            active.inadmissibility.ground,
            Some(InadmissibilityGround::Misrepresentation)
        );

        let expired = analyze_legal_defense(&refusal(date(2019, 1, 1)));
        assert!(!expired.inadmissibility.is_inadmissible);
        assert_eq!(expired.defense_strategy.len(), 1);
    }

    #[test]
    fn medical_cost_below_threshold_is_ignored() {
        let input = LegalInput {
            medical_condition: Some(MedicalCondition { annual_cost: 12_000 }),
            ..clean()
        };

        let defense = analyze_legal_defense(&input);
        assert!(!defense.inadmissibility.is_inadmissible);
        assert!(defense.defense_strategy.is_empty());
    }

    #[test]
    fn most_severe_ground_is_named() {
        let input = LegalInput {
            criminal_record: Some(CriminalRecord {
                max_sentence_years: 5,
                sentence_completed: date(2024, 1, 1),
            }),
            medical_condition: Some(MedicalCondition { annual_cost: 40_000 }),
            prior_refusal: Some(RefusalRecord {
                reason: RefusalReason::Misrepresentation,
                refused_on: date(2024, 6, 1),
            }),
            ..clean()
        };

        let defense = analyze_legal_defense(&input);
        assert_eq!(defense.inadmissibility.ground, Some(InadmissibilityGround::Criminality));
        let titles: Vec<_> = defense
            .defense_strategy
            .iter()
            .map(|strategy| strategy.title.as_str())
            .collect();
        assert_eq!(
            titles,
            ["Temporary resident permit", "Misrepresentation bar", "Mitigation plan"]
        );
    }

    #[test]
    fn evaluation_date_defaults_to_today() {
        let before = crate::compliance::today();
        let input: LegalInput =
            serde_json::from_value(serde_json::json!({})).expect("empty legal input");
        let after = crate::compliance::today();

        assert!(before <= input.as_of && input.as_of <= after);
        assert!(!analyze_legal_defense(&input).inadmissibility.is_inadmissible);
    }
}
