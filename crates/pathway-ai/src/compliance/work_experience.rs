use serde::{Deserialize, Serialize};

/// Program the hours are being counted toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceProgram {
    #[default]
    Cec,
    Fsw,
    Pnp,
}

impl ExperienceProgram {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cec => "Canadian Experience Class",
            Self::Fsw => "Federal Skilled Worker",
            Self::Pnp => "Provincial Nominee Program",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceInput {
    pub hours_per_week: f32,
    pub weeks_worked: u32,
    #[serde(default)]
    pub is_seasonal: bool,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub is_self_employed: bool,
    #[serde(default)]
    pub is_coop: bool,
    #[serde(default)]
    pub program: ExperienceProgram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceValidation {
    /// Hours that count toward the full-time-equivalent floor.
    pub credited_hours: u32,
    pub warnings: Vec<String>,
}

/// One year of full-time work: 30 hours a week for 52 weeks.
pub const FULL_TIME_HOURS: u32 = 1_560;
/// Weekly hours beyond this are not credited.
pub const WEEKLY_CREDIT_CAP: f32 = 30.0;
/// Off-campus work limit attached to a study permit.
pub const STUDY_PERMIT_WEEKLY_LIMIT: f32 = 24.0;

pub fn validate_work_experience(input: &WorkExperienceInput) -> WorkExperienceValidation {
    let hours = if input.hours_per_week.is_finite() && input.hours_per_week > 0.0 {
        input.hours_per_week
    } else {
        0.0
    };
    let credited_hours = (hours.min(WEEKLY_CREDIT_CAP) * input.weeks_worked as f32).floor() as u32;
    let mut warnings = Vec::new();

    if credited_hours < FULL_TIME_HOURS {
        warnings.push(format!(
            "{credited_hours} credited hours fall short of the {FULL_TIME_HOURS}-hour full-time equivalent required by the {}",
            input.program.label()
        ));
    }

    if input.is_seasonal {
        warnings.push(
            "seasonal work leaves gaps; only hours actually worked count toward continuous experience"
                .to_string(),
        );
    }

    if input.is_student {
        if input.program == ExperienceProgram::Cec {
            warnings.push(
                "work performed while a full-time student does not count toward the Canadian Experience Class"
                    .to_string(),
            );
        }
        if hours > STUDY_PERMIT_WEEKLY_LIMIT {
            warnings.push(format!(
                "{hours} hours a week exceeds the {STUDY_PERMIT_WEEKLY_LIMIT}-hour off-campus limit of a study permit"
            ));
        }
    }

    if input.is_self_employed {
        let warning = if input.program == ExperienceProgram::Cec {
            "self-employed work is excluded from the Canadian Experience Class"
        } else {
            "self-employment must be backed by contracts, invoices and tax records"
        };
        warnings.push(warning.to_string());
    }

    if input.is_coop {
        warnings.push(
            "co-op terms that form part of a study program are not recognised as work experience"
                .to_string(),
        );
    }

    WorkExperienceValidation {
        credited_hours,
        warnings,
    }
}
