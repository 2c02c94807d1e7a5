use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days after expiry during which status may still be restored from inside the country.
pub const RESTORATION_WINDOW_DAYS: i64 = 90;
/// Extensions should be filed at least this many days before expiry.
pub const EXTENSION_LEAD_DAYS: i64 = 30;
const PLANNING_HORIZON_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    InCanada,
    OutsideCanada,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInput {
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub has_submitted_extension: bool,
    pub location: Location,
    /// Evaluation date, today when omitted.
    #[serde(default = "super::today")]
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    Valid,
    Maintained,
    RestorationPeriod,
    OutOfStatus,
}

impl StatusState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Maintained => "Maintained",
            Self::RestorationPeriod => "Restoration period",
            Self::OutOfStatus => "Out of status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub summary: String,
    pub deadline: Option<NaiveDate>,
}

impl ActionStep {
    fn new(summary: &str, deadline: Option<NaiveDate>) -> Self {
        Self {
            summary: summary.to_string(),
            deadline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStrategy {
    pub status_state: StatusState,
    /// Negative once the permit has expired.
    pub days_remaining: i64,
    pub action_plan: Vec<ActionStep>,
}

pub fn analyze_status_strategy(input: &StatusInput) -> StatusStrategy {
    let days_remaining = (input.expiry_date - input.as_of).num_days();
    let status_state = classify(input, days_remaining);
    let action_plan = plan(input, status_state, days_remaining);

    StatusStrategy {
        status_state,
        days_remaining,
        action_plan,
    }
}

fn classify(input: &StatusInput, days_remaining: i64) -> StatusState {
    if days_remaining >= 0 {
        return StatusState::Valid;
    }
    // Implied status and restoration both end once the candidate leaves.
    if input.location == Location::OutsideCanada {
        return StatusState::OutOfStatus;
    }
    if input.has_submitted_extension {
        StatusState::Maintained
    } else if -days_remaining <= RESTORATION_WINDOW_DAYS {
        StatusState::RestorationPeriod
    } else {
        StatusState::OutOfStatus
    }
}

fn plan(input: &StatusInput, state: StatusState, days_remaining: i64) -> Vec<ActionStep> {
    let expiry = input.expiry_date;
    let offset = |days: i64| expiry.checked_add_signed(Duration::days(days));

    match state {
        StatusState::Valid if input.has_submitted_extension => vec![
            ActionStep::new("Extension on file; keep the submission receipt", None),
            ActionStep::new(
                "Remain in the country to benefit from maintained status",
                Some(expiry),
            ),
        ],
        StatusState::Valid if days_remaining <= EXTENSION_LEAD_DAYS => vec![
            ActionStep::new("File the extension application now", Some(expiry)),
            ActionStep::new("Do not travel until the extension is submitted", None),
        ],
        StatusState::Valid if days_remaining <= PLANNING_HORIZON_DAYS => vec![
            ActionStep::new(
                "Gather documents for an extension application",
                offset(-EXTENSION_LEAD_DAYS),
            ),
            ActionStep::new("File the extension before the permit expires", Some(expiry)),
        ],
        StatusState::Valid => vec![ActionStep::new(
            "No action required; revisit ninety days before expiry",
            offset(-PLANNING_HORIZON_DAYS),
        )],
        StatusState::Maintained => vec![
            ActionStep::new(
                "Continue under the conditions of the expired permit until a decision",
                None,
            ),
            ActionStep::new("Do not leave the country; departure ends maintained status", None),
            ActionStep::new("Answer any document requests promptly", None),
        ],
        StatusState::RestorationPeriod => vec![
            ActionStep::new(
                "File a restoration application immediately",
                offset(RESTORATION_WINDOW_DAYS),
            ),
            ActionStep::new("Stop working or studying until status is restored", None),
            ActionStep::new("Include the restoration fee and an explanation of the lapse", None),
        ],
        StatusState::OutOfStatus => {
            let mut steps = vec![
                ActionStep::new("Consult an immigration lawyer urgently", None),
                ActionStep::new("Cease all unauthorized work or study", None),
            ];
            if input.location == Location::OutsideCanada {
                steps.push(ActionStep::new(
                    "Apply for a new permit from outside the country",
                    None,
                ));
            } else {
                steps.push(ActionStep::new(
                    "Assess a temporary resident permit or departure plan",
                    None,
                ));
            }
            steps
        }
    }
}
