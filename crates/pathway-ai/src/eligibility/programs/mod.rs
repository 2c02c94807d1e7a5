//! Jurisdiction program modules.
//!
//! Each module is a free function with the same shape. Point grids and thresholds live inside
//! the module that uses them; two jurisdictions never share a grid.

mod alberta;
mod atlantic;
mod british_columbia;
mod federal;
mod manitoba;
mod nova_scotia;
mod ontario;
mod saskatchewan;

pub use alberta::evaluate_alberta;
pub use atlantic::evaluate_atlantic;
pub use british_columbia::evaluate_british_columbia;
pub use federal::evaluate_federal;
pub use manitoba::evaluate_manitoba;
pub use nova_scotia::evaluate_nova_scotia;
pub use ontario::evaluate_ontario;
pub use saskatchewan::evaluate_saskatchewan;

use super::domain::{
    CandidateProfile, DrawProbability, Jurisdiction, OccupationCategory, ProgramResult,
};

/// Contract shared by every jurisdiction: `(profile, crs) -> results`.
pub type EvaluateFn = fn(&CandidateProfile, u32) -> Vec<ProgramResult>;

/// Registration record for one jurisdiction module.
#[derive(Debug, Clone, Copy)]
pub struct ProgramModule {
    pub key: &'static str,
    pub label: &'static str,
    pub evaluate: EvaluateFn,
}

impl ProgramModule {
    pub const fn new(key: &'static str, label: &'static str, evaluate: EvaluateFn) -> Self {
        Self {
            key,
            label,
            evaluate,
        }
    }
}

pub const STANDARD_MODULES: [ProgramModule; 8] = [
    ProgramModule::new("federal", "Federal Express Entry", evaluate_federal),
    ProgramModule::new("ontario", "Ontario Immigrant Nominee Program", evaluate_ontario),
    ProgramModule::new(
        "british_columbia",
        "BC Provincial Nominee Program",
        evaluate_british_columbia,
    ),
    ProgramModule::new(
        "saskatchewan",
        "Saskatchewan Immigrant Nominee Program",
        evaluate_saskatchewan,
    ),
    ProgramModule::new("manitoba", "Manitoba Provincial Nominee Program", evaluate_manitoba),
    ProgramModule::new("alberta", "Alberta Advantage Immigration Program", evaluate_alberta),
    ProgramModule::new("atlantic", "Atlantic Immigration Program", evaluate_atlantic),
    ProgramModule::new("nova_scotia", "Nova Scotia Nominee Program", evaluate_nova_scotia),
];

pub fn lookup(key: &str) -> Option<ProgramModule> {
    let key = key.trim();
    STANDARD_MODULES
        .iter()
        .find(|module| module.key.eq_ignore_ascii_case(key))
        .copied()
}

/// Immutable, ordered module list handed to the aggregator.
#[derive(Debug, Clone)]
pub struct ProgramRegistry {
    modules: Vec<ProgramModule>,
}

impl ProgramRegistry {
    pub fn new(modules: Vec<ProgramModule>) -> Self {
        Self { modules }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_MODULES.to_vec())
    }

    /// Build a registry from module keys, keeping the given order.
    pub fn from_keys<I, S>(keys: I) -> Result<Self, UnknownProgram>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut modules = Vec::new();
        for key in keys {
            let key = key.as_ref();
            if key.trim().is_empty() {
                continue;
            }
            let module = lookup(key).ok_or_else(|| UnknownProgram(key.trim().to_string()))?;
            modules.push(module);
        }
        Ok(Self::new(modules))
    }

    pub fn register(mut self, module: ProgramModule) -> Self {
        self.modules.push(module);
        self
    }

    pub fn modules(&self) -> &[ProgramModule] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown program module '{0}'")]
pub struct UnknownProgram(pub String);

/// Score thresholds a stream must strictly exceed to reach each tier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Thresholds {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Thresholds {
    pub(crate) const fn new(high: u32, medium: u32, low: u32) -> Self {
        Self { high, medium, low }
    }

    /// A score sitting exactly on a threshold lands in the lower tier.
    pub(crate) fn classify(&self, score: u32) -> DrawProbability {
        if score > self.high {
            DrawProbability::High
        } else if score > self.medium {
            DrawProbability::Medium
        } else if score > self.low {
            DrawProbability::Low
        } else {
            DrawProbability::None
        }
    }
}

/// Whether the candidate clears the minimum of at least one federal class and can hold an
/// Express Entry profile. Grid and funds checks stay with the federal module.
pub(crate) fn enters_express_entry_pool(profile: &CandidateProfile) -> bool {
    let scores = profile.language.primary.scores;
    let experience_class =
        profile.work.canadian_years >= 1.0 && profile.language.best_floor() >= 5;
    let skilled_worker = profile.work.total_years() >= 1.0 && profile.language.primary_floor() >= 7;
    let trade_offer = profile
        .work
        .job_offer
        .as_ref()
        .is_some_and(|offer| offer.occupation == OccupationCategory::Trades);
    let skilled_trades = (profile.education.trade_certificate || trade_offer)
        && profile.work.years_in(OccupationCategory::Trades) >= 2.0
        && scores.speaking >= 5
        && scores.listening >= 5
        && scores.reading >= 4
        && scores.writing >= 4;

    experience_class || skilled_worker || skilled_trades
}

/// Incremental builder for one stream result.
pub(crate) struct Stream {
    result: ProgramResult,
}

impl Stream {
    pub(crate) fn new(jurisdiction: Jurisdiction, name: &str) -> Self {
        Self {
            result: ProgramResult {
                jurisdiction,
                stream: name.to_string(),
                score: 0,
                max_score: 0,
                eligible: true,
                draw_probability: DrawProbability::None,
                cutoff: None,
                warnings: Vec::new(),
                checklist: Vec::new(),
            },
        }
    }

    /// Hard gate: marks the stream ineligible and records why.
    pub(crate) fn require(&mut self, satisfied: bool, reason: impl Into<String>) {
        if !satisfied {
            self.result.eligible = false;
            self.result.warnings.push(reason.into());
        }
    }

    /// Gate for streams drawn from the Express Entry pool.
    pub(crate) fn require_pool_entry(&mut self, profile: &CandidateProfile) {
        self.require(
            enters_express_entry_pool(profile),
            "an active Express Entry profile is required: no federal class minimum is met",
        );
    }

    pub(crate) fn warn(&mut self, warning: impl Into<String>) {
        self.result.warnings.push(warning.into());
    }

    pub(crate) fn is_eligible(&self) -> bool {
        self.result.eligible
    }

    pub(crate) fn points(mut self, score: u32, max_score: u32) -> Self {
        self.result.score = score.min(max_score);
        self.result.max_score = max_score;
        self
    }

    pub(crate) fn cutoff(mut self, cutoff: u32) -> Self {
        self.result.cutoff = Some(cutoff);
        self
    }

    pub(crate) fn probability(mut self, probability: DrawProbability) -> Self {
        self.result.draw_probability = probability;
        self
    }

    pub(crate) fn ranked(self, thresholds: Thresholds) -> Self {
        let probability = thresholds.classify(self.result.score);
        self.probability(probability)
    }

    pub(crate) fn checklist(mut self, keys: &[&str]) -> Self {
        self.result
            .checklist
            .extend(keys.iter().map(|key| key.to_string()));
        self
    }

    /// Ineligible streams never carry a draw probability.
    pub(crate) fn finish(mut self) -> ProgramResult {
        if !self.result.eligible {
            self.result.draw_probability = DrawProbability::None;
        }
        self.result
    }
}
