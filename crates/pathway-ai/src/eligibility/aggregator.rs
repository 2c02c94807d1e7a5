use tracing::debug;

use super::crs::calculate_crs;
use super::domain::{CandidateProfile, ProgramResult};
use super::programs::ProgramRegistry;

/// Stateless aggregator over an injected module registry.
#[derive(Debug, Clone, Default)]
pub struct EligibilityAggregator {
    registry: ProgramRegistry,
}

impl EligibilityAggregator {
    pub fn new(registry: ProgramRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProgramRegistry {
        &self.registry
    }

    /// Evaluate every registered module and rank the combined output.
    pub fn assess(&self, profile: &CandidateProfile) -> Vec<ProgramResult> {
        let crs = calculate_crs(profile).total;
        self.assess_with_crs(profile, crs)
    }

    /// Same as [`assess`](Self::assess) for callers that already hold the CRS total.
    pub fn assess_with_crs(&self, profile: &CandidateProfile, crs: u32) -> Vec<ProgramResult> {
        let mut results = Vec::new();
        for module in self.registry.modules() {
            let produced = (module.evaluate)(profile, crs);
            debug!(module = module.key, results = produced.len(), "program module evaluated");
            results.extend(produced);
        }

        rank(&mut results);
        results
    }
}

/// Tier descending, then score descending. `sort_by` is stable, so ties keep
/// registration order.
pub fn rank(results: &mut [ProgramResult]) {
    results.sort_by(|left, right| {
        right
            .draw_probability
            .cmp(&left.draw_probability)
            .then_with(|| right.score.cmp(&left.score))
    });
}

/// Rank a profile against the standard module set.
pub fn assess(profile: &CandidateProfile) -> Vec<ProgramResult> {
    EligibilityAggregator::default().assess(profile)
}
