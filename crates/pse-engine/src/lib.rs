use anyhow::Result;
use pse_config::Config;
use pse_controls::sanitize;
use pse_core::{
    AllocationEngine, AllocationSegment, CampaignInputs, DerivedMetrics, ValidationReport,
    breakdown,
};
use pse_report::Proposal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One complete simulation pass: sanitized inputs plus everything derived
/// from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Inputs after clamping; what the figures were actually computed from.
    pub inputs: CampaignInputs,
    pub derived: DerivedMetrics,
    pub checks: ValidationReport,
    pub breakdown: Vec<AllocationSegment>,
}

pub struct Estimator {
    config: Config,
    engine: AllocationEngine,
}

impl Estimator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engine: AllocationEngine::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Build an estimator from the user's config file.
    pub fn from_config() -> Result<Self> {
        Ok(Self::new(Config::load()?))
    }

    /// Preset inputs for a fresh simulation.
    pub fn defaults(&self) -> CampaignInputs {
        self.config.defaults.clone()
    }

    /// Run one full pass: clamp the inputs, derive the metrics, check
    /// consistency, build the breakdown. Cheap enough to run on every
    /// input event.
    pub fn simulate(&self, raw: &CampaignInputs) -> Simulation {
        let inputs = sanitize(raw);
        let derived = self.engine.compute(&inputs);
        let checks = self.engine.validate(&inputs, &derived);

        if checks.is_valid() {
            debug!(
                "simulated campaign: {:.0} impressions at selling CPM {:.4}",
                derived.total_impressions, derived.selling_cpm
            );
        } else {
            warn!(
                "consistency checks failed: allocation delta {:.6}, impression delta {:.6}",
                checks.allocation.delta, checks.impressions.delta
            );
        }

        let breakdown = breakdown(&inputs, &derived);
        Simulation {
            inputs,
            derived,
            checks,
            breakdown,
        }
    }

    /// Export a simulation as a shareable proposal record.
    pub fn propose(&self, simulation: &Simulation) -> Proposal {
        Proposal::new(&simulation.inputs, &simulation.derived)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
