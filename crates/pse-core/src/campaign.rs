//! Campaign input parameters

use serde::{Deserialize, Serialize};

/// One snapshot of caller-supplied campaign parameters.
///
/// Supplied fresh on every recomputation; the engine never mutates it and
/// never enforces bounds (that is the input-control layer's job). Any
/// numeric values produce a defined result downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignInputs {
    /// Gross campaign budget in local currency.
    pub total_budget: f64,
    /// Tax rate, percent of total budget.
    pub taxes_pct: f64,
    /// Operational overhead rate, percent of total budget.
    pub overhead_pct: f64,
    /// Target net profit rate, percent of total budget.
    pub profit_pct: f64,
    /// Agency fee / BV rate, percent of total budget.
    pub agency_fee_pct: f64,
    /// Local currency units per USD.
    pub exchange_rate: f64,
    /// Buy-side CPM bid in USD.
    pub cpm_bid_usd: f64,
    /// Fixed per-mille tech fee (bid sync) in local currency.
    pub bid_sync_fee: f64,
}

impl Default for CampaignInputs {
    fn default() -> Self {
        Self {
            total_budget: 100_000.0,
            taxes_pct: 18.33,
            overhead_pct: 23.0,
            profit_pct: 30.0,
            agency_fee_pct: 10.0,
            exchange_rate: 5.50,
            cpm_bid_usd: 0.50,
            bid_sync_fee: 0.15,
        }
    }
}

impl CampaignInputs {
    /// Sum of the four deduction percentages.
    pub fn total_percentage(&self) -> f64 {
        self.taxes_pct + self.overhead_pct + self.profit_pct + self.agency_fee_pct
    }
}
