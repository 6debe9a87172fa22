//! Derived financial metrics

use serde::{Deserialize, Serialize};

/// Metrics derived from one [`CampaignInputs`](crate::CampaignInputs)
/// snapshot.
///
/// A value object with no identity: recomputed in full on every input
/// change, bit-identical for identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub tax_amount: f64,
    pub overhead_amount: f64,
    pub profit_amount: f64,
    pub agency_fee_amount: f64,
    /// Residual spendable on media after all deductions. Negative when the
    /// deduction percentages exceed 100; that is a reportable state, not an
    /// error.
    pub available_media_budget: f64,
    /// Buy-side cost per thousand impressions in local currency.
    pub gross_cpm_local: f64,
    /// Projected impression volume; exactly 0 when the media budget or the
    /// gross CPM is non-positive.
    pub total_impressions: f64,
    /// Price per thousand impressions that recovers the total budget;
    /// exactly 0 when there are no impressions.
    pub selling_cpm: f64,
    /// Sum of the four deduction percentages.
    pub total_percentage: f64,
    /// 100 minus `total_percentage`; negative on over-allocation.
    pub media_percentage: f64,
    /// Deduction amounts plus media budget; equals the total budget up to
    /// floating-point accumulation.
    pub consistency_sum: f64,
}

impl DerivedMetrics {
    /// Sell-vs-buy CPM margin in percent; 0 when there is no buy price.
    pub fn cpm_markup_pct(&self) -> f64 {
        if self.gross_cpm_local > 0.0 {
            (self.selling_cpm / self.gross_cpm_local - 1.0) * 100.0
        } else {
            0.0
        }
    }

    /// Deduction amounts in input order (taxes, overhead, profit, agency
    /// fee).
    pub fn deduction_amounts(&self) -> [f64; 4] {
        [
            self.tax_amount,
            self.overhead_amount,
            self.profit_amount,
            self.agency_fee_amount,
        ]
    }
}
