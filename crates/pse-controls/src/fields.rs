//! Per-field editing bounds

use pse_core::CampaignInputs;
use serde::{Deserialize, Serialize};

/// Bounds and slider step for one input field.
///
/// `step` is carried for UI consumers (slider granularity); clamping does
/// not snap to it, so in-range values pass through bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldSpec {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into the field's range. NaN propagates; the engine
    /// stays defined on it and validation flags the result.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Identifies one editable campaign input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignField {
    TotalBudget,
    TaxesPct,
    OverheadPct,
    ProfitPct,
    AgencyFeePct,
    ExchangeRate,
    CpmBidUsd,
    BidSyncFee,
}

impl CampaignField {
    pub const ALL: [CampaignField; 8] = [
        CampaignField::TotalBudget,
        CampaignField::TaxesPct,
        CampaignField::OverheadPct,
        CampaignField::ProfitPct,
        CampaignField::AgencyFeePct,
        CampaignField::ExchangeRate,
        CampaignField::CpmBidUsd,
        CampaignField::BidSyncFee,
    ];

    /// Editing bounds for this field.
    pub fn spec(self) -> FieldSpec {
        match self {
            CampaignField::TotalBudget => FieldSpec::new(1_000.0, 10_000_000.0, 1_000.0),
            CampaignField::TaxesPct => FieldSpec::new(0.0, 50.0, 0.01),
            CampaignField::OverheadPct => FieldSpec::new(0.0, 50.0, 0.01),
            CampaignField::ProfitPct => FieldSpec::new(0.0, 60.0, 0.01),
            CampaignField::AgencyFeePct => FieldSpec::new(0.0, 30.0, 0.01),
            CampaignField::ExchangeRate => FieldSpec::new(1.0, 10.0, 0.01),
            CampaignField::CpmBidUsd => FieldSpec::new(0.01, 20.0, 0.01),
            CampaignField::BidSyncFee => FieldSpec::new(0.0, 5.0, 0.01),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CampaignField::TotalBudget => "Total Budget",
            CampaignField::TaxesPct => "Taxes",
            CampaignField::OverheadPct => "Operational Overhead",
            CampaignField::ProfitPct => "Net Profit Target",
            CampaignField::AgencyFeePct => "Agency Fee / BV",
            CampaignField::ExchangeRate => "Exchange Rate (BRL/USD)",
            CampaignField::CpmBidUsd => "CPM Bid Price (USD)",
            CampaignField::BidSyncFee => "Bid Sync / Tech Fee (BRL)",
        }
    }

    pub fn get(self, inputs: &CampaignInputs) -> f64 {
        match self {
            CampaignField::TotalBudget => inputs.total_budget,
            CampaignField::TaxesPct => inputs.taxes_pct,
            CampaignField::OverheadPct => inputs.overhead_pct,
            CampaignField::ProfitPct => inputs.profit_pct,
            CampaignField::AgencyFeePct => inputs.agency_fee_pct,
            CampaignField::ExchangeRate => inputs.exchange_rate,
            CampaignField::CpmBidUsd => inputs.cpm_bid_usd,
            CampaignField::BidSyncFee => inputs.bid_sync_fee,
        }
    }

    pub fn set(self, inputs: &mut CampaignInputs, value: f64) {
        match self {
            CampaignField::TotalBudget => inputs.total_budget = value,
            CampaignField::TaxesPct => inputs.taxes_pct = value,
            CampaignField::OverheadPct => inputs.overhead_pct = value,
            CampaignField::ProfitPct => inputs.profit_pct = value,
            CampaignField::AgencyFeePct => inputs.agency_fee_pct = value,
            CampaignField::ExchangeRate => inputs.exchange_rate = value,
            CampaignField::CpmBidUsd => inputs.cpm_bid_usd = value,
            CampaignField::BidSyncFee => inputs.bid_sync_fee = value,
        }
    }
}

/// Clamp every field of an input snapshot into its editing range.
pub fn sanitize(inputs: &CampaignInputs) -> CampaignInputs {
    let mut out = inputs.clone();
    for field in CampaignField::ALL {
        field.set(&mut out, field.spec().clamp(field.get(inputs)));
    }
    out
}
