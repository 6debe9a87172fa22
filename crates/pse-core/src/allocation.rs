//! Allocation breakdown - per-segment view of the budget split

use serde::{Deserialize, Serialize};

use crate::{CampaignInputs, DerivedMetrics};

/// The five slices a campaign budget is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    MediaInvestment,
    Taxes,
    Overhead,
    Profit,
    AgencyFee,
}

impl SegmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::MediaInvestment => "Media Investment",
            SegmentKind::Taxes => "Taxes",
            SegmentKind::Overhead => "Operational Overhead",
            SegmentKind::Profit => "Net Profit",
            SegmentKind::AgencyFee => "Agency Fee / BV",
        }
    }
}

/// One slice of the allocation: its nominal percentage and derived amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationSegment {
    pub kind: SegmentKind,
    pub percentage: f64,
    pub amount: f64,
}

/// Segment list in presentation order: media investment first, then the
/// four deductions.
pub fn breakdown(inputs: &CampaignInputs, derived: &DerivedMetrics) -> Vec<AllocationSegment> {
    vec![
        AllocationSegment {
            kind: SegmentKind::MediaInvestment,
            percentage: derived.media_percentage,
            amount: derived.available_media_budget,
        },
        AllocationSegment {
            kind: SegmentKind::Taxes,
            percentage: inputs.taxes_pct,
            amount: derived.tax_amount,
        },
        AllocationSegment {
            kind: SegmentKind::Overhead,
            percentage: inputs.overhead_pct,
            amount: derived.overhead_amount,
        },
        AllocationSegment {
            kind: SegmentKind::Profit,
            percentage: inputs.profit_pct,
            amount: derived.profit_amount,
        },
        AllocationSegment {
            kind: SegmentKind::AgencyFee,
            percentage: inputs.agency_fee_pct,
            amount: derived.agency_fee_amount,
        },
    ]
}

/// Proportional share of `amount` within `total`, in percent.
///
/// Charts normalize segment values against the allocation total; a
/// non-positive total means there is nothing to normalize against and the
/// share is 0.
pub fn share(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}
