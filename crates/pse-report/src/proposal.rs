//! Proposal export - immutable record of one simulation

use pse_core::{CampaignInputs, DerivedMetrics};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::format;
use crate::status::ProposalStatus;

/// Immutable record of one exported simulation.
///
/// The summary text is deterministic for a given input snapshot (same
/// inputs, same text, same hash); id and timestamp identify the export
/// event itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub status: ProposalStatus,
    /// blake3 hex digest of `summary`.
    pub summary_hash: String,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    pub summary: String,
}

impl Proposal {
    pub fn new(inputs: &CampaignInputs, derived: &DerivedMetrics) -> Self {
        let summary = render_summary(inputs, derived);
        let summary_hash = blake3::hash(summary.as_bytes()).to_hex().to_string();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            status: ProposalStatus::default(),
            summary_hash,
            created_at: OffsetDateTime::now_utc(),
            summary,
        }
    }

    pub fn with_status(mut self, status: ProposalStatus) -> Self {
        self.status = status;
        self
    }
}

/// Render the shareable campaign summary (WhatsApp/email formatting).
///
/// Every input parameter and every derived figure appears in the text.
pub fn render_summary(inputs: &CampaignInputs, derived: &DerivedMetrics) -> String {
    format!(
        "\
📊 *PROGRAMMATIC CAMPAIGN PROPOSAL*
━━━━━━━━━━━━━━━━━━━━━━

💰 *Investment Summary*
• Total Budget: {total_budget}
• Media Investment: {media_budget}

📈 *Campaign Deliverables*
• Estimated Impressions: {impressions}
• Selling CPM: {selling_cpm}

💵 *Cost Breakdown*
• Taxes ({taxes_pct}%): {tax_amount}
• Overhead ({overhead_pct}%): {overhead_amount}
• Profit ({profit_pct}%): {profit_amount}
• Agency Fee ({agency_fee_pct}%): {agency_fee_amount}

⚙️ *Technical Parameters*
• Exchange Rate: R$ {exchange_rate:.2}/USD
• CPM Bid: {cpm_bid}
• Tech Fee: R$ {tech_fee:.2}
• Gross CPM: {gross_cpm}

━━━━━━━━━━━━━━━━━━━━━━
_Generated by Programmatic Sales Estimator_",
        total_budget = format::brl(inputs.total_budget),
        media_budget = format::brl(derived.available_media_budget),
        impressions = format::count(derived.total_impressions),
        selling_cpm = format::brl(derived.selling_cpm),
        taxes_pct = inputs.taxes_pct,
        tax_amount = format::brl(derived.tax_amount),
        overhead_pct = inputs.overhead_pct,
        overhead_amount = format::brl(derived.overhead_amount),
        profit_pct = inputs.profit_pct,
        profit_amount = format::brl(derived.profit_amount),
        agency_fee_pct = inputs.agency_fee_pct,
        agency_fee_amount = format::brl(derived.agency_fee_amount),
        exchange_rate = inputs.exchange_rate,
        cpm_bid = format::usd(inputs.cpm_bid_usd),
        tech_fee = inputs.bid_sync_fee,
        gross_cpm = format::brl(derived.gross_cpm_local),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pse_core::AllocationEngine;

    fn reference() -> (CampaignInputs, DerivedMetrics) {
        let inputs = CampaignInputs::default();
        let derived = AllocationEngine::new().compute(&inputs);
        (inputs, derived)
    }

    #[test]
    fn test_summary_presents_every_field() {
        let (inputs, derived) = reference();
        let summary = render_summary(&inputs, &derived);

        assert!(summary.contains("Total Budget: R$ 100.000,00"));
        assert!(summary.contains("Media Investment: R$ 18.670,00"));
        assert!(summary.contains("Estimated Impressions: 6.437.931"));
        assert!(summary.contains("Selling CPM: R$ 15,53"));
        assert!(summary.contains("Taxes (18.33%): R$ 18.330,00"));
        assert!(summary.contains("Overhead (23%): R$ 23.000,00"));
        assert!(summary.contains("Profit (30%): R$ 30.000,00"));
        assert!(summary.contains("Agency Fee (10%): R$ 10.000,00"));
        assert!(summary.contains("Exchange Rate: R$ 5.50/USD"));
        assert!(summary.contains("CPM Bid: US$ 0.50"));
        assert!(summary.contains("Tech Fee: R$ 0.15"));
        assert!(summary.contains("Gross CPM: R$ 2,90"));
    }

    #[test]
    fn test_proposal_hash_is_deterministic() {
        let (inputs, derived) = reference();
        let a = Proposal::new(&inputs, &derived);
        let b = Proposal::new(&inputs, &derived);

        assert_eq!(a.summary, b.summary);
        assert_eq!(a.summary_hash, b.summary_hash);
        assert_ne!(a.id, b.id);
        assert_eq!(a.status, ProposalStatus::Analysis);
    }

    #[test]
    fn test_with_status() {
        let (inputs, derived) = reference();
        let proposal = Proposal::new(&inputs, &derived).with_status(ProposalStatus::Closed);
        assert_eq!(proposal.status, ProposalStatus::Closed);
    }

    #[test]
    fn test_serialization_round_trip() {
        let (inputs, derived) = reference();
        let proposal = Proposal::new(&inputs, &derived);
        let json = serde_json::to_string(&proposal).unwrap();
        let parsed: Proposal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.summary_hash, proposal.summary_hash);
        // Timestamps serialize at second precision.
        assert_eq!(
            parsed.created_at.unix_timestamp(),
            proposal.created_at.unix_timestamp()
        );
    }
}
