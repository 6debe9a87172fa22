//! Deal status labels

use serde::{Deserialize, Serialize};

/// Caller-owned deal stage attached to a proposal.
///
/// Presentation metadata only; the engine has no state machine and never
/// reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Analysis,
    Proposal,
    Closed,
}

impl Default for ProposalStatus {
    fn default() -> Self {
        ProposalStatus::Analysis
    }
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 3] = [
        ProposalStatus::Analysis,
        ProposalStatus::Proposal,
        ProposalStatus::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Analysis => "In Analysis",
            ProposalStatus::Proposal => "Proposal Sent",
            ProposalStatus::Closed => "Closed",
        }
    }
}
