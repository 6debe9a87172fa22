//! Proposal export: formatted summaries and immutable export records

pub mod format;
pub mod proposal;
pub mod status;

pub use proposal::{Proposal, render_summary};
pub use status::ProposalStatus;
