//! Core domain models and logic for pse
//!
//! This crate contains:
//! - Domain models (CampaignInputs, DerivedMetrics, AllocationSegment)
//! - Allocation engine (deterministic budget derivation)
//! - Consistency checks (allocation residual, CPM cross-check)

pub mod allocation;
pub mod campaign;
pub mod engine;
pub mod metrics;

pub use allocation::{AllocationSegment, SegmentKind, breakdown, share};
pub use campaign::CampaignInputs;
pub use engine::{
    ALLOCATION_EPSILON, AllocationEngine, IMPRESSION_EPSILON, ValidationReport, ValidationResult,
};
pub use metrics::DerivedMetrics;
