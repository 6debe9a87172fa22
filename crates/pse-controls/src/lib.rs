//! Input-control layer: per-field bounds and numeric text parsing
//!
//! Sits between UI input events and the allocation engine. The engine
//! itself never enforces bounds; callers clamp here first.

pub mod fields;
pub mod parse;

pub use fields::{CampaignField, FieldSpec, sanitize};
pub use parse::{InputError, parse_decimal};
