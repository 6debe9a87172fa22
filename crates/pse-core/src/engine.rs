//! Allocation engine - budget derivation and consistency checks
//!
//! CRITICAL: this module must stay deterministic and total. Same inputs
//! produce bit-identical outputs, and every numeric edge case resolves to
//! a defined zero rather than NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::{CampaignInputs, DerivedMetrics};

/// Currency tolerance for the allocation residual check.
pub const ALLOCATION_EPSILON: f64 = 0.01;

/// Impression-count tolerance for the CPM cross-check.
pub const IMPRESSION_EPSILON: f64 = 1.0;

/// Outcome of a single consistency predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub delta: f64,
}

/// Both consistency predicates over one compute pass.
///
/// The two checks guard different invariants (percentage-sum residual vs
/// CPM/impression consistency) and are computed independently, so a bug in
/// one derivation path cannot silently satisfy the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub allocation: ValidationResult,
    pub impressions: ValidationResult,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.allocation.is_valid && self.impressions.is_valid
    }
}

/// Pure derivation engine: maps an input snapshot to a consistent set of
/// financial metrics. Stateless and reentrant; concurrent calls never
/// interfere.
pub struct AllocationEngine;

impl AllocationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Derive all metrics from one input snapshot.
    ///
    /// Never fails and never panics: out-of-range inputs produce
    /// mathematically degenerate (zero or negative) outputs, which the
    /// caller surfaces through [`validate`](Self::validate) rather than
    /// through an error.
    pub fn compute(&self, inputs: &CampaignInputs) -> DerivedMetrics {
        let tax_amount = inputs.total_budget * (inputs.taxes_pct / 100.0);
        let overhead_amount = inputs.total_budget * (inputs.overhead_pct / 100.0);
        let profit_amount = inputs.total_budget * (inputs.profit_pct / 100.0);
        let agency_fee_amount = inputs.total_budget * (inputs.agency_fee_pct / 100.0);

        // Media budget is the residual, so the allocation always sums back
        // to the total up to floating-point accumulation.
        let deduction_total = tax_amount + overhead_amount + profit_amount + agency_fee_amount;
        let available_media_budget = inputs.total_budget - deduction_total;

        let gross_cpm_local = inputs.cpm_bid_usd * inputs.exchange_rate + inputs.bid_sync_fee;

        let total_impressions = if available_media_budget > 0.0 && gross_cpm_local > 0.0 {
            available_media_budget / gross_cpm_local * 1000.0
        } else {
            0.0
        };

        let selling_cpm = if total_impressions > 0.0 {
            inputs.total_budget / total_impressions * 1000.0
        } else {
            0.0
        };

        let total_percentage = inputs.total_percentage();
        let media_percentage = 100.0 - total_percentage;

        DerivedMetrics {
            tax_amount,
            overhead_amount,
            profit_amount,
            agency_fee_amount,
            available_media_budget,
            gross_cpm_local,
            total_impressions,
            selling_cpm,
            total_percentage,
            media_percentage,
            consistency_sum: deduction_total + available_media_budget,
        }
    }

    /// Run both consistency checks against a previously computed result.
    pub fn validate(
        &self,
        inputs: &CampaignInputs,
        derived: &DerivedMetrics,
    ) -> ValidationReport {
        ValidationReport {
            allocation: self.check_allocation(inputs, derived),
            impressions: self.check_impressions(inputs, derived),
        }
    }

    /// Percentage-sum residual check: the deduction amounts plus the media
    /// budget must reproduce the total budget within
    /// [`ALLOCATION_EPSILON`].
    ///
    /// The sum is recomputed here rather than read from
    /// [`DerivedMetrics::consistency_sum`], so the check stays meaningful
    /// if the residual formula in `compute` ever changes inconsistently.
    pub fn check_allocation(
        &self,
        inputs: &CampaignInputs,
        derived: &DerivedMetrics,
    ) -> ValidationResult {
        let sum = derived.tax_amount
            + derived.overhead_amount
            + derived.profit_amount
            + derived.agency_fee_amount
            + derived.available_media_budget;
        let delta = sum - inputs.total_budget;
        ValidationResult {
            is_valid: delta.abs() < ALLOCATION_EPSILON,
            delta,
        }
    }

    /// CPM/impression cross-check: impressions reconstructed from the
    /// quoted selling CPM must match impressions derived from the media
    /// budget within [`IMPRESSION_EPSILON`].
    ///
    /// The CPM leg is the algebraic inverse of the selling-CPM formula, so
    /// this verifies that `selling_cpm` and `total_impressions` stayed
    /// mutually consistent; it is not a third derivation. Both legs hit 0
    /// together on degenerate inputs, which keeps the check valid there.
    pub fn check_impressions(
        &self,
        inputs: &CampaignInputs,
        derived: &DerivedMetrics,
    ) -> ValidationResult {
        let deduction_total = inputs.total_budget * (inputs.total_percentage() / 100.0);
        let media_budget = inputs.total_budget - deduction_total;
        let gross_cpm = inputs.cpm_bid_usd * inputs.exchange_rate + inputs.bid_sync_fee;

        let impressions_from_media = if media_budget > 0.0 && gross_cpm > 0.0 {
            media_budget / gross_cpm * 1000.0
        } else {
            0.0
        };
        let impressions_from_cpm = if derived.selling_cpm > 0.0 {
            inputs.total_budget / derived.selling_cpm * 1000.0
        } else {
            0.0
        };

        let delta = impressions_from_cpm - impressions_from_media;
        ValidationResult {
            is_valid: delta.abs() < IMPRESSION_EPSILON,
            delta,
        }
    }
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}
