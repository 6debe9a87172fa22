use pse_config::Config;
use pse_core::{CampaignInputs, SegmentKind, share};
use pse_engine::{Estimator, Simulation};
use pse_report::ProposalStatus;

#[test]
fn test_default_simulation_lifecycle() {
    let estimator = Estimator::with_defaults();
    let simulation = estimator.simulate(&estimator.defaults());

    assert!(simulation.checks.is_valid());
    assert!((simulation.derived.available_media_budget - 18_670.0).abs() < 1e-6);
    assert!((simulation.derived.gross_cpm_local - 2.90).abs() < 1e-9);
    assert!((simulation.derived.total_impressions - 6_437_931.03).abs() < 0.01);
    assert!((simulation.derived.media_percentage - 18.67).abs() < 1e-9);

    assert_eq!(simulation.breakdown.len(), 5);
    assert_eq!(simulation.breakdown[0].kind, SegmentKind::MediaInvestment);

    // Chart normalization: segments cover the whole budget.
    let total: f64 = simulation.breakdown.iter().map(|s| s.amount).sum();
    assert!((total - simulation.inputs.total_budget).abs() < 1e-6);
    let media_share = share(simulation.breakdown[0].amount, total);
    assert!((media_share - 18.67).abs() < 1e-6);
}

#[test]
fn test_out_of_range_inputs_are_clamped_before_compute() {
    let estimator = Estimator::with_defaults();
    let raw = CampaignInputs {
        total_budget: 250.0,
        taxes_pct: 400.0,
        ..CampaignInputs::default()
    };
    let simulation = estimator.simulate(&raw);

    assert_eq!(simulation.inputs.total_budget, 1_000.0);
    assert_eq!(simulation.inputs.taxes_pct, 50.0);

    // 50 + 23 + 30 + 10 percent: over-allocated but fully defined.
    assert!(simulation.derived.available_media_budget < 0.0);
    assert!(simulation.derived.media_percentage < 0.0);
    assert_eq!(simulation.derived.total_impressions, 0.0);
    assert_eq!(simulation.derived.selling_cpm, 0.0);

    // The residual still partitions the clamped budget.
    assert!(simulation.checks.allocation.is_valid);
}

#[test]
fn test_simulation_is_reproducible() {
    let estimator = Estimator::with_defaults();
    let inputs = CampaignInputs::default();
    assert_eq!(estimator.simulate(&inputs), estimator.simulate(&inputs));
}

#[test]
fn test_simulation_serializes() {
    let estimator = Estimator::with_defaults();
    let simulation = estimator.simulate(&estimator.defaults());

    let json = serde_json::to_string(&simulation).unwrap();
    let parsed: Simulation = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, simulation);
}

#[test]
fn test_proposal_export() {
    let estimator = Estimator::with_defaults();
    let simulation = estimator.simulate(&estimator.defaults());
    let a = estimator.propose(&simulation);
    let b = estimator.propose(&simulation);

    assert_eq!(a.status, ProposalStatus::Analysis);
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.summary_hash, b.summary_hash);
    assert_ne!(a.id, b.id);
    assert!(a.summary.contains("Total Budget: R$ 100.000,00"));
    assert!(a.summary.contains("Estimated Impressions: 6.437.931"));
    assert!(a.summary.contains("Gross CPM: R$ 2,90"));
}

#[test]
fn test_preset_config_flows_into_simulation() {
    let config = Config {
        defaults: CampaignInputs {
            total_budget: 200_000.0,
            ..CampaignInputs::default()
        },
    };
    let estimator = Estimator::new(config);
    assert_eq!(estimator.defaults().total_budget, 200_000.0);

    let simulation = estimator.simulate(&estimator.defaults());
    assert!((simulation.derived.available_media_budget - 37_340.0).abs() < 1e-6);
    assert!(simulation.checks.is_valid());
}
