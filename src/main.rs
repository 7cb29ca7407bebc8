//! Token-Economy Projection Demo.
//!
//! Runs the projection engine over a handful of parameter sets and prints
//! the monthly table plus the headline metrics for each.

use tokenomics_core::report::{format_usd, render_summary, render_table};
use tokenomics_core::*;

fn main() {
    println!("Token-Economy Projection Engine");
    println!("Fee Revenue -> Buy & Burn -> Depth-Damped Price Impact\n");

    scenario_1_baseline();
    scenario_2_supply_crunch();
    scenario_3_zero_growth();

    println!("All projections completed.");
}

fn run_and_report(params: &ParameterSet) -> Vec<PeriodRecord> {
    if let Err(e) = params.validate() {
        // demo inputs are hardcoded; a bad one is a programming error
        panic!("invalid parameters: {e}");
    }

    let records = run(params);
    let summary = RunSummary::from_run(params, &records);

    print!("{}", render_summary(&summary));
    println!();
    print!("{}", render_table(&records));
    println!();
    records
}

/// Default assumptions: $10M/month new AUM, 1% growth, 25 bps fee, 50% burn.
fn scenario_1_baseline() {
    println!("Scenario 1: Baseline\n");

    let params = ParameterSet::default();
    println!(
        "  {} new AUM/month growing {}/month, {} fee, {} burned",
        format_usd(params.monthly_new_aum.value(), 0),
        params.monthly_growth_pct,
        params.fee_bps,
        params.burn_pct,
    );

    run_and_report(&params);
}

/// Thin initial supply with full burn: the critical-supply throttle engages.
fn scenario_2_supply_crunch() {
    println!("Scenario 2: Supply Crunch\n");

    let params = ParameterSet::aggressive_burn();
    println!(
        "  {} initial supply, {} fee, {} burned",
        params.initial_supply, params.fee_bps, params.burn_pct,
    );

    let records = run_and_report(&params);

    let throttled = records
        .iter()
        .find(|r| r.supply.value() < CRITICAL_SUPPLY_THRESHOLD);
    match throttled {
        Some(r) => println!(
            "  Supply crossed the {}-token threshold in month {}; burn throttled from there.\n",
            format_usd(CRITICAL_SUPPLY_THRESHOLD, 0).replace('$', ""),
            r.month,
        ),
        None => println!("  Supply never went critical over this horizon.\n"),
    }
}

/// Zero growth, zero burn: constant inflow, supply untouched, price still
/// drifts up on revenue flow alone.
fn scenario_3_zero_growth() {
    println!("Scenario 3: Zero-Growth Control\n");

    let mut params = ParameterSet::default();
    params.monthly_growth_pct = Pct::zero();
    params.burn_pct = Pct::zero();
    params.horizon_months = 12;

    let records = run_and_report(&params);

    let first = &records[0];
    let last = records.last().unwrap();
    println!(
        "  New AUM held at {}; supply held at {}; price drifted {} -> {}\n",
        format_usd(first.new_aum.value(), 0),
        first.supply,
        format_usd(params.initial_price.value(), 2),
        format_usd(last.token_price.value(), 4),
    );
}
