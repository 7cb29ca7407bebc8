//! Literal-figure scenarios for the projection engine.
//!
//! These pin the exact arithmetic of the monthly transition: fee revenue,
//! buy-and-burn, the critical-supply throttle, and depth-damped price impact.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokenomics_core::*;

fn reference_params() -> ParameterSet {
    ParameterSet {
        monthly_new_aum: Usd::new(dec!(10_000_000)),
        monthly_growth_pct: Pct::new(dec!(1)),
        initial_supply: Tokens::new(dec!(100_000_000)),
        fee_bps: Bps::new(25),
        burn_pct: Pct::new(dec!(50)),
        initial_price: Price::new_unchecked(dec!(0.50)),
        liquidity_depth: Usd::new(dec!(500_000)),
        observer_holdings: Tokens::new(dec!(1_000_000)),
        horizon_months: 2,
    }
}

#[test]
fn reference_period_one_figures() {
    let params = reference_params();
    params.validate().unwrap();

    let records = run(&params);
    let first = &records[0];

    // $10M new AUM at 25 bps -> $25,000 revenue
    assert_eq!(first.cumulative_aum.value(), dec!(10_000_000));
    assert_eq!(first.revenue.value(), dec!(25_000));

    // $25,000 buys 50,000 tokens at $0.50; half are burned
    assert_eq!(first.tokens_burned.value(), dec!(25_000));
    assert_eq!(first.supply.value(), dec!(99_975_000));

    // depth = $500k base + 1% of the $50M pre-impact market cap
    assert_eq!(first.market_depth.value(), dec!(1_000_000));

    // $25,000 into $1M depth moves price 2.5%
    assert_eq!(first.token_price.value(), dec!(0.5125));

    // derived outputs use the post-update factors
    assert_eq!(
        first.total_token_value.value(),
        dec!(99_975_000) * dec!(0.5125)
    );
    assert_eq!(first.portfolio_value.value(), dec!(512_500));

    // recorded new-AUM is next month's post-growth figure
    assert_eq!(first.new_aum.value(), dec!(10_100_000));
}

#[test]
fn reference_period_two_accrual() {
    let records = run(&reference_params());
    let second = &records[1];

    assert_eq!(second.month, 2);
    assert_eq!(second.cumulative_aum.value(), dec!(20_100_000));
    assert_eq!(second.revenue.value(), dec!(25_250));
    assert!(second.token_price.value() > dec!(0.5125));
    assert!(second.supply.value() < dec!(99_975_000));
}

#[test]
fn circuit_breaker_applies_documented_damping() {
    let mut params = reference_params();
    params.monthly_new_aum = Usd::new(dec!(4_000_000));
    params.fee_bps = Bps::new(50);
    params.initial_price = Price::new_unchecked(dec!(2));
    params.initial_supply = Tokens::new(dec!(800_000));
    params.horizon_months = 1;

    let record = &run(&params)[0];

    // unthrottled: $20,000 revenue buys 10,000 tokens, 50% burn -> 5,000
    let unthrottled = dec!(5_000);
    let supply_factor = dec!(800_000) / CRITICAL_SUPPLY_THRESHOLD;
    assert_eq!(
        record.tokens_burned.value(),
        unthrottled * supply_factor * CRITICAL_BURN_DAMPENER
    );
    assert_eq!(record.tokens_burned.value(), dec!(40));
    assert_eq!(record.supply.value(), dec!(799_960));
}

#[test]
fn circuit_breaker_inactive_above_threshold() {
    let mut params = reference_params();
    params.monthly_new_aum = Usd::new(dec!(4_000_000));
    params.fee_bps = Bps::new(50);
    params.initial_price = Price::new_unchecked(dec!(2));
    params.initial_supply = Tokens::new(dec!(1_000_001));
    params.horizon_months = 1;

    let record = &run(&params)[0];
    assert_eq!(record.tokens_burned.value(), dec!(5_000));
}

#[test]
fn zero_growth_zero_burn_is_idempotent() {
    let mut params = reference_params();
    params.monthly_growth_pct = Pct::zero();
    params.burn_pct = Pct::zero();
    params.horizon_months = 12;

    let records = run(&params);
    for record in &records {
        assert_eq!(record.new_aum, params.monthly_new_aum);
        assert_eq!(record.revenue.value(), dec!(25_000));
        assert_eq!(record.tokens_burned, Tokens::zero());
        assert_eq!(record.supply, params.initial_supply);
    }
}

#[test]
fn run_is_deterministic() {
    let params = ParameterSet::default();
    let first = run(&params);
    let second = run(&params);
    assert_eq!(first, second);
}

#[test]
fn horizon_controls_record_count() {
    for horizon in [1u32, 2, 24, 60] {
        let mut params = reference_params();
        params.horizon_months = horizon;

        let records = run(&params);
        assert_eq!(records.len(), horizon as usize);
        assert_eq!(records.first().unwrap().month, 1);
        assert_eq!(records.last().unwrap().month, horizon);
    }
}

#[test]
fn summary_from_reference_run() {
    let mut params = reference_params();
    params.horizon_months = 24;

    let records = run(&params);
    let summary = RunSummary::from_run(&params, &records);

    assert_eq!(summary.starting_portfolio_value.value(), dec!(500_000));
    assert_eq!(summary.final_price, records.last().unwrap().token_price);
    assert!(summary.roi_pct > Decimal::ZERO);

    // ROI matches the portfolio endpoints
    let expected = (summary.ending_portfolio_value.value()
        - summary.starting_portfolio_value.value())
        / summary.starting_portfolio_value.value()
        * dec!(100);
    assert_eq!(summary.roi_pct, expected);
}
