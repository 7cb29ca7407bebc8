// 4.1 engine/state.rs: mutable state for one run and the monthly transition.
// a fresh EngineState is seeded per call to run(); nothing survives between runs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::params::ParameterSet;
use crate::record::PeriodRecord;
use crate::types::{Price, Tokens, Usd};

// Below this absolute supply the burn is throttled so the feedback loop
// (shrinking supply -> rising price -> fixed-dollar revenue still burning
// real token counts) can never drive supply to zero on its own.
pub const CRITICAL_SUPPLY_THRESHOLD: Decimal = dec!(1_000_000);

// Throttle factor applied on top of the linear supply_factor when critical.
pub const CRITICAL_BURN_DAMPENER: Decimal = dec!(0.01);

// Fraction of market cap assumed available as extra depth. damps price
// compounding as the token grows: more cap, more capital absorbing flow.
pub const DEPTH_MCAP_FRACTION: Decimal = dec!(0.01);

// 4.2: state carried month to month within a single run.
#[derive(Debug, Clone)]
pub(super) struct EngineState {
    pub(super) current_supply: Tokens,
    pub(super) current_price: Price,
    pub(super) cumulative_aum: Usd,
    pub(super) pending_new_aum: Usd,
}

impl EngineState {
    pub(super) fn seed(params: &ParameterSet) -> Self {
        Self {
            current_supply: params.initial_supply,
            current_price: params.initial_price,
            cumulative_aum: Usd::zero(),
            pending_new_aum: params.monthly_new_aum,
        }
    }

    // 4.3: one month of the model. order matters: price impact and burn both
    // read the supply and price from the start of the month; the supply cut
    // lands after the price move, then the inflow grows for next month.
    pub(super) fn step(&mut self, params: &ParameterSet, month: u32) -> PeriodRecord {
        self.cumulative_aum = self.cumulative_aum.add(self.pending_new_aum);

        // fees are earned on net-new capital only, not outstanding balances
        let revenue = self.pending_new_aum.mul(params.fee_bps.as_fraction());

        let tokens_bought = revenue.value() / self.current_price.value();
        let mut tokens_burned = tokens_bought * params.burn_pct.as_fraction();

        if self.current_supply.value() < CRITICAL_SUPPLY_THRESHOLD {
            let supply_factor = self.current_supply.value() / CRITICAL_SUPPLY_THRESHOLD;
            tokens_burned = tokens_burned * supply_factor * CRITICAL_BURN_DAMPENER;
        }

        // pre-burn, pre-impact market cap; depth is recomputed fresh every month
        let market_cap = Usd::new(self.current_supply.value() * self.current_price.value());
        let dynamic_depth = params.liquidity_depth.add(market_cap.mul(DEPTH_MCAP_FRACTION));
        let price_move_pct = revenue.value() / dynamic_depth.value();
        self.current_price =
            Price::new_unchecked(self.current_price.value() * (Decimal::ONE + price_move_pct));

        self.current_supply = self.current_supply.saturating_sub(Tokens::new(tokens_burned));

        // inflow compounds on the new-AUM figure itself, not on cumulative AUM
        self.pending_new_aum = self
            .pending_new_aum
            .mul(Decimal::ONE + params.monthly_growth_pct.as_fraction());

        PeriodRecord {
            month,
            cumulative_aum: self.cumulative_aum,
            new_aum: self.pending_new_aum,
            revenue,
            token_price: self.current_price,
            supply: self.current_supply,
            total_token_value: Usd::new(
                self.current_supply.value() * self.current_price.value(),
            ),
            tokens_burned: Tokens::new(tokens_burned),
            market_depth: dynamic_depth,
            portfolio_value: Usd::new(
                params.observer_holdings.value() * self.current_price.value(),
            ),
        }
    }
}
