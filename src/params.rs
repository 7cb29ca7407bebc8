// 2.0 params.rs: all simulation inputs in one place. growth, fee/burn, market depth, holdings.
// the engine assumes a validated ParameterSet; callers go through validate() first.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Bps, Pct, Price, Tokens, Usd};

// 2.1: the full input set for one projection run. immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    // New AUM added in period 1, in absolute dollars
    pub monthly_new_aum: Usd,
    // Compounding growth rate applied to the new-AUM figure each period
    pub monthly_growth_pct: Pct,
    // Circulating supply at t=0
    pub initial_supply: Tokens,
    // Protocol fee taken on new AUM
    pub fee_bps: Bps,
    // Fraction of fee-bought tokens permanently burned
    pub burn_pct: Pct,
    // Token price at t=0
    pub initial_price: Price,
    // Baseline buy pressure required to move price 1%
    pub liquidity_depth: Usd,
    // Tokens held by the party whose portfolio value is tracked
    pub observer_holdings: Tokens,
    // Number of monthly periods simulated
    pub horizon_months: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            monthly_new_aum: Usd::new(dec!(10_000_000)),
            monthly_growth_pct: Pct::new(dec!(1)),
            initial_supply: Tokens::new(dec!(100_000_000)),
            fee_bps: Bps::new(25),
            burn_pct: Pct::new(dec!(50)),
            initial_price: Price::new_unchecked(dec!(0.50)),
            liquidity_depth: Usd::new(dec!(500_000)),
            observer_holdings: Tokens::new(dec!(1_000_000)),
            horizon_months: 24,
        }
    }
}

impl ParameterSet {
    // Low growth, low fee, thick market: slow price appreciation
    pub fn conservative() -> Self {
        let mut params = Self::default();
        params.monthly_growth_pct = Pct::zero();
        params.fee_bps = Bps::new(10);
        params.burn_pct = Pct::new(dec!(25));
        params.liquidity_depth = Usd::new(dec!(2_000_000));
        params
    }

    // Thin supply and full burn: drives the supply toward the critical threshold
    pub fn aggressive_burn() -> Self {
        let mut params = Self::default();
        params.initial_supply = Tokens::new(dec!(2_000_000));
        params.fee_bps = Bps::new(150);
        params.burn_pct = Pct::new(dec!(100));
        params
    }

    // Reject out-of-range fields before the engine ever sees them.
    // The message names the offending field and the violated constraint.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.monthly_new_aum.is_negative() {
            return Err(ParamsError::NegativeNewAum {
                value: self.monthly_new_aum.value(),
            });
        }

        if self.monthly_growth_pct.value() < Decimal::ZERO {
            return Err(ParamsError::NegativeGrowth {
                pct: self.monthly_growth_pct.value(),
            });
        }

        if self.initial_supply.value() <= Decimal::ZERO {
            return Err(ParamsError::NonPositiveSupply {
                value: self.initial_supply.value(),
            });
        }

        if self.fee_bps.value() > 10_000 {
            return Err(ParamsError::FeeOutOfRange {
                bps: self.fee_bps.value(),
            });
        }

        if self.burn_pct.value() < Decimal::ZERO || self.burn_pct.value() > dec!(100) {
            return Err(ParamsError::BurnOutOfRange {
                pct: self.burn_pct.value(),
            });
        }

        if self.initial_price.value() <= Decimal::ZERO {
            return Err(ParamsError::NonPositivePrice {
                value: self.initial_price.value(),
            });
        }

        if self.liquidity_depth.value() <= Decimal::ZERO {
            return Err(ParamsError::NonPositiveDepth {
                value: self.liquidity_depth.value(),
            });
        }

        if self.observer_holdings.value() < Decimal::ZERO {
            return Err(ParamsError::NegativeHoldings {
                value: self.observer_holdings.value(),
            });
        }

        if self.horizon_months == 0 {
            return Err(ParamsError::ZeroHorizon);
        }

        Ok(())
    }
}

// 2.2: boundary validation errors. one variant per constraint so callers
// can report exactly which field failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("monthly_new_aum must be >= 0, got {value}")]
    NegativeNewAum { value: Decimal },

    #[error("monthly_growth_pct must be >= 0, got {pct}")]
    NegativeGrowth { pct: Decimal },

    #[error("initial_supply must be > 0, got {value}")]
    NonPositiveSupply { value: Decimal },

    #[error("fee_bps must be within 0..=10000, got {bps}")]
    FeeOutOfRange { bps: u32 },

    #[error("burn_pct must be within 0..=100, got {pct}")]
    BurnOutOfRange { pct: Decimal },

    #[error("initial_price must be > 0, got {value}")]
    NonPositivePrice { value: Decimal },

    #[error("liquidity_depth must be > 0, got {value}")]
    NonPositiveDepth { value: Decimal },

    #[error("observer_holdings must be >= 0, got {value}")]
    NegativeHoldings { value: Decimal },

    #[error("horizon_months must be > 0")]
    ZeroHorizon,
}
