// 4.0 engine/: the simulation core. state.rs holds the per-run state and the
// monthly transition; core.rs drives it over the horizon.

mod core;
mod state;

pub use core::run;
pub use state::{CRITICAL_BURN_DAMPENER, CRITICAL_SUPPLY_THRESHOLD, DEPTH_MCAP_FRACTION};
