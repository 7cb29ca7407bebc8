// tokenomics-core: deterministic token-economy projection engine.
// models the feedback loop between fee revenue, token burn, circulating
// supply, market depth, and price impact, month by month over a fixed horizon.
// all computation is deterministic with no external I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x types.rs: primitives: Usd, Tokens, Price, Bps, Pct
//   2.x params.rs: ParameterSet, boundary validation, presets
//   3.x record.rs: PeriodRecord, RunSummary
//   4.x engine/: EngineState, monthly transition, run loop
//   5.x report.rs: plain-text table + summary rendering

pub mod engine;
pub mod params;
pub mod record;
pub mod report;
pub mod types;

// re exports for convenience
pub use engine::*;
pub use params::*;
pub use record::*;
pub use types::*;
