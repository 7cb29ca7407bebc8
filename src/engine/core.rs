// 4.4 engine/core.rs: the driving loop. fold the monthly transition over the horizon.

use crate::params::ParameterSet;
use crate::record::PeriodRecord;

use super::state::EngineState;

/// Project the token economy month by month over `params.horizon_months`.
///
/// Returns exactly one record per month, 1-indexed and ascending. Pure with
/// respect to external state: all mutation lives in an `EngineState` scoped
/// to this call, so repeated calls with the same parameters are bit-identical
/// and concurrent calls need no coordination.
///
/// The engine assumes its input satisfies the constraints checked by
/// [`ParameterSet::validate`]; callers validate at the boundary.
pub fn run(params: &ParameterSet) -> Vec<PeriodRecord> {
    let mut state = EngineState::seed(params);
    (1..=params.horizon_months)
        .map(|month| state.step(params, month))
        .collect()
}
