//! One-way and two-way tabulation
//!
//! The one-way path groups a category column and reduces each group; with no
//! values/aggfunc pair it falls back to the frequency summary (`size` and
//! `percent`). The two-way path lays two category columns out as a
//! contingency table via [`xtab_frame::crosstab`].

use crate::error::{TabError, TabResult};
use crate::spec::AggSpec;
use tracing::debug;
use xtab_frame::{Aggregator, Column, Frame, GroupOptions, Value, crosstab, group_agg};

const VALUES_WITHOUT_AGGFUNC: &str = "values cannot be used without an aggfunc.";
const AGGFUNC_WITHOUT_VALUES: &str = "aggfunc cannot be used without values.";
const EMPTY_AGGFUNC: &str = "aggfunc cannot be empty.";

/// Tabulate one category column.
///
/// With `values` and `aggfunc` both given, produces one row per distinct
/// `x` key and one summary column per aggregator. With both absent,
/// produces the frequency summary instead: a `size` column (entries per
/// group) and a `percent` column (share of all entries, in percent rounded
/// to two decimals, ties to even). Giving only one of the pair is a usage
/// error.
pub fn tabulate_one_way(
    x: &Column,
    values: Option<&Column>,
    aggfunc: Option<AggSpec>,
    options: GroupOptions,
) -> TabResult<Frame> {
    match (values, aggfunc) {
        (Some(_), None) => Err(TabError::usage(VALUES_WITHOUT_AGGFUNC)),
        (None, Some(_)) => Err(TabError::usage(AGGFUNC_WITHOUT_VALUES)),
        (Some(values), Some(aggfunc)) => {
            let funcs = aggfunc.into_funcs();
            if funcs.is_empty() {
                return Err(TabError::usage(EMPTY_AGGFUNC));
            }
            debug!(
                "one-way tabulation of {} with {} aggregator(s)",
                x.name(),
                funcs.len()
            );
            Ok(group_agg(x, values.values(), &funcs, options)?)
        }
        (None, None) => {
            // The percent divisor is the full input length, so rows later
            // dropped as null keys still count toward the total.
            let total = x.len();
            let ones = Column::new("_values", vec![Value::Int(1); total]);
            let funcs = [
                Aggregator::size(),
                Aggregator::new("percent", move |group| {
                    let share = group.len() as f64 / total as f64 * 100.0;
                    Value::Float((share * 100.0).round_ties_even() / 100.0)
                }),
            ];
            debug!("one-way frequency tabulation of {}", x.name());
            Ok(group_agg(x, ones.values(), &funcs, options)?)
        }
    }
}

/// Tabulate `x`, against `y` when given.
///
/// Without `y` this is [`tabulate_one_way`]. With `y` the output is a
/// contingency table: rows keyed by distinct `x`, columns by distinct `y`,
/// cells holding pair counts or, when `values`/`aggfunc` are given,
/// aggregated values. The two-way path never adds the frequency summary's
/// size/percent pair.
pub fn tabulate(
    x: &Column,
    y: Option<&Column>,
    values: Option<&Column>,
    aggfunc: Option<AggSpec>,
    options: GroupOptions,
) -> TabResult<Frame> {
    match y {
        None => tabulate_one_way(x, values, aggfunc, options),
        Some(y) => {
            let funcs = aggfunc.map(AggSpec::into_funcs);
            debug!("cross-tabulating {} by {}", x.name(), y.name());
            Ok(crosstab(x, y, values, funcs.as_deref(), options)?)
        }
    }
}
