//! Cross-tabulation
//!
//! Builds a contingency table from two aligned key columns: one output row
//! per distinct `x` key, one output column per distinct `y` key. Without a
//! value column the cells hold pair counts; with one, each cell aggregates
//! the values that fell into it.

use crate::group::GroupOptions;
use crate::{Aggregator, Column, Frame, FrameError, FrameResult, Value};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Cross-tabulate `x` against `y`.
///
/// `values` and `aggs` must be given together: each cell then holds the
/// aggregated values of the rows that landed in it, and cells no row landed
/// in hold `Null`. Without them, cells hold pair counts and empty cells hold
/// `Int(0)`.
///
/// The leading output column is named after `x` and holds the row keys.
/// With a single aggregator (or when counting), the remaining columns are
/// named after the `y` keys; with several, after `aggregator(key)`.
pub fn crosstab(
    x: &Column,
    y: &Column,
    values: Option<&Column>,
    aggs: Option<&[Aggregator]>,
    options: GroupOptions,
) -> FrameResult<Frame> {
    if y.len() != x.len() {
        return Err(FrameError::length_mismatch(y.name(), x.len(), y.len()));
    }
    let aggs = match (values, aggs) {
        (Some(_), None) => {
            return Err(FrameError::invalid_input(
                "values cannot be used without an aggfunc.",
            ));
        }
        (None, Some(_)) => {
            return Err(FrameError::invalid_input(
                "aggfunc cannot be used without values.",
            ));
        }
        (Some(values), Some(aggs)) => {
            if aggs.is_empty() {
                return Err(FrameError::invalid_input("aggfunc cannot be empty."));
            }
            if values.len() != x.len() {
                return Err(FrameError::length_mismatch(
                    values.name(),
                    x.len(),
                    values.len(),
                ));
            }
            Some(aggs)
        }
        (None, None) => None,
    };

    let kept: Vec<usize> = (0..x.len())
        .filter(|&i| {
            !(options.dropna && (x.values()[i].is_null() || y.values()[i].is_null()))
        })
        .collect();
    let row_keys = distinct_keys(kept.iter().map(|&i| &x.values()[i]), options.sort);
    let col_keys = distinct_keys(kept.iter().map(|&i| &y.values()[i]), options.sort);

    let mut cells: FxHashMap<(Value, Value), Vec<Value>> = FxHashMap::default();
    for &i in &kept {
        let entry = values.map_or(Value::Int(1), |v| v.values()[i].clone());
        cells
            .entry((x.values()[i].clone(), y.values()[i].clone()))
            .or_default()
            .push(entry);
    }

    let mut frame = Frame::new();
    frame.push(Column::new(x.name(), row_keys.clone()))?;
    match aggs {
        None => {
            for col_key in &col_keys {
                let counts: Vec<Value> = row_keys
                    .iter()
                    .map(|row_key| {
                        let n = cells
                            .get(&(row_key.clone(), col_key.clone()))
                            .map_or(0, Vec::len);
                        Value::Int(n as i64)
                    })
                    .collect();
                frame.push(Column::new(col_key.to_string(), counts))?;
            }
        }
        Some(aggs) => {
            for agg in aggs {
                for col_key in &col_keys {
                    let name = if aggs.len() == 1 {
                        col_key.to_string()
                    } else {
                        format!("{}({})", agg.name(), col_key)
                    };
                    let reduced: Vec<Value> = row_keys
                        .iter()
                        .map(|row_key| {
                            cells
                                .get(&(row_key.clone(), col_key.clone()))
                                .map_or(Value::Null, |cell| agg.apply(cell))
                        })
                        .collect();
                    frame.push(Column::new(name, reduced))?;
                }
            }
        }
    }
    Ok(frame)
}

fn distinct_keys<'a>(keys: impl Iterator<Item = &'a Value>, sort: bool) -> Vec<Value> {
    if sort {
        let set: BTreeSet<Value> = keys.cloned().collect();
        set.into_iter().collect()
    } else {
        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        for key in keys {
            if seen.insert(key.clone()) {
                order.push(key.clone());
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> Column {
        Column::new("foo", vec!["a", "a", "b", "a", "b", "c", "a"])
    }

    fn bar() -> Column {
        Column::new("bar", vec![4, 5, 7, 6, 7, 7, 5])
    }

    fn fizz() -> Column {
        Column::new("fizz", vec![12, 63, 23, 36, 21, 28, 42])
    }

    #[test]
    fn counts_pairs_and_fills_gaps_with_zero() {
        let out = crosstab(&foo(), &bar(), None, None, GroupOptions::default()).unwrap();

        assert_eq!(out.column_names(), ["foo", "4", "5", "6", "7"]);
        let row = |name: &str| -> Vec<&Value> {
            out.column(name).unwrap().values().iter().collect()
        };
        assert_eq!(row("4"), [&Value::Int(1), &Value::Int(0), &Value::Int(0)]);
        assert_eq!(row("5"), [&Value::Int(2), &Value::Int(0), &Value::Int(0)]);
        assert_eq!(row("6"), [&Value::Int(1), &Value::Int(0), &Value::Int(0)]);
        assert_eq!(row("7"), [&Value::Int(0), &Value::Int(2), &Value::Int(1)]);
    }

    #[test]
    fn aggregated_cells_average_and_empty_cells_are_null() {
        let out = crosstab(
            &foo(),
            &bar(),
            Some(&fizz()),
            Some(&[Aggregator::mean()]),
            GroupOptions::default(),
        )
        .unwrap();

        assert_eq!(out.column_names(), ["foo", "4", "5", "6", "7"]);
        let cell = |name: &str, row: usize| out.column(name).unwrap().values()[row].clone();
        assert_eq!(cell("4", 0), Value::Float(12.0));
        assert_eq!(cell("5", 0), Value::Float(52.5));
        assert_eq!(cell("6", 0), Value::Float(36.0));
        assert_eq!(cell("7", 0), Value::Null);
        assert_eq!(cell("7", 1), Value::Float(22.0));
        assert_eq!(cell("7", 2), Value::Float(28.0));
        assert_eq!(cell("4", 1), Value::Null);
    }

    #[test]
    fn several_aggregators_prefix_column_names() {
        let out = crosstab(
            &foo(),
            &bar(),
            Some(&fizz()),
            Some(&[Aggregator::mean(), Aggregator::size()]),
            GroupOptions::default(),
        )
        .unwrap();

        assert_eq!(
            out.column_names(),
            [
                "foo", "mean(4)", "mean(5)", "mean(6)", "mean(7)", "size(4)", "size(5)",
                "size(6)", "size(7)",
            ]
        );
    }

    #[test]
    fn values_and_aggfunc_must_be_paired() {
        let err = crosstab(
            &foo(),
            &bar(),
            Some(&fizz()),
            None,
            GroupOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: values cannot be used without an aggfunc."
        );

        let err = crosstab(
            &foo(),
            &bar(),
            None,
            Some(&[Aggregator::mean()]),
            GroupOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: aggfunc cannot be used without values."
        );

        let err = crosstab(&foo(), &bar(), Some(&fizz()), Some(&[]), GroupOptions::default())
            .unwrap_err();
        assert!(matches!(err, FrameError::InvalidInput(_)));
    }

    #[test]
    fn null_keys_on_either_axis_drop_rows() {
        let x = Column::new("x", vec![Value::from("a"), Value::Null, Value::from("a")]);
        let y = Column::new("y", vec![Value::from(1), Value::from(1), Value::Null]);
        let out = crosstab(&x, &y, None, None, GroupOptions::default()).unwrap();

        assert_eq!(out.column_names(), ["x", "1"]);
        assert_eq!(out.nrows(), 1);
        assert_eq!(out.column("1").unwrap().values()[0], Value::Int(1));
    }

    #[test]
    fn misaligned_y_is_rejected() {
        let y = Column::new("y", vec![1, 2]);
        let err = crosstab(&foo(), &y, None, None, GroupOptions::default()).unwrap_err();
        assert!(matches!(err, FrameError::LengthMismatch { .. }));
    }
}
