//! Grouping primitives
//!
//! Splits a value slice by the entries of a key column and reduces each group
//! with [`Aggregator`]s. Keys compare by [`Value`] ordering, so `Int(4)` and
//! `Float(4.0)` land in the same group.

use crate::{Aggregator, Column, Frame, FrameError, FrameResult, Value};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Controls group ordering and null-key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOptions {
    /// Emit groups in ascending key order; otherwise first-appearance order
    pub sort: bool,
    /// Drop rows whose key is null instead of grouping them
    pub dropna: bool,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            sort: true,
            dropna: true,
        }
    }
}

impl GroupOptions {
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_dropna(mut self, dropna: bool) -> Self {
        self.dropna = dropna;
        self
    }
}

/// Split `values` into per-key groups, keyed by the aligned entries of `x`.
///
/// Returns one `(key, group)` pair per distinct key. `values` must have one
/// entry per row of `x`.
pub fn group_pairs(
    x: &Column,
    values: &[Value],
    options: GroupOptions,
) -> FrameResult<Vec<(Value, Vec<Value>)>> {
    if values.len() != x.len() {
        return Err(FrameError::length_mismatch(x.name(), x.len(), values.len()));
    }

    if options.sort {
        let mut groups: BTreeMap<Value, Vec<Value>> = BTreeMap::new();
        for (key, value) in x.iter().zip(values) {
            if options.dropna && key.is_null() {
                continue;
            }
            groups.entry(key.clone()).or_default().push(value.clone());
        }
        Ok(groups.into_iter().collect())
    } else {
        let mut order: Vec<(Value, Vec<Value>)> = Vec::new();
        let mut index: FxHashMap<Value, usize> = FxHashMap::default();
        for (key, value) in x.iter().zip(values) {
            if options.dropna && key.is_null() {
                continue;
            }
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                order.push((key.clone(), Vec::new()));
                order.len() - 1
            });
            order[slot].1.push(value.clone());
        }
        Ok(order)
    }
}

/// Group `values` by `x` and reduce each group with every aggregator.
///
/// The result holds the key column (named after `x`) followed by one column
/// per aggregator, named after the aggregator. Duplicate output names fail
/// with [`FrameError::DuplicateColumn`].
pub fn group_agg(
    x: &Column,
    values: &[Value],
    aggs: &[Aggregator],
    options: GroupOptions,
) -> FrameResult<Frame> {
    let groups = group_pairs(x, values, options)?;

    let keys: Vec<Value> = groups.iter().map(|(key, _)| key.clone()).collect();
    let mut frame = Frame::new();
    frame.push(Column::new(x.name(), keys))?;
    for agg in aggs {
        let reduced: Vec<Value> = groups.iter().map(|(_, group)| agg.apply(group)).collect();
        frame.push(Column::new(agg.name(), reduced))?;
    }
    Ok(frame)
}
