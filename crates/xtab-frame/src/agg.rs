//! Named aggregation functions
//!
//! An [`Aggregator`] maps the values of one group to a single summary value.
//! The name doubles as the output column label, following the convention that
//! summary columns are named after the function that produced them.

use crate::Value;
use std::fmt;
use std::sync::Arc;

type AggFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A named reduction over grouped values
#[derive(Clone)]
pub struct Aggregator {
    name: String,
    func: AggFn,
}

impl Aggregator {
    /// Create an aggregator from a name and a function
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The function name, used as the output column label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the function to one group of values
    pub fn apply(&self, values: &[Value]) -> Value {
        (self.func)(values)
    }

    /// Number of entries in the group, nulls included
    pub fn size() -> Self {
        Self::new("size", |vs| Value::Int(vs.len() as i64))
    }

    /// Number of non-null entries in the group
    pub fn count() -> Self {
        Self::new("count", |vs| {
            Value::Int(vs.iter().filter(|v| !v.is_null()).count() as i64)
        })
    }

    /// Sum of numeric entries. Non-numeric entries are ignored; an all-`Int`
    /// group sums in integer arithmetic and stays `Int`, anything else sums
    /// to `Float`; empty sums to `Int(0)`.
    pub fn sum() -> Self {
        Self::new("sum", |vs| {
            // Integer accumulation stays exact beyond 2^53; the first Float
            // addend switches the whole sum to f64.
            let mut int_total: i64 = 0;
            let mut float_total: Option<f64> = None;
            for v in vs {
                match v {
                    Value::Int(i) => match float_total.as_mut() {
                        Some(total) => *total += *i as f64,
                        None => int_total += i,
                    },
                    Value::Float(f) => *float_total.get_or_insert(int_total as f64) += f,
                    _ => {}
                }
            }
            match float_total {
                Some(total) => Value::Float(total),
                None => Value::Int(int_total),
            }
        })
    }

    /// Mean of numeric entries; `Null` when the group has none
    pub fn mean() -> Self {
        Self::new("mean", |vs| {
            let nums: Vec<f64> = vs.iter().filter_map(Value::as_f64).collect();
            if nums.is_empty() {
                Value::Null
            } else {
                Value::Float(nums.iter().sum::<f64>() / nums.len() as f64)
            }
        })
    }

    /// Smallest non-null entry; `Null` when the group has none
    pub fn min() -> Self {
        Self::new("min", |vs| {
            vs.iter()
                .filter(|v| !v.is_null())
                .min()
                .cloned()
                .unwrap_or(Value::Null)
        })
    }

    /// Largest non-null entry; `Null` when the group has none
    pub fn max() -> Self {
        Self::new("max", |vs| {
            vs.iter()
                .filter(|v| !v.is_null())
                .max()
                .cloned()
                .unwrap_or(Value::Null)
        })
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Aggregator").field(&self.name).finish()
    }
}
