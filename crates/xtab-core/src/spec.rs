//! Tabulation request types

use crate::resolve::ColumnRef;
use xtab_frame::{Aggregator, GroupOptions};

/// One aggregator or several. A single function and a one-element list
/// produce the same summary columns.
#[derive(Debug, Clone)]
pub enum AggSpec {
    One(Aggregator),
    Many(Vec<Aggregator>),
}

impl AggSpec {
    /// Flatten into the aggregator list the primitives consume
    pub fn into_funcs(self) -> Vec<Aggregator> {
        match self {
            Self::One(func) => vec![func],
            Self::Many(funcs) => funcs,
        }
    }
}

impl From<Aggregator> for AggSpec {
    fn from(func: Aggregator) -> Self {
        Self::One(func)
    }
}

impl From<Vec<Aggregator>> for AggSpec {
    fn from(funcs: Vec<Aggregator>) -> Self {
        Self::Many(funcs)
    }
}

/// Optional parts of a tabulation request.
///
/// The bare request (`TabSpec::new()`) is a frequency tabulation; the
/// builders opt into cross-tabulation and aggregation.
///
/// ```
/// use xtab_core::TabSpec;
/// use xtab_frame::Aggregator;
///
/// let spec = TabSpec::new()
///     .with_y("bar")
///     .with_values("fizz")
///     .with_agg(Aggregator::mean());
/// assert!(spec.y.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabSpec {
    /// Second category axis; turns the request into a cross-tabulation
    pub y: Option<ColumnRef>,
    /// Values to aggregate per group; requires `aggfunc`
    pub values: Option<ColumnRef>,
    /// How to reduce each group; requires `values`
    pub aggfunc: Option<AggSpec>,
    /// Group ordering and null-key handling
    pub options: GroupOptions,
}

impl TabSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_y(mut self, y: impl Into<ColumnRef>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn with_values(mut self, values: impl Into<ColumnRef>) -> Self {
        self.values = Some(values.into());
        self
    }

    pub fn with_agg(mut self, aggfunc: impl Into<AggSpec>) -> Self {
        self.aggfunc = Some(aggfunc.into());
        self
    }

    pub fn with_options(mut self, options: GroupOptions) -> Self {
        self.options = options;
        self
    }
}
