//! Quick one-way and two-way tabulation for data exploration
//!
//! The crate answers the workhorse questions of a first look at a dataset:
//! how often does each value occur, and how do two columns co-occur. It
//! re-exports the columnar table model from `xtab-frame` and the tabulation
//! layer from `xtab-core`; the `xtab` binary (the `xtab-cli` crate) installs
//! an evcxr startup script so the helpers are in scope in every REPL
//! session.
//!
//! ```
//! use xtab::prelude::*;
//!
//! let df = Frame::from_columns(vec![
//!     Column::new("foo", vec!["a", "a", "b", "a", "b", "c", "a"]),
//!     Column::new("bar", vec![4, 5, 7, 6, 7, 7, 5]),
//! ])?;
//!
//! // One-way: group sizes and percents.
//! let freq = df.tab("foo")?;
//! assert_eq!(freq.column_names(), ["foo", "size", "percent"]);
//!
//! // Two-way: a contingency table of foo against bar.
//! let cross = df.tab_with("foo", TabSpec::new().with_y("bar"))?;
//! assert_eq!(cross.column_names(), ["foo", "4", "5", "6", "7"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use xtab_core::{
    AggSpec, ColumnRef, ColumnTab, FrameTab, Resolved, TabError, TabResult, TabSpec, resolve,
    resolve_opt, tabulate, tabulate_one_way,
};
pub use xtab_frame::{
    Aggregator, Column, Frame, FrameError, FrameResult, GroupOptions, Value, crosstab, group_agg,
    group_pairs,
};

/// Everything a REPL session needs in scope.
///
/// The generated startup script does `use xtab::prelude::*;`.
pub mod prelude {
    pub use xtab_core::{AggSpec, ColumnTab, FrameTab, TabSpec};
    pub use xtab_frame::{Aggregator, Column, Frame, GroupOptions, Value};
}
