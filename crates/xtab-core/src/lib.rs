//! Tabulation layer over `xtab-frame` tables
//!
//! Answers "how often does each value occur, and what do the groups look
//! like" in one call. One-way tabulation groups a category column and
//! summarizes each group; two-way tabulation cross-tabulates two category
//! columns into a contingency table. The [`FrameTab`] and [`ColumnTab`]
//! extension traits attach both as `.tab(..)` methods.
//!
//! ```
//! use xtab_core::FrameTab;
//! use xtab_frame::{Column, Frame};
//!
//! let df = Frame::from_columns(vec![
//!     Column::new("foo", vec!["a", "a", "b", "a", "b", "c", "a"]),
//! ])?;
//! let summary = df.tab("foo")?;
//! assert_eq!(summary.column_names(), ["foo", "size", "percent"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod accessor;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod spec;

pub use accessor::{ColumnTab, FrameTab};
pub use engine::{tabulate, tabulate_one_way};
pub use error::{TabError, TabResult};
pub use resolve::{ColumnRef, Resolved, resolve, resolve_opt};
pub use spec::{AggSpec, TabSpec};
