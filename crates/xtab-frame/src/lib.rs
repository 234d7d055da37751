//! Columnar table model with grouping and cross-tabulation primitives
//!
//! A [`Frame`] is an ordered set of equal-length named [`Column`]s whose
//! entries are dynamically typed [`Value`]s. On top of that sit the two
//! primitives the tabulation layer is built from: [`group_agg`], which
//! reduces grouped values with named [`Aggregator`]s, and [`crosstab`],
//! which lays two key columns out as a contingency table.
//!
//! ```
//! use xtab_frame::{crosstab, Column, GroupOptions};
//!
//! let foo = Column::new("foo", vec!["a", "a", "b"]);
//! let bar = Column::new("bar", vec![1, 2, 2]);
//! let table = crosstab(&foo, &bar, None, None, GroupOptions::default())?;
//! assert_eq!(table.column_names(), ["foo", "1", "2"]);
//! # Ok::<(), xtab_frame::FrameError>(())
//! ```

pub mod agg;
pub mod column;
pub mod crosstab;
pub mod error;
pub mod frame;
pub mod group;
pub mod value;

pub use agg::Aggregator;
pub use column::Column;
pub use crosstab::crosstab;
pub use error::{FrameError, FrameResult};
pub use frame::Frame;
pub use group::{group_agg, group_pairs, GroupOptions};
pub use value::Value;
