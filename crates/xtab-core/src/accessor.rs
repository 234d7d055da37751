//! Attached tabulation methods
//!
//! Extension traits put `.tab(..)` on the table types themselves, so a
//! REPL session reads `df.tab("foo")` rather than a free-function call.

use crate::engine;
use crate::error::{TabError, TabResult};
use crate::resolve::{self, ColumnRef};
use crate::spec::TabSpec;
use xtab_frame::{Column, Frame};

/// Tabulation over a frame's columns.
///
/// `x` (and a spec's `y`/`values`) accept anything convertible to a
/// [`ColumnRef`]: a name looked up on the frame, a column given directly,
/// or a list of either.
pub trait FrameTab {
    /// Frequency-tabulate `x`: one row per distinct value, with group
    /// sizes and percents
    fn tab<R: Into<ColumnRef>>(&self, x: R) -> TabResult<Frame>;

    /// Tabulate `x` with an explicit request: optional second axis,
    /// values, and aggregators
    fn tab_with<R: Into<ColumnRef>>(&self, x: R, spec: TabSpec) -> TabResult<Frame>;
}

impl FrameTab for Frame {
    fn tab<R: Into<ColumnRef>>(&self, x: R) -> TabResult<Frame> {
        self.tab_with(x, TabSpec::new())
    }

    fn tab_with<R: Into<ColumnRef>>(&self, x: R, spec: TabSpec) -> TabResult<Frame> {
        let x = resolve::resolve(self, &x.into())?.into_single("x")?;
        let y = resolve::resolve_opt(self, spec.y.as_ref())?
            .map(|resolved| resolved.into_single("y"))
            .transpose()?;
        let values = resolve::resolve_opt(self, spec.values.as_ref())?
            .map(|resolved| resolved.into_single("values"))
            .transpose()?;
        engine::tabulate(&x, y.as_ref(), values.as_ref(), spec.aggfunc, spec.options)
    }
}

/// Tabulation anchored on a value column.
///
/// The receiver only anchors the call; the tabulated categories are the
/// passed column. Cross-tabulation is a frame-level operation, so a spec
/// with `y` set is rejected here, and names cannot be looked up without an
/// enclosing frame.
pub trait ColumnTab {
    /// Frequency-tabulate the passed category column
    fn tab(&self, x: &Column) -> TabResult<Frame>;

    /// Tabulate the passed category column with an explicit request
    fn tab_with(&self, x: &Column, spec: TabSpec) -> TabResult<Frame>;
}

impl ColumnTab for Column {
    fn tab(&self, x: &Column) -> TabResult<Frame> {
        self.tab_with(x, TabSpec::new())
    }

    fn tab_with(&self, x: &Column, spec: TabSpec) -> TabResult<Frame> {
        if spec.y.is_some() {
            return Err(TabError::usage(
                "y cannot be used when tabulating against a single column.",
            ));
        }
        let values = spec
            .values
            .map(|reference| match reference {
                ColumnRef::Data(column) => Ok(column),
                ColumnRef::Name(_) | ColumnRef::List(_) => Err(TabError::usage(
                    "values must be a column here; names need an enclosing frame.",
                )),
            })
            .transpose()?;
        engine::tabulate_one_way(x, values.as_ref(), spec.aggfunc, spec.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::AggSpec;
    use xtab_frame::{Aggregator, FrameError, GroupOptions, Value};

    fn frame() -> Frame {
        Frame::from_columns(vec![
            Column::new("foo", vec!["a", "a", "b", "a", "b", "c", "a"]),
            Column::new("bar", vec![4, 5, 7, 6, 7, 7, 5]),
            Column::new("fizz", vec![12, 63, 23, 36, 21, 28, 42]),
        ])
        .unwrap()
    }

    #[test]
    fn frame_tab_by_name_gives_the_frequency_summary() {
        let out = frame().tab("foo").unwrap();
        assert_eq!(out.column_names(), ["foo", "size", "percent"]);
        assert_eq!(
            out.column("size").unwrap().values(),
            [Value::Int(4), Value::Int(2), Value::Int(1)]
        );
    }

    #[test]
    fn frame_tab_with_y_cross_tabulates() {
        let out = frame()
            .tab_with("foo", TabSpec::new().with_y("bar"))
            .unwrap();
        assert_eq!(out.column_names(), ["foo", "4", "5", "6", "7"]);
    }

    #[test]
    fn frame_tab_with_values_and_agg_by_name() {
        let out = frame()
            .tab_with(
                "foo",
                TabSpec::new()
                    .with_values("fizz")
                    .with_agg(Aggregator::mean()),
            )
            .unwrap();
        assert_eq!(
            out.column("mean").unwrap().values(),
            [
                Value::Float(38.25),
                Value::Float(22.0),
                Value::Float(28.0)
            ]
        );
    }

    #[test]
    fn unknown_names_surface_the_lookup_error() {
        let err = frame().tab("nope").unwrap_err();
        assert!(matches!(err, TabError::Frame(FrameError::ColumnNotFound(_))));
    }

    #[test]
    fn list_x_is_rejected() {
        let reference = ColumnRef::List(vec![ColumnRef::from("foo"), ColumnRef::from("bar")]);
        let err = frame().tab(reference).unwrap_err();
        assert_eq!(err.to_string(), "x must be a single column, not a list.");
    }

    #[test]
    fn direct_columns_work_without_living_in_the_frame() {
        let external = Column::new("ext", vec!["x", "x", "y", "x", "y", "y", "x"]);
        let out = frame().tab(&external).unwrap();
        assert_eq!(out.column("ext").unwrap().values().len(), 2);
    }

    #[test]
    fn column_tab_tabulates_the_passed_vector() {
        let foo = Column::new("foo", vec!["a", "a", "b", "a", "b", "c", "a"]);
        let anchor = Column::new("bar", vec![4, 5, 7, 6, 7, 7, 5]);
        let out = anchor.tab(&foo).unwrap();
        assert_eq!(out.column_names(), ["foo", "size", "percent"]);
        assert_eq!(
            out.column("percent").unwrap().values(),
            [
                Value::Float(57.14),
                Value::Float(28.57),
                Value::Float(14.29)
            ]
        );
    }

    #[test]
    fn column_tab_rejects_a_second_axis() {
        let foo = Column::new("foo", vec!["a"]);
        let anchor = Column::new("bar", vec![1]);
        let err = anchor
            .tab_with(&foo, TabSpec::new().with_y("bar"))
            .unwrap_err();
        assert!(matches!(err, TabError::Usage(_)));
    }

    #[test]
    fn column_tab_aggregates_direct_values() {
        let foo = Column::new("foo", vec!["a", "a", "b", "a", "b", "c", "a"]);
        let fizz = Column::new("fizz", vec![12, 63, 23, 36, 21, 28, 42]);
        let anchor = Column::new("bar", vec![0; 7]);
        let out = anchor
            .tab_with(
                &foo,
                TabSpec::new()
                    .with_values(&fizz)
                    .with_agg(AggSpec::Many(vec![Aggregator::mean(), Aggregator::max()])),
            )
            .unwrap();
        assert_eq!(out.column_names(), ["foo", "mean", "max"]);
        assert_eq!(out.column("max").unwrap().values()[0], Value::Int(63));
    }

    #[test]
    fn column_tab_cannot_resolve_names() {
        let foo = Column::new("foo", vec!["a"]);
        let anchor = Column::new("bar", vec![1]);
        let err = anchor
            .tab_with(
                &foo,
                TabSpec::new()
                    .with_values("fizz")
                    .with_agg(Aggregator::mean()),
            )
            .unwrap_err();
        assert!(matches!(err, TabError::Usage(_)));
    }

    #[test]
    fn unsorted_options_flow_through() {
        let out = frame()
            .tab_with(
                "bar",
                TabSpec::new().with_options(GroupOptions::default().with_sort(false)),
            )
            .unwrap();
        let keys: Vec<String> = out
            .column("bar")
            .unwrap()
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(keys, ["4", "5", "7", "6"]);
    }
}
