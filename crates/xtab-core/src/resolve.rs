//! Column reference resolution
//!
//! Tabulation arguments name their inputs loosely: a column can be given
//! directly, by name, or as a list of either. [`resolve`] turns a
//! [`ColumnRef`] into concrete column data against an enclosing frame.

use crate::error::{TabError, TabResult};
use xtab_frame::{Column, Frame};

/// A loose reference to one column or a list of columns
#[derive(Debug, Clone)]
pub enum ColumnRef {
    /// Look the column up by name on the enclosing frame
    Name(String),
    /// Use this column as-is
    Data(Column),
    /// Resolve each element in turn, preserving structure
    List(Vec<ColumnRef>),
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Column> for ColumnRef {
    fn from(column: Column) -> Self {
        Self::Data(column)
    }
}

impl From<&Column> for ColumnRef {
    fn from(column: &Column) -> Self {
        Self::Data(column.clone())
    }
}

impl From<Vec<ColumnRef>> for ColumnRef {
    fn from(refs: Vec<ColumnRef>) -> Self {
        Self::List(refs)
    }
}

/// The outcome of resolving a [`ColumnRef`]
#[derive(Debug, Clone)]
pub enum Resolved {
    One(Column),
    Many(Vec<Resolved>),
}

impl Resolved {
    /// Unwrap a single column. `what` names the argument in the error when
    /// the reference resolved to a list.
    pub fn into_single(self, what: &str) -> TabResult<Column> {
        match self {
            Self::One(column) => Ok(column),
            Self::Many(_) => Err(TabError::usage(format!(
                "{what} must be a single column, not a list."
            ))),
        }
    }
}

/// Resolve a reference against `frame`. Name lookups that miss propagate
/// the frame's lookup error.
pub fn resolve(frame: &Frame, reference: &ColumnRef) -> TabResult<Resolved> {
    match reference {
        ColumnRef::Name(name) => Ok(Resolved::One(frame.column(name)?.clone())),
        ColumnRef::Data(column) => Ok(Resolved::One(column.clone())),
        ColumnRef::List(refs) => {
            let resolved = refs
                .iter()
                .map(|r| resolve(frame, r))
                .collect::<TabResult<Vec<_>>>()?;
            Ok(Resolved::Many(resolved))
        }
    }
}

/// `Option` pass-through: absent references resolve to absent.
pub fn resolve_opt(frame: &Frame, reference: Option<&ColumnRef>) -> TabResult<Option<Resolved>> {
    reference.map(|r| resolve(frame, r)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xtab_frame::{FrameError, Value};

    fn frame() -> Frame {
        Frame::from_columns(vec![
            Column::new("foo", vec!["a", "b"]),
            Column::new("bar", vec![1, 2]),
        ])
        .unwrap()
    }

    #[test]
    fn names_look_up_on_the_frame() {
        let resolved = resolve(&frame(), &ColumnRef::from("bar")).unwrap();
        let column = resolved.into_single("x").unwrap();
        assert_eq!(column.name(), "bar");
        assert_eq!(column.values(), [Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn direct_columns_pass_through() {
        let baz = Column::new("baz", vec![9]);
        let resolved = resolve(&frame(), &ColumnRef::from(&baz)).unwrap();
        assert_eq!(resolved.into_single("x").unwrap(), baz);
    }

    #[test]
    fn missing_names_propagate_the_lookup_error() {
        let err = resolve(&frame(), &ColumnRef::from("nope")).unwrap_err();
        assert!(matches!(err, TabError::Frame(FrameError::ColumnNotFound(_))));
    }

    #[test]
    fn lists_resolve_elementwise() {
        let reference = ColumnRef::from(vec![ColumnRef::from("foo"), ColumnRef::from("bar")]);
        let resolved = resolve(&frame(), &reference).unwrap();
        match resolved {
            Resolved::Many(items) => assert_eq!(items.len(), 2),
            other => panic!("expected a list, got {other:?}"),
        }
    }

    #[test]
    fn lists_are_rejected_where_one_column_is_needed() {
        let reference = ColumnRef::from(vec![ColumnRef::from("foo")]);
        let resolved = resolve(&frame(), &reference).unwrap();
        let err = resolved.into_single("x").unwrap_err();
        assert_eq!(err.to_string(), "x must be a single column, not a list.");
    }

    #[test]
    fn absent_references_resolve_to_absent() {
        assert!(resolve_opt(&frame(), None).unwrap().is_none());
    }
}
