//! Named columns of values

use crate::Value;
use serde::{Deserialize, Serialize};

/// A named, ordered sequence of values.
///
/// Alignment between columns is positional: primitives that combine columns
/// (grouping, cross-tabulation) require equal lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Create a column from anything iterable into values.
    ///
    /// ```
    /// use xtab_frame::Column;
    ///
    /// let foo = Column::new("foo", ["a", "a", "b"]);
    /// let bar = Column::new("bar", vec![4, 5, 7]);
    /// assert_eq!(foo.len(), bar.len());
    /// ```
    pub fn new<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a copy of this column under a different name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: self.values.clone(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry at position `i`
    pub fn get(&self, i: usize) -> Option<&Value> {
        self.values.get(i)
    }

    /// All entries in order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over entries
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_from_literals() {
        let c = Column::new("foo", ["a", "b"]);
        assert_eq!(c.name(), "foo");
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(0), Some(&Value::from("a")));
        assert_eq!(c.get(2), None);
    }

    #[test]
    fn construction_from_values_with_nulls() {
        let c = Column::new("v", vec![Value::Int(1), Value::Null]);
        assert!(c.get(1).unwrap().is_null());
    }

    #[test]
    fn renamed_keeps_data() {
        let c = Column::new("a", vec![1, 2]);
        let r = c.renamed("b");
        assert_eq!(r.name(), "b");
        assert_eq!(r.values(), c.values());
    }
}
