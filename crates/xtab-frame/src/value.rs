//! Dynamically typed cell values
//!
//! `Value` is the unit of data stored in a [`Column`](crate::Column). Values
//! act as grouping keys, so the type carries a total ordering and a hash that
//! are consistent with each other: `Int` and `Float` compare numerically
//! (`Int(4)` and `Float(4.0)` are the same key), and nulls sort last.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single cell value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing data
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Whether this value is the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view, if the value is `Int` or `Float`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Rank used to order values of different kinds: bools, then numbers,
    /// then strings, with nulls always last.
    fn class_rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::Str(_) => 2,
            Value::Null => 3,
        }
    }
}

/// Compare an integer against a float without converting the integer to
/// `f64`, so equality stays exact for magnitudes beyond 2^53.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        // Finite values sort inside the NaN endpoints, like total_cmp.
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    const TWO_POW_63: f64 = 9.223_372_036_854_775_8e18;
    if f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    let trunc = f.trunc();
    match i.cmp(&(trunc as i64)) {
        Ordering::Equal => {
            let frac = f - trunc;
            if frac > 0.0 {
                Ordering::Less
            } else if frac < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        other => other,
    }
}

fn cmp_numeric(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(l), Value::Int(r)) => l.cmp(r),
        (Value::Float(l), Value::Float(r)) => {
            // partial_cmp keeps -0.0 == 0.0; total_cmp only breaks NaN ties.
            l.partial_cmp(r).unwrap_or_else(|| l.total_cmp(r))
        }
        (Value::Int(l), Value::Float(r)) => cmp_int_float(*l, *r),
        (Value::Float(l), Value::Int(r)) => cmp_int_float(*r, *l).reverse(),
        _ => unreachable!("cmp_numeric called with non-numeric values"),
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.class_rank(), other.class_rank());
        if a != b {
            return a.cmp(&b);
        }
        match (self, other) {
            (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
            (Value::Str(l), Value::Str(r)) => l.cmp(r),
            (Value::Null, Value::Null) => Ordering::Equal,
            _ => cmp_numeric(self, other),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.class_rank());
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => {
                // Integral floats hash like the equal Int so Eq and Hash agree.
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    (*f as i64).hash(state);
                } else {
                    f.to_bits().hash(state);
                }
            }
            Value::Str(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn int_and_float_are_the_same_key() {
        assert_eq!(Value::Int(4), Value::Float(4.0));
        assert_eq!(hash_of(&Value::Int(4)), hash_of(&Value::Float(4.0)));
        assert_ne!(Value::Int(4), Value::Float(4.5));
    }

    #[test]
    fn ordering_puts_nulls_last() {
        let mut values = vec![
            Value::Null,
            Value::from("b"),
            Value::Int(2),
            Value::from("a"),
            Value::Float(1.5),
            Value::Bool(true),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::Bool(true),
                Value::Float(1.5),
                Value::Int(2),
                Value::from("a"),
                Value::from("b"),
                Value::Null,
            ]
        );
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
        assert_eq!(Value::Float(-0.0), Value::Int(0));
        assert_eq!(hash_of(&Value::Float(-0.0)), hash_of(&Value::Int(0)));
    }

    #[test]
    fn large_ints_compare_exactly() {
        // 2^53 + 1 rounds down to 2^53 as f64; exact comparison must not.
        let big = (1i64 << 53) + 1;
        assert_ne!(Value::Int(big), Value::Float((1i64 << 53) as f64));
        assert!(Value::Int(big) > Value::Float((1i64 << 53) as f64));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Int(7).to_string(), "7");
        assert_eq!(Value::Float(7.0).to_string(), "7");
        assert_eq!(Value::Float(38.25).to_string(), "38.25");
        assert_eq!(Value::from("a").to_string(), "a");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn serde_is_untagged() {
        let json = r#"[null, true, 4, 4.5, "a"]"#;
        let values: Vec<Value> = serde_json::from_str(json).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(4),
                Value::Float(4.5),
                Value::from("a"),
            ]
        );
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[null,true,4,4.5,"a"]"#);
    }
}
