use serde::{Deserialize, Serialize};

///
/// Value
///
/// Argument representation handed over by the host at execution time.
/// Only `Int` and `Float` are numeric; every other representation is
/// opaque to the engine and fails the slot it is supplied to (silently for
/// value bounds, fatally for exact parameter slots).
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Null,
}

///
/// Numeric
///
/// Numeric view of a [`Value`], produced by [`Value::numeric`].
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Numeric {
    Int(i64),
    Float(f64),
}

impl Value {
    /// Numeric view of this value, if it has one.
    pub(crate) const fn numeric(&self) -> Option<Numeric> {
        match self {
            Self::Int(v) => Some(Numeric::Int(*v)),
            Self::Float(d) => Some(Numeric::Float(*d)),
            Self::Text(_) | Self::Bytes(_) | Self::Null => None,
        }
    }

    /// The value as an integer, only if the conversion is lossless.
    ///
    /// Integers pass through; floats are accepted when truncation toward
    /// zero loses nothing. `NaN` never qualifies. Used for the exact
    /// parameter slots (step, base, offset, limit) and for value equality.
    pub(crate) fn as_lossless_int(&self) -> Option<i64> {
        match self.numeric()? {
            Numeric::Int(v) => Some(v),
            Numeric::Float(d) => {
                let truncated = d as i64;
                ((truncated as f64) == d).then_some(truncated)
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Self::Float(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn lossless_int_passes_integers_through() {
        assert_eq!(Value::Int(i64::MIN).as_lossless_int(), Some(i64::MIN));
        assert_eq!(Value::Int(-7).as_lossless_int(), Some(-7));
    }

    #[test]
    fn lossless_int_accepts_integral_floats() {
        assert_eq!(Value::Float(42.0).as_lossless_int(), Some(42));
        assert_eq!(Value::Float(-3.0).as_lossless_int(), Some(-3));
        assert_eq!(Value::Float(0.0).as_lossless_int(), Some(0));
    }

    #[test]
    fn lossless_int_rejects_fractional_floats() {
        assert_eq!(Value::Float(1.5).as_lossless_int(), None);
        assert_eq!(Value::Float(-0.25).as_lossless_int(), None);
    }

    #[test]
    fn lossless_int_rejects_nan_and_out_of_range() {
        assert_eq!(Value::Float(f64::NAN).as_lossless_int(), None);
        assert_eq!(Value::Float(1.0e19).as_lossless_int(), None);
        assert_eq!(Value::Float(-1.0e19).as_lossless_int(), None);
    }

    #[test]
    fn lossless_int_rejects_non_numeric() {
        assert_eq!(Value::from("5").as_lossless_int(), None);
        assert_eq!(Value::Null.as_lossless_int(), None);
        assert_eq!(Value::Bytes(vec![5]).as_lossless_int(), None);
    }
}
