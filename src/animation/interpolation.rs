use crate::{Result, TweenError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that a tween can animate.
///
/// Each variant has its own interpolation policy, see [`Value::lerp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer values truncate their delta toward the start
    Int(i64),
    Float(f64),
    /// Text is revealed by length, not blended per character
    Text(String),
    /// Fixed-length ordered sequence, interpolated element-wise
    Seq(Vec<Value>),
    /// Not interpolable; the end value is passed through
    Flag(bool),
}

impl Value {
    /// Name of the shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Seq(_) => "sequence",
            Value::Flag(_) => "flag",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Check that `self` and `other` can be interpolated together
    pub fn check_compatible(&self, other: &Value) -> Result<()> {
        match (self, other) {
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => Ok(()),
            (Value::Text(_), Value::Text(_)) => Ok(()),
            (Value::Seq(a), Value::Seq(b)) => {
                if a.len() != b.len() {
                    return Err(TweenError::LengthMismatch {
                        from: a.len(),
                        to: b.len(),
                    });
                }
                a.iter().zip(b).try_for_each(|(x, y)| x.check_compatible(y))
            }
            (Value::Flag(_), _) => Ok(()),
            _ => Err(TweenError::ShapeMismatch {
                from: self.kind(),
                to: other.kind(),
            }),
        }
    }

    /// Blend `self` toward `other` by `fraction`.
    ///
    /// `fraction` may lie outside `[0, 1]` for overshooting curves.
    pub fn lerp(&self, other: &Value, fraction: f64) -> Result<Value> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(lerp_ints(*a, *b, fraction))),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Int(lerp_int(*a, *b, fraction))),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(lerp_float(*a, *b, fraction))),
            (Value::Float(a), Value::Int(b)) => {
                Ok(Value::Float(lerp_float(*a, *b as f64, fraction)))
            }
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(reveal_text(a, b, fraction))),
            (Value::Seq(a), Value::Seq(b)) => {
                if a.len() != b.len() {
                    return Err(TweenError::LengthMismatch {
                        from: a.len(),
                        to: b.len(),
                    });
                }
                a.iter()
                    .zip(b)
                    .map(|(x, y)| x.lerp(y, fraction))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Seq)
            }
            (Value::Flag(_), _) => Ok(other.clone()),
            _ => Err(TweenError::ShapeMismatch {
                from: self.kind(),
                to: other.kind(),
            }),
        }
    }
}

fn lerp_float(a: f64, b: f64, fraction: f64) -> f64 {
    a + (b - a) * fraction
}

/// Integer endpoints are returned exactly; the delta is taken in `i128` so
/// it cannot overflow, and the result saturates at the `i64` bounds.
fn lerp_ints(a: i64, b: i64, fraction: f64) -> i64 {
    if fraction == 0.0 {
        return a;
    }
    if fraction == 1.0 {
        return b;
    }
    let delta = i128::from(b) - i128::from(a);
    // `as` truncates toward zero and saturates
    let offset = (delta as f64 * fraction) as i128;
    let value = i128::from(a).saturating_add(offset);
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

fn lerp_int(a: i64, b: f64, fraction: f64) -> i64 {
    // `as` truncates toward zero and saturates
    a.saturating_add(((b - a as f64) * fraction) as i64)
}

/// Keep the first `len(b) - trunc((len(b) - len(a)) * fraction)` characters of
/// `b`. A negative bound counts back from the end, then clamps into range.
fn reveal_text(a: &str, b: &str, fraction: f64) -> String {
    let a_len = a.chars().count() as i64;
    let b_len = b.chars().count() as i64;
    let diff = b_len - a_len;
    let mut end = b_len.saturating_sub((diff as f64 * fraction) as i64);
    if end < 0 {
        end = end.saturating_add(b_len);
    }
    let end = end.clamp(0, b_len) as usize;
    b.chars().take(end).collect()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Flag(v) => write!(f, "{}", v),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Flag(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<(f64, f64)> for Value {
    fn from((x, y): (f64, f64)) -> Self {
        Value::Seq(vec![Value::Float(x), Value::Float(y)])
    }
}
