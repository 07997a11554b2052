use std::fmt;

use serde::{Deserialize, Serialize};

/// Unprocessed output of a predictor, before label mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// 布尔值
    Bool(bool),
    /// 整数值
    Integer(i64),
    /// 浮点数值
    Float(f64),
    /// 字符串值
    String(String),
}

impl RawValue {
    /// Integer-like outputs only; floats and booleans are not class indices
    pub fn as_index(&self) -> Option<i64> {
        match self {
            RawValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Equal to numeric 1, the string "1" or boolean true
    pub fn is_positive(&self) -> bool {
        match self {
            RawValue::Bool(b) => *b,
            RawValue::Integer(i) => *i == 1,
            RawValue::Float(f) => *f == 1.0,
            RawValue::String(s) => s == "1",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(true) => f.write_str("True"),
            RawValue::Bool(false) => f.write_str("False"),
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Float(x) if x.is_nan() => f.write_str("nan"),
            RawValue::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "inf" } else { "-inf" })
            }
            RawValue::Float(x) => write_float(f, *x),
            RawValue::String(s) => f.write_str(s),
        }
    }
}

/// Python `repr` layout: scientific below 1e-4 and from 1e16 up, otherwise
/// positional with at least one fractional digit.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let sci = format!("{:e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if x != 0.0 && (exp < -4 || exp >= 16) {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exp.abs())
    } else if x.fract() == 0.0 {
        write!(f, "{:.1}", x)
    } else {
        write!(f, "{}", x)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_python_text_forms() {
        assert_eq!(RawValue::Integer(2).to_string(), "2");
        assert_eq!(RawValue::Float(1.0).to_string(), "1.0");
        assert_eq!(RawValue::Float(0.25).to_string(), "0.25");
        assert_eq!(RawValue::Float(f64::NAN).to_string(), "nan");
        assert_eq!(RawValue::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(RawValue::Float(-0.0).to_string(), "-0.0");
        assert_eq!(RawValue::Bool(true).to_string(), "True");
        assert_eq!(RawValue::Bool(false).to_string(), "False");
        assert_eq!(RawValue::from("busy").to_string(), "busy");
    }

    #[test]
    fn test_display_switches_to_exponent_like_python() {
        assert_eq!(RawValue::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(RawValue::Float(1e16).to_string(), "1e+16");
        assert_eq!(RawValue::Float(1e20).to_string(), "1e+20");
        assert_eq!(RawValue::Float(1.5e20).to_string(), "1.5e+20");
        assert_eq!(RawValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(RawValue::Float(0.00001).to_string(), "1e-05");
        assert_eq!(RawValue::Float(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(RawValue::Float(1e300).to_string(), "1e+300");
    }

    #[test]
    fn test_positive_forms() {
        assert!(RawValue::Integer(1).is_positive());
        assert!(RawValue::Float(1.0).is_positive());
        assert!(RawValue::from("1").is_positive());
        assert!(RawValue::Bool(true).is_positive());

        assert!(!RawValue::Integer(0).is_positive());
        assert!(!RawValue::Integer(2).is_positive());
        assert!(!RawValue::from("0").is_positive());
        assert!(!RawValue::from("1.0").is_positive());
        assert!(!RawValue::Bool(false).is_positive());
    }

    #[test]
    fn test_untagged_decoding_prefers_integer() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[true, 1, 1.5, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawValue::Bool(true),
                RawValue::Integer(1),
                RawValue::Float(1.5),
                RawValue::from("x"),
            ]
        );
    }
}
