use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;
use thiserror::Error;

/// A scalar value carried in a query string or a request body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// JSON form of the value, or `None` when it has no JSON representation
    /// (non-finite floats).
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Self::Str(s) => Some(Value::String(s.clone())),
            Self::Int(i) => Some(Value::Number((*i).into())),
            Self::UInt(u) => Some(Value::Number((*u).into())),
            Self::Float(f) => Number::from_f64(*f).map(Value::Number),
            Self::Bool(b) => Some(Value::Bool(*b)),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::UInt(u) => write!(f, "{}", u),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::UInt(value),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("value must serialize to a JSON object")]
    NotAnObject,

    #[error("parameter \"{0}\" is not a scalar")]
    NotScalar(String),

    #[error("parameter \"{0}\" is not representable in JSON")]
    NotRepresentable(String),

    #[error("{0}")]
    Json(String),
}

/// Key/value pairs for a query string or a flat JSON body.
///
/// Keys are unique: inserting an existing key replaces its value in place.
/// Insertion order is kept for inspection, while [`Params::sorted`] gives the
/// key-ordered view used for anything that must be byte-stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries ordered by key, ascending.
    pub fn sorted(&self) -> Vec<(&str, &ParamValue)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// JSON object with keys in sorted order.
    pub fn to_json_object(&self) -> Result<Map<String, Value>, ParamsError> {
        let mut map = Map::new();
        for (key, value) in self.sorted() {
            let json = value
                .to_json()
                .ok_or_else(|| ParamsError::NotRepresentable(key.to_string()))?;
            map.insert(key.to_string(), json);
        }
        Ok(map)
    }

    /// Flattens a serializable struct into params.
    ///
    /// The value must serialize to a JSON object of scalars; absent optional
    /// fields must be skipped by the struct's serde attributes, since a JSON
    /// `null` (also what serde_json produces for NaN and infinities) is
    /// rejected.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, ParamsError> {
        let json = serde_json::to_value(value).map_err(|e| ParamsError::Json(e.to_string()))?;
        let Value::Object(map) = json else {
            return Err(ParamsError::NotAnObject);
        };

        let mut params = Self::new();
        for (key, value) in map {
            let value = match value {
                Value::String(s) => ParamValue::Str(s),
                Value::Bool(b) => ParamValue::Bool(b),
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        ParamValue::Int(i)
                    } else if let Some(u) = n.as_u64() {
                        ParamValue::UInt(u)
                    } else if let Some(f) = n.as_f64() {
                        ParamValue::Float(f)
                    } else {
                        return Err(ParamsError::NotRepresentable(key));
                    }
                }
                Value::Null => return Err(ParamsError::NotRepresentable(key)),
                Value::Array(_) | Value::Object(_) => return Err(ParamsError::NotScalar(key)),
            };
            params.insert(key, value);
        }
        Ok(params)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
