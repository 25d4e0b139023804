//! Requested variables and the values decoded for them.

use crate::decoding::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Element type a variable is decoded as.
///
/// Open-Meteo sends nearly every variable as 32-bit floats. Epoch-valued
/// variables such as daily `sunrise` and `sunset` come as 64-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DType {
    Float,
    Int64,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float => "float",
            DType::Int64 => "int64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "float" | "f32" | "float32" => Ok(DType::Float),
            "int64" | "i64" => Ok(DType::Int64),
            _ => Err(DecodeError::UnknownDType {
                dtype: s.to_string(),
                variable: None,
            }),
        }
    }
}

impl TryFrom<String> for DType {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DType> for String {
    fn from(value: DType) -> Self {
        value.as_str().to_string()
    }
}

/// A requested variable: its name and the type its values are decoded as.
///
/// The position of a spec within its list is what binds it to a slot in the
/// response, so lists must be in the same order as the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableSpec {
    pub name: String,
    pub dtype: DType,
}

impl VariableSpec {
    pub fn new(name: impl Into<String>, dtype: DType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }

    /// Shorthand for a float-valued variable.
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, DType::Float)
    }

    /// Shorthand for an integer-valued variable, e.g. `sunrise`.
    pub fn int64(name: impl Into<String>) -> Self {
        Self::new(name, DType::Int64)
    }
}

/// Values decoded for one series variable.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Float(Vec<f32>),
    Int64(Vec<i64>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Float(values) => values.len(),
            ColumnValues::Int64(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            ColumnValues::Float(_) => DType::Float,
            ColumnValues::Int64(_) => DType::Int64,
        }
    }
}

/// A named sequence of decoded values for one requested variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableColumn {
    pub name: String,
    pub values: ColumnValues,
}

impl VariableColumn {
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dtype(&self) -> DType {
        self.values.dtype()
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.values {
            ColumnValues::Float(values) => Some(values),
            ColumnValues::Int64(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<&[i64]> {
        match &self.values {
            ColumnValues::Int64(values) => Some(values),
            ColumnValues::Float(_) => None,
        }
    }
}

/// A single decoded value of the current-conditions block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    Float(f32),
    Int64(i64),
}

impl ScalarValue {
    pub fn dtype(&self) -> DType {
        match self {
            ScalarValue::Float(_) => DType::Float,
            ScalarValue::Int64(_) => DType::Int64,
        }
    }

    /// Widens the value to `f64`. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            ScalarValue::Float(v) => v as f64,
            ScalarValue::Int64(v) => v as f64,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Float(v) => write!(f, "{v}"),
            ScalarValue::Int64(v) => write!(f, "{v}"),
        }
    }
}
