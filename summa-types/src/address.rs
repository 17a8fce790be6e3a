//! Summary vector addressing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SummaError;

/// Key identifying one summary vector inside a case, e.g. `FOPT` or `WOPR:OP_1`.
///
/// The vector mnemonic is mandatory and never contains `:`; the object name
/// (well, group, region) is present for non-field vectors. Every address
/// round-trips through its `Display` form, which is also its serde form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SummaryAddress {
    vector: String,
    object: Option<String>,
}

impl SummaryAddress {
    /// Address of a field-level vector such as `FOPT`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the name is empty, padded with whitespace, or contains `:`.
    pub fn field(vector: impl Into<String>) -> Result<Self, SummaError> {
        Ok(Self {
            vector: checked_vector(vector.into())?,
            object: None,
        })
    }

    /// Address of a vector bound to a named object, e.g. `WOPR` of well `OP_1`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either name is empty or padded with whitespace, or if
    /// the vector name contains `:`.
    pub fn with_object(
        vector: impl Into<String>,
        object: impl Into<String>,
    ) -> Result<Self, SummaError> {
        let vector = checked_vector(vector.into())?;
        let object = object.into();
        if object.is_empty() || object.trim() != object {
            return Err(SummaError::InvalidArg(format!(
                "summary address '{vector}:{object}' has an empty or padded object name"
            )));
        }
        Ok(Self {
            vector,
            object: Some(object),
        })
    }

    /// Vector mnemonic.
    #[must_use]
    pub fn vector(&self) -> &str {
        &self.vector
    }

    /// Object name, if any.
    #[must_use]
    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }
}

fn checked_vector(vector: String) -> Result<String, SummaError> {
    if vector.is_empty() || vector.trim() != vector {
        return Err(SummaError::InvalidArg(format!(
            "summary address '{vector}' has an empty or padded vector name"
        )));
    }
    if vector.contains(':') {
        return Err(SummaError::InvalidArg(format!(
            "vector name '{vector}' must not contain ':'"
        )));
    }
    Ok(vector)
}

impl fmt::Display for SummaryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(o) => write!(f, "{}:{}", self.vector, o),
            None => f.write_str(&self.vector),
        }
    }
}

impl FromStr for SummaryAddress {
    type Err = SummaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some((v, o)) => Self::with_object(v.trim(), o.trim()),
            None => Self::field(s),
        }
    }
}

impl TryFrom<String> for SummaryAddress {
    type Error = SummaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SummaryAddress> for String {
    fn from(address: SummaryAddress) -> Self {
        address.to_string()
    }
}
