use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Chart axis tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Survey fields selectable on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XField {
    Poverty,
    Age,
    Income,
}

impl XField {
    pub const ALL: [XField; 3] = [XField::Poverty, XField::Age, XField::Income];

    /// Wire/CSV column name for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            XField::Poverty => "poverty",
            XField::Age => "age",
            XField::Income => "income",
        }
    }

    /// Human-readable axis label text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            XField::Poverty => "In Poverty (%)",
            XField::Age => "Age (Median)",
            XField::Income => "Household Income (Median)",
        }
    }
}

impl FromStr for XField {
    type Err = ScatterError;

    fn from_str(name: &str) -> ScatterResult<Self> {
        XField::ALL
            .into_iter()
            .find(|field| field.key() == name)
            .ok_or_else(|| ScatterError::UnknownField {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for XField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Survey fields selectable on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YField {
    Healthcare,
    Smokes,
    Obesity,
}

impl YField {
    pub const ALL: [YField; 3] = [YField::Healthcare, YField::Smokes, YField::Obesity];

    /// Wire/CSV column name for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            YField::Healthcare => "healthcare",
            YField::Smokes => "smokes",
            YField::Obesity => "obesity",
        }
    }

    /// Human-readable axis label text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            YField::Healthcare => "Lacks Healthcare (%)",
            YField::Smokes => "Smokes (%)",
            YField::Obesity => "Obese (%)",
        }
    }
}

impl FromStr for YField {
    type Err = ScatterError;

    fn from_str(name: &str) -> ScatterResult<Self> {
        YField::ALL
            .into_iter()
            .find(|field| field.key() == name)
            .ok_or_else(|| ScatterError::UnknownField {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for YField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
