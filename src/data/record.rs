use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{XField, YField};
use crate::error::{ScatterError, ScatterResult};

/// One survey row: a U.S. state identified by its abbreviation, with the six
/// numeric fields the chart can map onto its axes.
///
/// Records are immutable once loaded. Malformed source cells arrive here as
/// `NaN` and flow through projection untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub obesity: f64,
    pub smokes: f64,
}

impl StateRecord {
    #[must_use]
    pub fn x_value(&self, field: XField) -> f64 {
        match field {
            XField::Poverty => self.poverty,
            XField::Age => self.age,
            XField::Income => self.income,
        }
    }

    #[must_use]
    pub fn y_value(&self, field: YField) -> f64 {
        match field {
            YField::Healthcare => self.healthcare,
            YField::Smokes => self.smokes,
            YField::Obesity => self.obesity,
        }
    }
}

/// Raw min/max of one field over the finite values in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldExtent {
    pub min: f64,
    pub max: f64,
}

/// Ordered, load-once collection of survey records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurveyDataset {
    records: Vec<StateRecord>,
}

impl SurveyDataset {
    #[must_use]
    pub fn new(records: Vec<StateRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min/max of an X-axis field, skipping non-finite cells.
    ///
    /// Fails with [`ScatterError::EmptyDataset`] when no finite value exists,
    /// since min/max are undefined in that case.
    pub fn x_extent(&self, field: XField) -> ScatterResult<FieldExtent> {
        extent(self.records.iter().map(|record| record.x_value(field)))
    }

    /// Min/max of a Y-axis field, skipping non-finite cells.
    pub fn y_extent(&self, field: YField) -> ScatterResult<FieldExtent> {
        extent(self.records.iter().map(|record| record.y_value(field)))
    }

    /// Per-field extents in declaration order (X fields, then Y fields).
    ///
    /// `IndexMap` is used to preserve insertion order for stable snapshots.
    /// Fields without any finite value are omitted.
    #[must_use]
    pub fn field_extents(&self) -> IndexMap<String, FieldExtent> {
        let mut extents = IndexMap::new();
        for field in XField::ALL {
            if let Ok(extent) = self.x_extent(field) {
                extents.insert(field.key().to_owned(), extent);
            }
        }
        for field in YField::ALL {
            if let Ok(extent) = self.y_extent(field) {
                extents.insert(field.key().to_owned(), extent);
            }
        }
        extents
    }
}

fn extent(values: impl Iterator<Item = f64>) -> ScatterResult<FieldExtent> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;

    for value in values {
        if !value.is_finite() {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
        seen = true;
    }

    if !seen {
        return Err(ScatterError::EmptyDataset);
    }
    Ok(FieldExtent { min, max })
}
