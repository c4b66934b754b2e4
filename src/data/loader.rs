use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::data::{StateRecord, SurveyDataset};
use crate::error::{ScatterError, ScatterResult};

const ABBR_COLUMN: &str = "abbr";
const NUMERIC_COLUMNS: [&str; 6] = [
    "poverty",
    "age",
    "income",
    "healthcare",
    "obesity",
    "smokes",
];

/// Loads a survey CSV from disk.
///
/// The header row must contain `abbr` plus the six numeric columns; extra
/// columns are ignored. A missing file or malformed CSV structure fails the
/// load, while malformed numeric cells degrade to `NaN` (see
/// [`read_survey_csv`]).
pub fn load_survey_csv(path: impl AsRef<Path>) -> ScatterResult<SurveyDataset> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let dataset = parse(reader)?;
    debug!(path = %path.display(), records = dataset.len(), "loaded survey csv");
    Ok(dataset)
}

/// Parses survey CSV from any reader.
///
/// Numeric cells that fail to parse (or are absent on a row) become `NaN`
/// and propagate into projection rather than aborting the load, matching
/// the lenient numeric coercion of the chart this engine reproduces.
pub fn read_survey_csv<R: Read>(input: R) -> ScatterResult<SurveyDataset> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    parse(reader)
}

fn parse<R: Read>(mut reader: csv::Reader<R>) -> ScatterResult<SurveyDataset> {
    let headers = reader.headers()?.clone();
    let abbr_index = column_index(&headers, ABBR_COLUMN)?;
    let mut numeric_indices = [0usize; NUMERIC_COLUMNS.len()];
    for (slot, name) in numeric_indices.iter_mut().zip(NUMERIC_COLUMNS) {
        *slot = column_index(&headers, name)?;
    }

    let mut records = Vec::new();
    for (row, entry) in reader.records().enumerate() {
        let entry = entry?;
        let abbr = entry.get(abbr_index).unwrap_or_default().to_owned();
        let mut values = [0.0f64; NUMERIC_COLUMNS.len()];
        for (slot, (&index, name)) in values
            .iter_mut()
            .zip(numeric_indices.iter().zip(NUMERIC_COLUMNS))
        {
            *slot = numeric_cell(&entry, index, name, row, &abbr);
        }

        let [poverty, age, income, healthcare, obesity, smokes] = values;
        records.push(StateRecord {
            abbr,
            poverty,
            age,
            income,
            healthcare,
            obesity,
            smokes,
        });
    }

    Ok(SurveyDataset::new(records))
}

fn column_index(headers: &StringRecord, name: &str) -> ScatterResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ScatterError::MissingColumn {
            name: name.to_owned(),
        })
}

fn numeric_cell(entry: &StringRecord, index: usize, name: &str, row: usize, abbr: &str) -> f64 {
    let raw = entry.get(index).unwrap_or_default();
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(row, abbr, column = name, cell = raw, "non-numeric survey cell, keeping NaN");
            f64::NAN
        }
    }
}
