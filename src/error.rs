use thiserror::Error;

pub type ScatterResult<T> = Result<T, ScatterError>;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// The dataset holds no record with a usable (finite) value for the
    /// requested field, so min/max are undefined.
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("unknown survey field `{name}`")]
    UnknownField { name: String },

    /// The survey file is missing or its contents cannot be read as CSV.
    #[error("survey csv could not be read: {0}")]
    DataLoad(#[from] csv::Error),

    #[error("survey csv is missing required column `{name}`")]
    MissingColumn { name: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
