pub mod loader;
pub mod record;

pub use loader::{load_survey_csv, read_survey_csv};
pub use record::{FieldExtent, StateRecord, SurveyDataset};
