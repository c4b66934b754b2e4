mod axis_scene;
mod config;
mod engine;
mod frame_builder;
mod marks;
mod scales;
mod snapshot;

pub use config::{AxisStyle, MarkStyle, ScatterEngineConfig};
pub use engine::{RedrawStats, ScatterEngine};
pub use marks::{MarkPoint, project_marks};
pub use scales::{build_x_scale, build_y_scale};
pub use snapshot::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1};
