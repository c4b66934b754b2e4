use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Viewport, XField, YField};
use crate::data::FieldExtent;
use crate::error::{ScatterError, ScatterResult};
use crate::render::Renderer;

use super::{RedrawStats, ScatterEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Point-in-time diagnostic view of an engine.
///
/// Domains are the animation targets; `animating` flags whether the display
/// has settled on them yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub x_field: XField,
    pub y_field: YField,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub field_extents: IndexMap<String, FieldExtent>,
    pub mark_count: usize,
    pub animating: bool,
    pub stats: RedrawStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScatterError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ScatterResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ScatterError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ScatterError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ScatterEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.config().viewport,
            x_field: self.selection().x_field(),
            y_field: self.selection().y_field(),
            x_domain: self.x_scale().domain(),
            y_domain: self.y_scale().domain(),
            field_extents: self.dataset().field_extents(),
            mark_count: self.marks().len(),
            animating: self.is_animating(),
            stats: self.stats(),
        }
    }
}
