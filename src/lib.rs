//! scatter-rs: interactive scatter chart engine for state survey data.
//!
//! The crate maps per-state demographic and health fields onto selectable
//! X/Y axes, rebuilds linear scales when the selection changes, and animates
//! marks between layouts through a deterministic, renderer-agnostic redraw
//! cycle. Rendering backends implement [`render::Renderer`] and receive
//! fully materialized frames.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ScatterEngine, ScatterEngineConfig};
pub use error::{ScatterError, ScatterResult};
