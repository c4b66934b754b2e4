mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, LinePrimitive, TextHAlign, TextPrimitive};
pub use svg_backend::SvgRenderer;

use crate::error::ScatterResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()>;
}
