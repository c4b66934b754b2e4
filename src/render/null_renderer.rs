use crate::error::ScatterResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced, and it counts draw passes so the
/// no-op guard on repeated label clicks is observable.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.render_calls += 1;
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
