use ordered_float::OrderedFloat;
use tracing::warn;

use crate::core::{LinearScale, PlotArea, Viewport};
use crate::interaction::{LabelState, SelectionState};
use crate::render::{CirclePrimitive, Color, RenderFrame, TextHAlign, TextPrimitive};

use super::axis_scene::{push_x_axis, push_y_axis};
use super::{AxisStyle, MarkPoint, MarkStyle};

/// Vertical gap between the bottom axis and the first choice label row.
const X_LABEL_BLOCK_OFFSET_PX: f64 = 30.0;
/// Spacing between stacked choice labels on either axis.
const LABEL_ROW_STEP_PX: f64 = 25.0;
/// Horizontal gap between the left axis and the innermost rotated label.
const Y_LABEL_BLOCK_OFFSET_PX: f64 = 43.0;

pub(super) struct FrameInputs<'a> {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub marks: &'a [MarkPoint],
    pub selection: SelectionState,
    pub mark_style: MarkStyle,
    pub axis_style: AxisStyle,
}

/// Materializes the complete scene: axes, choice labels, circles and
/// abbreviation texts.
///
/// Marks whose projected position is non-finite (a `NaN` survey cell) are
/// excluded here with a warning; the remaining frame stays valid for strict
/// backends, matching the source chart where such points simply never
/// appeared on screen.
pub(super) fn build_frame(inputs: &FrameInputs<'_>) -> RenderFrame {
    let mut frame = RenderFrame::new(inputs.viewport);

    push_x_axis(&mut frame, inputs.x_scale, inputs.plot, &inputs.axis_style);
    push_y_axis(&mut frame, inputs.y_scale, inputs.plot, &inputs.axis_style);
    push_choice_labels(&mut frame, inputs);
    push_marks(&mut frame, inputs);

    frame
}

fn push_choice_labels(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let plot = inputs.plot;
    let style = inputs.axis_style;

    let x_center = plot.left + plot.width / 2.0;
    let x_base = plot.top + plot.height + X_LABEL_BLOCK_OFFSET_PX;
    for (row, (field, state)) in inputs.selection.x_label_states().into_iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            field.label(),
            x_center,
            x_base + LABEL_ROW_STEP_PX * row as f64,
            style.choice_label_font_size_px,
            label_color(state, &style),
            TextHAlign::Center,
        ));
    }

    let y_center = plot.top + plot.height / 2.0;
    for (row, (field, state)) in inputs.selection.y_label_states().into_iter().enumerate() {
        frame.texts.push(
            TextPrimitive::new(
                field.label(),
                plot.left - Y_LABEL_BLOCK_OFFSET_PX - LABEL_ROW_STEP_PX * row as f64,
                y_center,
                style.choice_label_font_size_px,
                label_color(state, &style),
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );
    }
}

fn push_marks(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    // Stable draw order by screen x, then abbreviation, so overlapping
    // states layer the same way on every pass.
    let mut order: Vec<usize> = (0..inputs.marks.len()).collect();
    order.sort_by_key(|&index| {
        let mark = &inputs.marks[index];
        (OrderedFloat(mark.x), mark.abbr.clone())
    });

    let mut skipped = 0usize;
    for index in order {
        let mark = &inputs.marks[index];
        if !mark.x.is_finite() || !mark.y.is_finite() {
            skipped += 1;
            continue;
        }

        frame.circles.push(CirclePrimitive::new(
            inputs.plot.left + mark.x,
            inputs.plot.top + mark.y,
            inputs.mark_style.radius_px,
            inputs.mark_style.fill,
        ));

        if !mark.abbr.is_empty() && mark.label_y.is_finite() {
            frame.texts.push(TextPrimitive::new(
                mark.abbr.clone(),
                inputs.plot.left + mark.label_x,
                inputs.plot.top + mark.label_y,
                inputs.mark_style.label_font_size_px,
                inputs.mark_style.label_color,
                TextHAlign::Center,
            ));
        }
    }

    if skipped > 0 {
        warn!(skipped, "marks with non-finite positions left out of frame");
    }
}

fn label_color(state: LabelState, style: &AxisStyle) -> Color {
    match state {
        LabelState::Active => style.active_label_color,
        LabelState::Inactive => style.inactive_label_color,
    }
}
