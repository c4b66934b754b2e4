use smallvec::SmallVec;

use crate::core::{LinearScale, PlotArea};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::AxisStyle;

/// Evenly spaced tick values across a domain, endpoints included.
pub(super) fn evenly_spaced_ticks(domain: (f64, f64), tick_count: usize) -> SmallVec<[f64; 12]> {
    let mut ticks = SmallVec::new();
    if tick_count == 0 {
        return ticks;
    }
    if tick_count == 1 {
        ticks.push(domain.0);
        return ticks;
    }

    let span = domain.1 - domain.0;
    let denominator = (tick_count - 1) as f64;
    for index in 0..tick_count {
        let ratio = (index as f64) / denominator;
        ticks.push(domain.0 + span * ratio);
    }
    ticks
}

/// Integral values print bare; everything else keeps one decimal.
pub(super) fn format_tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Appends the bottom axis (baseline, ticks, tick labels) to the frame.
pub(super) fn push_x_axis(
    frame: &mut RenderFrame,
    scale: LinearScale,
    plot: PlotArea,
    style: &AxisStyle,
) {
    let baseline = plot.top + plot.height;
    frame.lines.push(LinePrimitive::new(
        plot.left,
        baseline,
        plot.left + plot.width,
        baseline,
        style.stroke_width,
        style.color,
    ));

    for value in evenly_spaced_ticks(scale.domain(), style.tick_count) {
        let x = plot.left + scale.value_to_pixel(value);
        frame.lines.push(LinePrimitive::new(
            x,
            baseline,
            x,
            baseline + style.tick_length_px,
            style.stroke_width,
            style.color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick_label(value),
            x,
            baseline + style.tick_length_px + style.tick_label_font_size_px,
            style.tick_label_font_size_px,
            style.color,
            TextHAlign::Center,
        ));
    }
}

/// Appends the left axis (baseline, ticks, tick labels) to the frame.
pub(super) fn push_y_axis(
    frame: &mut RenderFrame,
    scale: LinearScale,
    plot: PlotArea,
    style: &AxisStyle,
) {
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.top + plot.height,
        style.stroke_width,
        style.color,
    ));

    for value in evenly_spaced_ticks(scale.domain(), style.tick_count) {
        let y = plot.top + scale.value_to_pixel(value);
        frame.lines.push(LinePrimitive::new(
            plot.left - style.tick_length_px,
            y,
            plot.left,
            y,
            style.stroke_width,
            style.color,
        ));
        frame.texts.push(
            TextPrimitive::new(
                format_tick_label(value),
                plot.left - style.tick_length_px - 3.0,
                y + style.tick_label_font_size_px * 0.35,
                style.tick_label_font_size_px,
                style.color,
                TextHAlign::Right,
            ),
        );
    }
}
