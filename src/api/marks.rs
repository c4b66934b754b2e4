use crate::core::{LinearScale, XField, YField};
use crate::data::SurveyDataset;

/// Projected screen geometry for one record under the current scales.
///
/// Derived data: recomputed wholesale on every redraw, holds no state of its
/// own. Positions are plot-local; scene building adds the plot origin.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkPoint {
    pub abbr: String,
    pub x: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// Recomputes every record's circle and label position.
///
/// The label shares the circle's x and uses the y value minus `label_y_nudge`
/// (in data space, before scaling) so the text sits centered on the circle.
/// Output order follows dataset order, which keeps animation interpolation
/// pairable by index across redraws. Idempotent for identical inputs;
/// non-finite values project to non-finite positions.
#[must_use]
pub fn project_marks(
    dataset: &SurveyDataset,
    x_scale: LinearScale,
    x_field: XField,
    y_scale: LinearScale,
    y_field: YField,
    label_y_nudge: f64,
) -> Vec<MarkPoint> {
    dataset
        .records()
        .iter()
        .map(|record| {
            let x_value = record.x_value(x_field);
            let y_value = record.y_value(y_field);
            let x = x_scale.value_to_pixel(x_value);
            MarkPoint {
                abbr: record.abbr.clone(),
                x,
                y: y_scale.value_to_pixel(y_value),
                label_x: x,
                label_y: y_scale.value_to_pixel(y_value - label_y_nudge),
            }
        })
        .collect()
}
