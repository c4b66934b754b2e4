use crate::core::{DomainPadding, LinearScale, PlotArea, XField, YField};
use crate::data::SurveyDataset;
use crate::error::ScatterResult;

/// Builds the horizontal scale for a field choice.
///
/// The domain is the field's padded extent; the range is the plot-local
/// `[0, width]` interval so low values land at the left edge. Pure function
/// of its inputs; the previous scale is simply discarded by the caller.
pub fn build_x_scale(
    dataset: &SurveyDataset,
    field: XField,
    padding: DomainPadding,
    plot: PlotArea,
) -> ScatterResult<LinearScale> {
    let extent = dataset.x_extent(field)?;
    LinearScale::from_padded_extent(extent.min, extent.max, padding, plot.x_pixel_range())
}

/// Builds the vertical scale for a field choice.
///
/// Identical to [`build_x_scale`] except for the inverted `[height, 0]`
/// range: screen Y grows downward, so low values map to high pixels.
pub fn build_y_scale(
    dataset: &SurveyDataset,
    field: YField,
    padding: DomainPadding,
    plot: PlotArea,
) -> ScatterResult<LinearScale> {
    let extent = dataset.y_extent(field)?;
    LinearScale::from_padded_extent(extent.min, extent.max, padding, plot.y_pixel_range())
}
