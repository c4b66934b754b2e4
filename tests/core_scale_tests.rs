use approx::assert_relative_eq;
use scatter_rs::api::{build_x_scale, build_y_scale};
use scatter_rs::core::{DomainPadding, LinearScale, Margins, PlotArea, Viewport, XField, YField};
use scatter_rs::data::{StateRecord, SurveyDataset};
use scatter_rs::error::ScatterError;

fn record(abbr: &str, poverty: f64, healthcare: f64) -> StateRecord {
    StateRecord {
        abbr: abbr.to_owned(),
        poverty,
        age: 35.0,
        income: 50_000.0,
        healthcare,
        obesity: 30.0,
        smokes: 18.0,
    }
}

fn sample_dataset() -> SurveyDataset {
    SurveyDataset::new(vec![
        record("AL", 10.0, 12.0),
        record("AK", 20.0, 9.0),
        record("AZ", 30.0, 15.0),
    ])
}

fn default_plot() -> PlotArea {
    PlotArea::carve(
        Viewport::new(1000, 500),
        Margins::new(10.0, 60.0, 100.0, 100.0),
    )
    .expect("default plot area")
}

#[test]
fn default_margins_leave_840_by_390_interior() {
    let plot = default_plot();
    assert_eq!(plot.width, 840.0);
    assert_eq!(plot.height, 390.0);
    assert_eq!(plot.x_pixel_range(), (0.0, 840.0));
    assert_eq!(plot.y_pixel_range(), (390.0, 0.0));
}

#[test]
fn x_domain_uses_exact_padding_factors() {
    let scale = build_x_scale(
        &sample_dataset(),
        XField::Poverty,
        DomainPadding::default(),
        default_plot(),
    )
    .expect("x scale");

    let (low, high) = scale.domain();
    assert_eq!(low, 0.75 * 10.0);
    assert_eq!(high, 1.1 * 30.0);
}

#[test]
fn x_scale_maps_values_linearly_into_pixel_range() {
    let scale = build_x_scale(
        &sample_dataset(),
        XField::Poverty,
        DomainPadding::default(),
        default_plot(),
    )
    .expect("x scale");

    let (low, high) = scale.domain();
    let expected = (20.0 - low) / (high - low) * 840.0;
    assert_relative_eq!(scale.value_to_pixel(20.0), expected, epsilon = 1e-9);
    assert_relative_eq!(scale.value_to_pixel(low), 0.0, epsilon = 1e-9);
    assert_relative_eq!(scale.value_to_pixel(high), 840.0, epsilon = 1e-9);
}

#[test]
fn y_scale_is_inverted() {
    let scale = build_y_scale(
        &sample_dataset(),
        YField::Healthcare,
        DomainPadding::default(),
        default_plot(),
    )
    .expect("y scale");

    let (low, high) = scale.domain();
    assert_relative_eq!(scale.value_to_pixel(low), 390.0, epsilon = 1e-9);
    assert_relative_eq!(scale.value_to_pixel(high), 0.0, epsilon = 1e-9);
    // Larger value, smaller pixel.
    assert!(scale.value_to_pixel(12.0) < scale.value_to_pixel(10.0));
}

#[test]
fn pixel_round_trip_recovers_value() {
    let scale = LinearScale::new((7.5, 33.0), (0.0, 840.0)).expect("scale");
    let px = scale.value_to_pixel(20.0);
    assert_relative_eq!(scale.pixel_to_value(px), 20.0, epsilon = 1e-9);
}

#[test]
fn empty_dataset_is_rejected() {
    let dataset = SurveyDataset::new(Vec::new());
    let result = build_x_scale(
        &dataset,
        XField::Poverty,
        DomainPadding::default(),
        default_plot(),
    );
    assert!(matches!(result, Err(ScatterError::EmptyDataset)));
}

#[test]
fn all_nan_field_is_rejected_like_empty_data() {
    let dataset = SurveyDataset::new(vec![record("AL", f64::NAN, 10.0)]);
    let result = build_x_scale(
        &dataset,
        XField::Poverty,
        DomainPadding::default(),
        default_plot(),
    );
    assert!(matches!(result, Err(ScatterError::EmptyDataset)));
}

#[test]
fn nan_cells_are_skipped_when_computing_extent() {
    let dataset = SurveyDataset::new(vec![
        record("AL", 10.0, 12.0),
        record("AK", f64::NAN, 9.0),
        record("AZ", 30.0, 15.0),
    ]);

    let scale = build_x_scale(
        &dataset,
        XField::Poverty,
        DomainPadding::default(),
        default_plot(),
    )
    .expect("x scale");
    assert_eq!(scale.domain(), (0.75 * 10.0, 1.1 * 30.0));
}

#[test]
fn unknown_field_name_fails_to_parse() {
    let result = "obesity".parse::<XField>();
    assert!(matches!(
        result,
        Err(ScatterError::UnknownField { ref name }) if name == "obesity"
    ));

    let result = "wat".parse::<YField>();
    assert!(matches!(result, Err(ScatterError::UnknownField { .. })));
}

#[test]
fn known_field_names_parse_to_their_variants() {
    assert_eq!("income".parse::<XField>().expect("field"), XField::Income);
    assert_eq!("smokes".parse::<YField>().expect("field"), YField::Smokes);
}

#[test]
fn with_domain_keeps_pixel_range() {
    let scale = LinearScale::new((0.0, 10.0), (390.0, 0.0)).expect("scale");
    let rebuilt = scale.with_domain((5.0, 15.0)).expect("rebuilt scale");
    assert_eq!(rebuilt.range(), (390.0, 0.0));
    assert_eq!(rebuilt.domain(), (5.0, 15.0));
}

#[test]
fn degenerate_domain_is_rejected() {
    assert!(LinearScale::new((1.0, 1.0), (0.0, 840.0)).is_err());
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 840.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (100.0, 100.0)).is_err());
}

#[test]
fn non_finite_value_propagates_through_mapping() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 840.0)).expect("scale");
    assert!(scale.value_to_pixel(f64::NAN).is_nan());
}
