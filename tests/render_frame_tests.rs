use scatter_rs::api::{ScatterEngine, ScatterEngineConfig};
use scatter_rs::core::{Viewport, XField};
use scatter_rs::data::{StateRecord, SurveyDataset};
use scatter_rs::interaction::SelectionEvent;
use scatter_rs::render::{
    CirclePrimitive, Color, NullRenderer, RenderFrame, Renderer, SvgRenderer, TextHAlign,
    TextPrimitive,
};

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
        record("AL", 19.3, 13.9),
        record("AK", 11.2, 14.9),
        record("AZ", 18.2, 17.6),
    ])
}

#[test]
fn frame_validation_rejects_bad_geometry() {
    let viewport = Viewport::new(1000, 500);

    let nan_circle = RenderFrame::new(viewport).with_circle(CirclePrimitive::new(
        f64::NAN,
        10.0,
        16.0,
        Color::rgb(0.5, 0.5, 0.5),
    ));
    assert!(nan_circle.validate().is_err());

    let empty_text = RenderFrame::new(viewport).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        12.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Center,
    ));
    assert!(empty_text.validate().is_err());

    let bad_viewport = RenderFrame::new(Viewport::new(0, 500));
    assert!(bad_viewport.validate().is_err());
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_circle(CirclePrimitive::new(
        10.0,
        10.0,
        -1.0,
        Color::rgb(0.1, 0.2, 0.3),
    ));
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.render_calls, 0);
}

#[test]
fn marks_with_nan_cells_are_left_out_of_the_frame() {
    let dataset = SurveyDataset::new(vec![
        record("AL", 19.3, 13.9),
        record("AK", f64::NAN, 14.9),
        record("AZ", 18.2, 17.6),
    ]);
    let mut engine = ScatterEngine::new(
        NullRenderer::default(),
        ScatterEngineConfig::default(),
        dataset,
    )
    .expect("engine init");

    engine.render().expect("render tolerates NaN marks");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_circle_count, 2);
}

#[test]
fn svg_backend_emits_a_complete_document() {
    let mut engine = ScatterEngine::new(
        SvgRenderer::new(),
        ScatterEngineConfig::default(),
        sample_dataset(),
    )
    .expect("engine init");
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    let document = renderer.document().expect("rendered document");

    assert!(document.starts_with("<svg"));
    assert!(document.ends_with("</svg>\n"));
    assert_eq!(document.matches("<circle").count(), 3);
    assert!(document.contains(">AL</text>"));
    assert!(document.contains("In Poverty (%)"));
    assert!(document.contains("Lacks Healthcare (%)"));
    assert!(document.contains("rotate(-90"));
}

#[test]
fn svg_labels_recolor_after_an_axis_switch() {
    let mut engine = ScatterEngine::new(
        SvgRenderer::new(),
        ScatterEngineConfig::default(),
        sample_dataset(),
    )
    .expect("engine init");
    engine
        .handle_event(SelectionEvent::XAxisSelected(XField::Income))
        .expect("switch");
    engine.advance(1000.0);
    engine.render().expect("render");

    let config = ScatterEngineConfig::default();
    let active = config.axis_style.active_label_color;
    let active_css = format!(
        "rgb({},{},{})",
        (active.red * 255.0).round() as u8,
        (active.green * 255.0).round() as u8,
        (active.blue * 255.0).round() as u8
    );

    let document = engine.into_renderer().into_document().expect("document");
    let income_tag = document
        .lines()
        .find(|line| line.contains("Household Income"))
        .expect("income label present");
    assert!(income_tag.contains(&active_css));

    let poverty_tag = document
        .lines()
        .find(|line| line.contains("In Poverty"))
        .expect("poverty label present");
    assert!(!poverty_tag.contains(&active_css));
}
