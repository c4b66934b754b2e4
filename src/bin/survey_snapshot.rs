//! Headless snapshot tool: loads a survey CSV, optionally switches the axis
//! selection, settles the redraw animation and writes the rendered SVG
//! and/or the engine snapshot JSON.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use scatter_rs::api::{ScatterEngine, ScatterEngineConfig};
use scatter_rs::core::{XField, YField};
use scatter_rs::data::load_survey_csv;
use scatter_rs::interaction::SelectionEvent;
use scatter_rs::render::SvgRenderer;

const USAGE: &str =
    "usage: survey_snapshot <data.csv> [--x-field <poverty|age|income>] \
     [--y-field <healthcare|smokes|obesity>] [--svg <out.svg>] [--json <out.json>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    x_field: Option<XField>,
    y_field: Option<YField>,
    svg_output: Option<PathBuf>,
    json_output: Option<PathBuf>,
}

fn main() {
    let _ = scatter_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let dataset = load_survey_csv(&args.input).map_err(|err| err.to_string())?;
    let mut engine = ScatterEngine::new(SvgRenderer::new(), ScatterEngineConfig::default(), dataset)
        .map_err(|err| err.to_string())?;

    if let Some(field) = args.x_field {
        engine
            .handle_event(SelectionEvent::XAxisSelected(field))
            .map_err(|err| err.to_string())?;
    }
    if let Some(field) = args.y_field {
        engine
            .handle_event(SelectionEvent::YAxisSelected(field))
            .map_err(|err| err.to_string())?;
    }

    // Settle any pending transition so the snapshot shows the final layout.
    let duration_ms = engine.config().transition.duration_ms;
    engine.advance(duration_ms);
    engine.render().map_err(|err| err.to_string())?;

    if let Some(path) = &args.json_output {
        let json = engine
            .snapshot()
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }

    let renderer = engine.into_renderer();
    let document = renderer
        .into_document()
        .ok_or_else(|| "no frame was rendered".to_owned())?;
    match &args.svg_output {
        Some(path) => fs::write(path, document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{document}"),
    }

    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(value) if value != "--help" && value != "-h" => PathBuf::from(value),
        _ => return Err(USAGE.to_owned()),
    };

    let mut parsed = CliArgs {
        input,
        x_field: None,
        y_field: None,
        svg_output: None,
        json_output: None,
    };

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--x-field" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --x-field".to_owned())?;
                parsed.x_field = Some(XField::from_str(&value).map_err(|err| err.to_string())?);
            }
            "--y-field" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --y-field".to_owned())?;
                parsed.y_field = Some(YField::from_str(&value).map_err(|err| err.to_string())?);
            }
            "--svg" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --svg".to_owned())?;
                parsed.svg_output = Some(PathBuf::from(value));
            }
            "--json" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --json".to_owned())?;
                parsed.json_output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
