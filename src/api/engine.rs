use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{LinearScale, PlotArea, TransitionProgress, lerp};
use crate::data::SurveyDataset;
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::{SelectionChange, SelectionEvent, SelectionState};
use crate::render::Renderer;

use super::frame_builder::{FrameInputs, build_frame};
use super::{MarkPoint, ScatterEngineConfig, build_x_scale, build_y_scale, project_marks};

/// Cheap counters for observing the redraw cycle.
///
/// The same-field no-op guard is observable through these: an ignored
/// event bumps `events_ignored` and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedrawStats {
    pub scale_builds: u64,
    pub mark_updates: u64,
    pub render_passes: u64,
    pub events_ignored: u64,
}

/// One in-flight animated redraw.
///
/// Holds the state the chart is animating *from*; targets live on the engine.
/// When a new selection lands mid-animation the snapshot is retaken from the
/// current interpolated values, so the new transition restarts from wherever
/// the chart visually is.
#[derive(Debug, Clone)]
struct ActiveTransition {
    progress: TransitionProgress,
    from_x_domain: (f64, f64),
    from_y_domain: (f64, f64),
    from_marks: Vec<MarkPoint>,
}

/// Main orchestration facade consumed by host applications.
///
/// `ScatterEngine` owns the dataset, axis selection, scales and animation
/// clock, and hands materialized frames to the renderer. Drive it with
/// `handle_event` for label clicks, `advance` for animation time and
/// `render` for draw passes; everything runs on the caller's single thread.
pub struct ScatterEngine<R: Renderer> {
    renderer: R,
    config: ScatterEngineConfig,
    plot: PlotArea,
    dataset: SurveyDataset,
    selection: SelectionState,
    x_scale: LinearScale,
    y_scale: LinearScale,
    marks: Vec<MarkPoint>,
    transition: Option<ActiveTransition>,
    stats: RedrawStats,
}

impl<R: Renderer> ScatterEngine<R> {
    /// Builds the engine and performs the initial (unanimated) layout.
    pub fn new(
        renderer: R,
        config: ScatterEngineConfig,
        dataset: SurveyDataset,
    ) -> ScatterResult<Self> {
        let config = config.validate()?;
        if dataset.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }

        let plot = PlotArea::carve(config.viewport, config.margins)?;
        let selection = SelectionState::default();
        let x_scale = build_x_scale(&dataset, selection.x_field(), config.domain_padding, plot)?;
        let y_scale = build_y_scale(&dataset, selection.y_field(), config.domain_padding, plot)?;
        let marks = project_marks(
            &dataset,
            x_scale,
            selection.x_field(),
            y_scale,
            selection.y_field(),
            config.mark_style.label_y_nudge,
        );

        debug!(
            records = dataset.len(),
            x_field = %selection.x_field(),
            y_field = %selection.y_field(),
            "scatter engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            plot,
            dataset,
            selection,
            x_scale,
            y_scale,
            marks,
            transition: None,
            stats: RedrawStats {
                scale_builds: 2,
                mark_updates: 1,
                render_passes: 0,
                events_ignored: 0,
            },
        })
    }

    /// Applies one label click.
    ///
    /// A click on the already-active field is a guarded no-op: no scale is
    /// rebuilt, no marks are reprojected, no animation starts. Otherwise the
    /// changed axis's scale is rebuilt, marks are retargeted and a 1000 ms
    /// (configurable) transition begins from the current visual state.
    pub fn handle_event(&mut self, event: SelectionEvent) -> ScatterResult<SelectionChange> {
        let previous = self.selection;
        let change = self.selection.apply(event);
        if change.is_unchanged() {
            trace!(?event, "selection event ignored, field already active");
            self.stats.events_ignored += 1;
            return Ok(SelectionChange::Unchanged);
        }

        // Snapshot the possibly mid-animation state before retargeting.
        let from_x_domain = self.current_x_domain();
        let from_y_domain = self.current_y_domain();
        let from_marks = self.current_marks();

        if let Err(err) = self.rebuild_changed_scale(change) {
            self.selection = previous;
            return Err(err);
        }

        self.marks = project_marks(
            &self.dataset,
            self.x_scale,
            self.selection.x_field(),
            self.y_scale,
            self.selection.y_field(),
            self.config.mark_style.label_y_nudge,
        );
        self.stats.mark_updates += 1;
        self.transition = Some(ActiveTransition {
            progress: TransitionProgress::new(self.config.transition),
            from_x_domain,
            from_y_domain,
            from_marks,
        });

        debug!(
            x_field = %self.selection.x_field(),
            y_field = %self.selection.y_field(),
            "axis selection changed, redraw transition started"
        );
        Ok(change)
    }

    /// Advances the animation clock by `delta_ms`.
    ///
    /// Safe to call while idle; a completed transition is dropped and the
    /// chart settles on its target geometry.
    pub fn advance(&mut self, delta_ms: f64) {
        if let Some(transition) = &mut self.transition {
            transition.progress.step(delta_ms);
            if transition.progress.is_complete() {
                trace!("redraw transition complete");
                self.transition = None;
            }
        }
    }

    /// Materializes the current (possibly mid-animation) scene and hands it
    /// to the renderer.
    pub fn render(&mut self) -> ScatterResult<()> {
        let marks = self.current_marks();
        let frame = build_frame(&FrameInputs {
            viewport: self.config.viewport,
            plot: self.plot,
            x_scale: self.current_x_scale(),
            y_scale: self.current_y_scale(),
            marks: &marks,
            selection: self.selection,
            mark_style: self.config.mark_style,
            axis_style: self.config.axis_style,
        });
        self.renderer.render(&frame)?;
        self.stats.render_passes += 1;
        Ok(())
    }

    fn rebuild_changed_scale(&mut self, change: SelectionChange) -> ScatterResult<()> {
        match change {
            SelectionChange::XChanged { .. } => {
                self.x_scale = build_x_scale(
                    &self.dataset,
                    self.selection.x_field(),
                    self.config.domain_padding,
                    self.plot,
                )?;
                self.stats.scale_builds += 1;
            }
            SelectionChange::YChanged { .. } => {
                self.y_scale = build_y_scale(
                    &self.dataset,
                    self.selection.y_field(),
                    self.config.domain_padding,
                    self.plot,
                )?;
                self.stats.scale_builds += 1;
            }
            SelectionChange::Unchanged => {}
        }
        Ok(())
    }

    /// Target horizontal scale (where the animation is heading).
    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    /// Target vertical scale (where the animation is heading).
    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    /// Horizontal domain as currently displayed, mid-animation included.
    #[must_use]
    pub fn current_x_domain(&self) -> (f64, f64) {
        match &self.transition {
            Some(transition) => lerp_domain(
                transition.from_x_domain,
                self.x_scale.domain(),
                transition.progress.eased(),
            ),
            None => self.x_scale.domain(),
        }
    }

    /// Vertical domain as currently displayed, mid-animation included.
    #[must_use]
    pub fn current_y_domain(&self) -> (f64, f64) {
        match &self.transition {
            Some(transition) => lerp_domain(
                transition.from_y_domain,
                self.y_scale.domain(),
                transition.progress.eased(),
            ),
            None => self.y_scale.domain(),
        }
    }

    fn current_x_scale(&self) -> LinearScale {
        self.x_scale
            .with_domain(self.current_x_domain())
            .unwrap_or(self.x_scale)
    }

    fn current_y_scale(&self) -> LinearScale {
        self.y_scale
            .with_domain(self.current_y_domain())
            .unwrap_or(self.y_scale)
    }

    /// Target mark positions (end of the animation).
    #[must_use]
    pub fn marks(&self) -> &[MarkPoint] {
        &self.marks
    }

    /// Mark positions as currently displayed, interpolated while animating.
    ///
    /// All marks share the one animation clock, so every circle and label
    /// moves concurrently over the same window.
    #[must_use]
    pub fn current_marks(&self) -> Vec<MarkPoint> {
        let Some(transition) = &self.transition else {
            return self.marks.clone();
        };

        let t = transition.progress.eased();
        self.marks
            .iter()
            .enumerate()
            .map(|(index, target)| match transition.from_marks.get(index) {
                Some(from) => MarkPoint {
                    abbr: target.abbr.clone(),
                    x: lerp(from.x, target.x, t),
                    y: lerp(from.y, target.y, t),
                    label_x: lerp(from.label_x, target.label_x, t),
                    label_y: lerp(from.label_y, target.label_y, t),
                },
                None => target.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn dataset(&self) -> &SurveyDataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &ScatterEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn stats(&self) -> RedrawStats {
        self.stats
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn lerp_domain(from: (f64, f64), to: (f64, f64), t: f64) -> (f64, f64) {
    (lerp(from.0, to.0, t), lerp(from.1, to.1, t))
}
