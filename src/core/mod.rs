pub mod field;
pub mod scale;
pub mod transition;
pub mod types;

pub use field::{Axis, XField, YField};
pub use scale::{DomainPadding, LinearScale};
pub use transition::{TransitionConfig, TransitionProgress, ease_cubic_in_out, lerp};
pub use types::{Margins, PlotArea, Viewport};
