use serde::{Deserialize, Serialize};

use crate::core::{XField, YField};

/// Highlight state of one axis-choice label.
///
/// Per axis, exactly one label is `Active` and the remaining two are
/// `Inactive` at all times, including the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelState {
    Active,
    Inactive,
}

/// A label click, decoupled from any concrete event-dispatch mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    XAxisSelected(XField),
    YAxisSelected(YField),
}

/// Outcome of applying one [`SelectionEvent`].
///
/// `Unchanged` is the no-op guard: clicking the already-active label must
/// trigger no scale rebuild and no animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionChange {
    Unchanged,
    XChanged { from: XField, to: XField },
    YChanged { from: YField, to: YField },
}

impl SelectionChange {
    #[must_use]
    pub fn is_unchanged(self) -> bool {
        matches!(self, SelectionChange::Unchanged)
    }
}

/// Active field per axis; the only mutable chart state outside the engine's
/// animation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    x_field: XField,
    y_field: YField,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            x_field: XField::Poverty,
            y_field: YField::Healthcare,
        }
    }
}

impl SelectionState {
    #[must_use]
    pub fn new(x_field: XField, y_field: YField) -> Self {
        Self { x_field, y_field }
    }

    #[must_use]
    pub fn x_field(self) -> XField {
        self.x_field
    }

    #[must_use]
    pub fn y_field(self) -> YField {
        self.y_field
    }

    /// Reducer for label clicks.
    ///
    /// An event naming the already-active field leaves the state untouched
    /// and reports [`SelectionChange::Unchanged`].
    pub fn apply(&mut self, event: SelectionEvent) -> SelectionChange {
        match event {
            SelectionEvent::XAxisSelected(candidate) => {
                if candidate == self.x_field {
                    return SelectionChange::Unchanged;
                }
                let from = self.x_field;
                self.x_field = candidate;
                SelectionChange::XChanged {
                    from,
                    to: candidate,
                }
            }
            SelectionEvent::YAxisSelected(candidate) => {
                if candidate == self.y_field {
                    return SelectionChange::Unchanged;
                }
                let from = self.y_field;
                self.y_field = candidate;
                SelectionChange::YChanged {
                    from,
                    to: candidate,
                }
            }
        }
    }

    /// Highlight flags for the three horizontal-axis labels, in display order.
    #[must_use]
    pub fn x_label_states(self) -> [(XField, LabelState); 3] {
        XField::ALL.map(|field| {
            let state = if field == self.x_field {
                LabelState::Active
            } else {
                LabelState::Inactive
            };
            (field, state)
        })
    }

    /// Highlight flags for the three vertical-axis labels, in display order.
    #[must_use]
    pub fn y_label_states(self) -> [(YField, LabelState); 3] {
        YField::ALL.map(|field| {
            let state = if field == self.y_field {
                LabelState::Active
            } else {
                LabelState::Inactive
            };
            (field, state)
        })
    }
}
