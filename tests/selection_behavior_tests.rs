use scatter_rs::core::{XField, YField};
use scatter_rs::interaction::{LabelState, SelectionChange, SelectionEvent, SelectionState};

fn assert_exactly_one_active(selection: SelectionState) {
    let x_active = selection
        .x_label_states()
        .iter()
        .filter(|(_, state)| *state == LabelState::Active)
        .count();
    let y_active = selection
        .y_label_states()
        .iter()
        .filter(|(_, state)| *state == LabelState::Active)
        .count();
    assert_eq!(x_active, 1);
    assert_eq!(y_active, 1);
}

#[test]
fn initial_state_is_poverty_and_healthcare() {
    let selection = SelectionState::default();
    assert_eq!(selection.x_field(), XField::Poverty);
    assert_eq!(selection.y_field(), YField::Healthcare);
    assert_exactly_one_active(selection);
}

#[test]
fn clicking_age_while_poverty_is_active_switches_the_x_axis() {
    let mut selection = SelectionState::default();
    let change = selection.apply(SelectionEvent::XAxisSelected(XField::Age));

    assert_eq!(
        change,
        SelectionChange::XChanged {
            from: XField::Poverty,
            to: XField::Age,
        }
    );
    assert_eq!(selection.x_field(), XField::Age);

    let states = selection.x_label_states();
    assert_eq!(states[0], (XField::Poverty, LabelState::Inactive));
    assert_eq!(states[1], (XField::Age, LabelState::Active));
    assert_eq!(states[2], (XField::Income, LabelState::Inactive));
}

#[test]
fn clicking_the_active_field_is_a_no_op() {
    let mut selection = SelectionState::default();
    let change = selection.apply(SelectionEvent::XAxisSelected(XField::Poverty));

    assert_eq!(change, SelectionChange::Unchanged);
    assert!(change.is_unchanged());
    assert_eq!(selection, SelectionState::default());
}

#[test]
fn axes_switch_independently() {
    let mut selection = SelectionState::default();
    selection.apply(SelectionEvent::YAxisSelected(YField::Obesity));

    assert_eq!(selection.x_field(), XField::Poverty);
    assert_eq!(selection.y_field(), YField::Obesity);

    let states = selection.y_label_states();
    assert_eq!(states[0], (YField::Healthcare, LabelState::Inactive));
    assert_eq!(states[1], (YField::Smokes, LabelState::Inactive));
    assert_eq!(states[2], (YField::Obesity, LabelState::Active));
}

#[test]
fn exactly_one_label_is_active_after_every_transition() {
    let events = [
        SelectionEvent::XAxisSelected(XField::Age),
        SelectionEvent::XAxisSelected(XField::Age),
        SelectionEvent::YAxisSelected(YField::Smokes),
        SelectionEvent::XAxisSelected(XField::Income),
        SelectionEvent::YAxisSelected(YField::Healthcare),
        SelectionEvent::XAxisSelected(XField::Poverty),
        SelectionEvent::YAxisSelected(YField::Obesity),
        SelectionEvent::YAxisSelected(YField::Obesity),
    ];

    let mut selection = SelectionState::default();
    assert_exactly_one_active(selection);
    for event in events {
        selection.apply(event);
        assert_exactly_one_active(selection);
    }
}

#[test]
fn change_reports_both_endpoints_of_the_switch() {
    let mut selection = SelectionState::new(XField::Income, YField::Smokes);
    let change = selection.apply(SelectionEvent::YAxisSelected(YField::Healthcare));
    assert_eq!(
        change,
        SelectionChange::YChanged {
            from: YField::Smokes,
            to: YField::Healthcare,
        }
    );
}
