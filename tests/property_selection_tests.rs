use proptest::prelude::*;
use scatter_rs::core::{XField, YField};
use scatter_rs::interaction::{LabelState, SelectionChange, SelectionEvent, SelectionState};

fn arb_event() -> impl Strategy<Value = SelectionEvent> {
    prop_oneof![
        prop::sample::select(XField::ALL.to_vec()).prop_map(SelectionEvent::XAxisSelected),
        prop::sample::select(YField::ALL.to_vec()).prop_map(SelectionEvent::YAxisSelected),
    ]
}

fn active_count<F: Copy>(states: [(F, LabelState); 3]) -> usize {
    states
        .iter()
        .filter(|(_, state)| *state == LabelState::Active)
        .count()
}

proptest! {
    #[test]
    fn exactly_one_label_stays_active_per_axis(
        events in prop::collection::vec(arb_event(), 0..64)
    ) {
        let mut selection = SelectionState::default();
        prop_assert_eq!(active_count(selection.x_label_states()), 1);
        prop_assert_eq!(active_count(selection.y_label_states()), 1);

        for event in events {
            selection.apply(event);
            prop_assert_eq!(active_count(selection.x_label_states()), 1);
            prop_assert_eq!(active_count(selection.y_label_states()), 1);
        }
    }

    #[test]
    fn reducer_reports_unchanged_iff_the_field_is_already_active(
        events in prop::collection::vec(arb_event(), 1..64)
    ) {
        let mut selection = SelectionState::default();
        for event in events {
            let before = selection;
            let change = selection.apply(event);

            let expected_no_op = match event {
                SelectionEvent::XAxisSelected(field) => field == before.x_field(),
                SelectionEvent::YAxisSelected(field) => field == before.y_field(),
            };
            prop_assert_eq!(change.is_unchanged(), expected_no_op);
            if expected_no_op {
                prop_assert_eq!(selection, before);
            } else {
                prop_assert!(!matches!(change, SelectionChange::Unchanged));
                prop_assert_ne!(selection, before);
            }
        }
    }
}
