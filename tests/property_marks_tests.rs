use proptest::prelude::*;
use scatter_rs::api::project_marks;
use scatter_rs::core::{LinearScale, XField, YField};
use scatter_rs::data::{StateRecord, SurveyDataset};

fn arb_record() -> impl Strategy<Value = StateRecord> {
    (
        "[A-Z]{2}",
        0.1f64..100.0,
        20.0f64..60.0,
        10_000.0f64..100_000.0,
        0.1f64..40.0,
        10.0f64..45.0,
        5.0f64..35.0,
    )
        .prop_map(
            |(abbr, poverty, age, income, healthcare, obesity, smokes)| StateRecord {
                abbr,
                poverty,
                age,
                income,
                healthcare,
                obesity,
                smokes,
            },
        )
}

proptest! {
    #[test]
    fn projection_is_idempotent_for_any_dataset(
        records in prop::collection::vec(arb_record(), 1..40)
    ) {
        let dataset = SurveyDataset::new(records);
        let x_scale = LinearScale::new((0.0, 120.0), (0.0, 840.0)).expect("x scale");
        let y_scale = LinearScale::new((0.0, 50.0), (390.0, 0.0)).expect("y scale");

        let first = project_marks(
            &dataset,
            x_scale,
            XField::Poverty,
            y_scale,
            YField::Healthcare,
            0.4,
        );
        let second = project_marks(
            &dataset,
            x_scale,
            XField::Poverty,
            y_scale,
            YField::Healthcare,
            0.4,
        );

        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_mark_mirrors_its_record(
        records in prop::collection::vec(arb_record(), 1..40)
    ) {
        let dataset = SurveyDataset::new(records);
        let x_scale = LinearScale::new((0.0, 120.0), (0.0, 840.0)).expect("x scale");
        let y_scale = LinearScale::new((0.0, 50.0), (390.0, 0.0)).expect("y scale");

        let marks = project_marks(
            &dataset,
            x_scale,
            XField::Age,
            y_scale,
            YField::Smokes,
            0.4,
        );

        prop_assert_eq!(marks.len(), dataset.len());
        for (mark, record) in marks.iter().zip(dataset.records()) {
            prop_assert_eq!(&mark.abbr, &record.abbr);
            prop_assert_eq!(mark.x, x_scale.value_to_pixel(record.age));
            prop_assert_eq!(mark.y, y_scale.value_to_pixel(record.smokes));
            prop_assert_eq!(mark.label_x, mark.x);
        }
    }
}
