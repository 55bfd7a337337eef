use censusplot::data::scale::{x_scale, y_scale, LinearScale};
use censusplot::export::ticks::{tick_step, ticks};
use censusplot::{Dataset, Field, Record};
use proptest::prelude::*;

fn dataset_from(values: &[f64]) -> Dataset {
    let records = values
        .iter()
        .enumerate()
        .map(|(i, v)| Record {
            state: format!("State {i}"),
            abbr: format!("S{i}"),
            poverty: *v,
            age: *v,
            income: *v,
            healthcare: *v,
            smokes: *v,
            obesity: *v,
        })
        .collect();
    Dataset::new(records).unwrap()
}

fn field_strategy() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

proptest! {
    #[test]
    fn domain_is_padded_extent(
        values in prop::collection::vec(0.1f64..1.0e6, 1..40),
        field in field_strategy(),
    ) {
        let ds = dataset_from(&values);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let xs = x_scale(&ds, field, 884.0);
        let ys = y_scale(&ds, field, 758.0);
        prop_assert_eq!(xs.domain, (min * 0.8, max * 1.2));
        prop_assert_eq!(ys.domain, (min * 0.8, max * 1.2));
        prop_assert_eq!(xs.range, (0.0, 884.0));
        prop_assert_eq!(ys.range, (758.0, 0.0));
    }

    #[test]
    fn horizontal_increases_vertical_decreases(
        values in prop::collection::vec(0.1f64..1.0e6, 1..40),
        field in field_strategy(),
    ) {
        let ds = dataset_from(&values);
        let xs = x_scale(&ds, field, 884.0);
        let ys = y_scale(&ds, field, 758.0);
        let (d0, d1) = xs.domain;
        prop_assert!(xs.apply(d0) < xs.apply(d1));
        prop_assert!(ys.apply(d0) > ys.apply(d1));

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in sorted.windows(2) {
            prop_assert!(xs.apply(pair[0]) <= xs.apply(pair[1]));
            prop_assert!(ys.apply(pair[0]) >= ys.apply(pair[1]));
        }
    }

    #[test]
    fn data_maps_inside_the_range(
        values in prop::collection::vec(0.1f64..1.0e6, 1..40),
        field in field_strategy(),
    ) {
        let ds = dataset_from(&values);
        let xs = x_scale(&ds, field, 884.0);
        for v in &values {
            let px = xs.apply(*v);
            prop_assert!((0.0..=884.0).contains(&px), "{} mapped to {}", v, px);
        }
    }

    #[test]
    fn ticks_lie_in_domain_and_are_evenly_spaced(
        lo in 0.1f64..1.0e5,
        span in 0.5f64..1.0e5,
    ) {
        let s = LinearScale::new((lo, lo + span), (0.0, 884.0));
        let marks = ticks(&s, 10);
        let step = tick_step(&s, 10).unwrap();
        prop_assert!(!marks.is_empty());
        for t in &marks {
            prop_assert!(*t >= lo - step * 1e-9 && *t <= lo + span + step * 1e-9);
        }
        for pair in marks.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= step * 1e-6);
        }
    }
}

#[test]
fn single_record_has_nonzero_domain() {
    let ds = dataset_from(&[10.0]);
    let xs = x_scale(&ds, Field::Poverty, 884.0);
    assert_eq!(xs.domain, (8.0, 12.0));
    assert_eq!(xs.apply(10.0), 442.0);
}
