use censusplot::data::tooltip::tooltip_text;
use censusplot::{Field, Record, Selection};

#[test]
fn label_table_is_total() {
    let expected = [
        (Field::Poverty, "Poverty:"),
        (Field::Age, "Age:"),
        (Field::Income, "Income:"),
        (Field::Healthcare, "Healthcare:"),
        (Field::Smokes, "Smokers:"),
        (Field::Obesity, "Obesity:"),
    ];
    for (field, label) in expected {
        assert_eq!(field.tooltip_label(), label);
        assert!(!field.axis_title().is_empty());
    }
}

#[test]
fn every_selection_produces_labelled_lines() {
    let r = Record {
        state: "Ohio".into(),
        abbr: "OH".into(),
        poverty: 15.8,
        age: 39.4,
        income: 49429.0,
        healthcare: 10.1,
        smokes: 23.4,
        obesity: 32.6,
    };
    for sel in Selection::all() {
        let t = tooltip_text(&r, sel);
        assert_eq!(t.title, "Ohio");
        assert!(t.x_line.starts_with(sel.x_field().tooltip_label()));
        assert!(t.y_line.starts_with(sel.y_field().tooltip_label()));
        assert!(t.y_line.ends_with('%'));
        assert_eq!(t.x_line.ends_with('%'), sel.x_field() == Field::Poverty);
    }
}
