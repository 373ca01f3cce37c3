use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    name: &'static str,
    city: Option<&'static str>,
    active: bool,
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("Name", |r: &Row| Cell::text(r.name)),
        Column::new("City", |r: &Row| Cell::opt(r.city)),
        Column::new("Status", |r: &Row| {
            if r.active { Cell::Badge("Active", Tone::Positive) } else { Cell::Badge("Inactive", Tone::Neutral) }
        }),
    ]
}

fn rows() -> Vec<Row> {
    vec![
        Row { name: "Green Valley School", city: Some("Pune"), active: true },
        Row { name: "Hillside Academy", city: None, active: false },
        Row { name: "Riverside Public", city: Some("Nashik"), active: true },
    ]
}

#[test]
fn blank_query_keeps_every_row() {
    assert_eq!(filter_rows(&columns(), &rows(), "   ").len(), 3);
}

#[test]
fn query_matches_any_column_case_insensitively() {
    let matched = filter_rows(&columns(), &rows(), "PUNE");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Green Valley School");
}

#[test]
fn query_matches_badge_labels() {
    let matched = filter_rows(&columns(), &rows(), "inactive");
    assert_eq!(matched, vec![rows()[1].clone()]);
}

#[test]
fn empty_rows_filter_to_empty() {
    assert!(filter_rows(&columns(), &[], "anything").is_empty());
    assert!(filter_rows::<Row>(&columns(), &[], "").is_empty());
}

#[test]
fn missing_optional_values_become_empty_cells() {
    assert_eq!(Cell::opt(None), Cell::Empty);
    assert_eq!(Cell::opt(Some(" ")), Cell::Empty);
    assert_eq!(Cell::opt(Some("Pune")), Cell::text("Pune"));
    assert_eq!(Cell::Empty.search_text(), "");
}

#[test]
fn count_label_mentions_filtering() {
    assert_eq!(count_label(3, 3), "3 records");
    assert_eq!(count_label(1, 3), "1 of 3 records");
    assert_eq!(count_label(0, 0), "0 records");
}

#[test]
fn count_label_is_singular_for_one_record() {
    assert_eq!(count_label(1, 1), "1 record");
    assert_eq!(count_label(0, 1), "0 of 1 record");
}

#[test]
fn column_count_includes_link_and_actions() {
    let table = Table::new(columns()).with_detail(|r: &Row| format!("/schools/{}", r.name));
    assert_eq!(table.column_count(), 4);
}

#[test]
fn tone_classes_are_distinct() {
    let tones = [Tone::Neutral, Tone::Info, Tone::Positive, Tone::Warning, Tone::Negative];
    for (i, a) in tones.iter().enumerate() {
        for b in &tones[i + 1..] {
            assert_ne!(a.class(), b.class());
        }
    }
}
