use super::*;

#[test]
fn missing_and_blank_text_show_placeholder() {
    assert_eq!(opt_text(None), EMPTY);
    assert_eq!(opt_text(Some("  ")), EMPTY);
    assert_eq!(opt_text(Some(" Grade 4 ")), "Grade 4");
}

#[test]
fn timestamps_show_date_and_zone() {
    assert_eq!(date(Some("2024-06-01T08:30:00.000Z")), "2024-06-01");
    assert_eq!(date_time(Some("2024-06-01T02:30:00.000Z")), "2024-06-01 02:30 UTC");
    assert_eq!(date_time(Some("2024-06-01T08:00:00+05:30")), "2024-06-01 08:00 +05:30");
    assert_eq!(date_time(Some("2024-06-01")), "2024-06-01");
    assert_eq!(date(None), EMPTY);
    assert_eq!(date_time(Some("  ")), EMPTY);
}

#[test]
fn date_follows_the_timestamp_offset() {
    assert_eq!(date(Some("2024-06-01T23:30:00-04:00")), "2024-06-01");
}

#[test]
fn unparseable_values_are_shown_whole() {
    assert_eq!(date(Some("today")), "today");
    assert_eq!(date_time(Some("Sat, 01 Jun 2024 08:00:00 GMT")), "Sat, 01 Jun 2024 08:00:00 GMT");
    assert_eq!(date(Some("2024-06-01 later")), "2024-06-01 later");
}

#[test]
fn date_input_is_empty_unless_a_date() {
    assert_eq!(date_input(None), "");
    assert_eq!(date_input(Some("2025-01-31T00:00:00Z")), "2025-01-31");
    assert_eq!(date_input(Some("2025-01-31")), "2025-01-31");
    assert_eq!(date_input(Some("soon")), "");
}

#[test]
fn counts_show_placeholder_when_missing() {
    assert_eq!(opt_count(Some(12)), "12");
    assert_eq!(opt_count(None), EMPTY);
}

#[test]
fn ratings_render_with_one_decimal() {
    assert_eq!(rating(Some(4.34)), "4.3 / 5");
    assert_eq!(rating(None), EMPTY);
}

#[test]
fn stars_clamp_score() {
    assert_eq!(stars(3), "★★★☆☆");
    assert_eq!(stars(0), "★☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}
