use super::*;

fn rating(score: u8) -> Rating {
    serde_json::from_value(serde_json::json!({ "_id": "r1", "score": score, "driverName": "Suresh" }))
        .expect("rating")
}

#[test]
fn score_shows_stars_and_number() {
    assert_eq!(score(&rating(4)), Cell::text("★★★★☆ 4"));
}

#[test]
fn out_of_range_score_is_clamped() {
    assert_eq!(score(&rating(9)), Cell::text("★★★★★ 5"));
}
