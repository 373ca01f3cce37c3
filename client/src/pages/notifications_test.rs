use super::*;
use crate::util::form::{initial_values, values_from};

#[test]
fn draft_carries_audience() {
    let values = values_from([
        ("title", "School closed".to_owned()),
        ("message", "No pickups on Monday".to_owned()),
        ("audience", "parents".to_owned()),
    ]);
    let draft = to_draft(&values).expect("draft");
    assert_eq!(draft.audience, Audience::Parents);
    let body = serde_json::to_value(&draft).expect("json");
    assert_eq!(body["audience"], "parents");
}

#[test]
fn new_form_defaults_to_everyone() {
    let values = initial_values(FIELDS);
    assert_eq!(values["audience"], "all");
}

#[test]
fn unknown_audience_is_rejected() {
    let values = values_from([("title", "t".to_owned()), ("message", "m".to_owned()), ("audience", "admins".to_owned())]);
    assert_eq!(to_draft(&values), Err("Choose who receives the notification".to_owned()));
}
