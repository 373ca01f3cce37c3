use super::*;

fn student() -> Student {
    serde_json::from_value(serde_json::json!({
        "_id": "s1",
        "name": "Kabir Joshi",
        "grade": "5",
        "parentId": "p1",
        "schoolId": "sc1",
        "schoolName": "Green Valley School",
        "isActive": true
    }))
    .expect("student")
}

#[test]
fn joined_names_win_over_ids() {
    let s = student();
    assert_eq!(named(s.school_name.as_deref(), s.school_id.as_deref()), Cell::text("Green Valley School"));
    assert_eq!(named(s.parent_name.as_deref(), s.parent_id.as_deref()), Cell::text("p1"));
    assert_eq!(named(None, None), Cell::Empty);
}

#[test]
fn prefill_round_trips() {
    let draft = to_draft(&to_values(&student())).expect("draft");
    assert_eq!(draft.parent_id, "p1");
    assert_eq!(draft.school_id, "sc1");
    assert_eq!(draft.grade.as_deref(), Some("5"));
    assert_eq!(draft.pickup_address, None);
}

#[test]
fn parent_and_school_are_required() {
    let errors = crate::util::form::validate(FIELDS, &values_from([("name", "Kabir".to_owned())]));
    assert!(errors.contains_key("parentId"));
    assert!(errors.contains_key("schoolId"));
    assert!(!errors.contains_key("grade"));
}
