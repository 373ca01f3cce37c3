use super::*;

#[test]
fn blank_optional_fields_are_omitted_from_payload() {
    let values = values_from([
        ("name", "Anita Rao".to_owned()),
        ("phone", "9123456780".to_owned()),
        ("email", "  ".to_owned()),
        ("address", String::new()),
        ("isActive", "false".to_owned()),
    ]);
    let draft = to_draft(&values).expect("draft");
    let body = serde_json::to_value(&draft).expect("json");
    assert_eq!(body, serde_json::json!({ "name": "Anita Rao", "phone": "9123456780", "isActive": false }));
}

#[test]
fn prefill_copies_record() {
    let parent: Parent = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Anita Rao",
        "phone": "9123456780",
        "address": "12 MG Road",
        "childrenCount": 2
    }))
    .expect("parent");
    let values = to_values(&parent);
    assert_eq!(values["address"], "12 MG Road");
    assert_eq!(values["isActive"], "true");
    assert_eq!(values["email"], "");
}
