use super::*;

fn form(role: &str, password: &str) -> FormValues {
    values_from([
        ("name", " Meera Shah ".to_owned()),
        ("email", "meera@example.com".to_owned()),
        ("phone", String::new()),
        ("role", role.to_owned()),
        ("password", password.to_owned()),
    ])
}

#[test]
fn draft_trims_and_parses_role() {
    let draft = to_draft(&form("school_admin", "s3cret!")).expect("draft");
    assert_eq!(draft.name, "Meera Shah");
    assert_eq!(draft.role, Role::SchoolAdmin);
    assert_eq!(draft.phone, None);
    assert_eq!(draft.password.as_deref(), Some("s3cret!"));
}

#[test]
fn blank_password_is_left_out_of_edits() {
    let draft = to_draft(&form("admin", "")).expect("draft");
    assert_eq!(draft.password, None);
    let body = serde_json::to_value(&draft).expect("json");
    assert!(body.get("password").is_none());
}

#[test]
fn unknown_role_is_rejected() {
    assert_eq!(to_draft(&form("root", "x")), Err("Choose a role".to_owned()));
}

#[test]
fn edit_prefill_round_trips_through_draft() {
    let admin = Admin {
        id: "a1".to_owned(),
        name: "Meera Shah".to_owned(),
        email: "meera@example.com".to_owned(),
        phone: Some("9876543210".to_owned()),
        role: Role::Support,
        is_active: true,
        last_login: None,
        created_at: None,
    };
    let draft = to_draft(&to_values(&admin)).expect("draft");
    assert_eq!(draft.role, Role::Support);
    assert_eq!(draft.phone.as_deref(), Some("9876543210"));
    assert_eq!(draft.password, None);
}

#[test]
fn role_options_cover_every_grantable_role() {
    for role in Role::ALL {
        assert!(ROLE_OPTIONS.iter().any(|(value, _)| *value == role.as_str()));
    }
}

#[test]
fn edit_form_does_not_require_password() {
    let values = to_values(&Admin {
        id: "a1".to_owned(),
        name: "A".to_owned(),
        email: "a@example.com".to_owned(),
        phone: None,
        role: Role::Admin,
        is_active: false,
        last_login: None,
        created_at: None,
    });
    assert!(crate::util::form::validate(EDIT_FIELDS, &values).is_empty());
    assert!(crate::util::form::validate(CREATE_FIELDS, &values).contains_key("password"));
}
