use super::*;

fn labels(role: Option<Role>) -> Vec<&'static str> {
    visible_nav(role).into_iter().map(|item| item.label).collect()
}

#[test]
fn signed_out_sees_no_navigation() {
    assert!(visible_nav(None).is_empty());
}

#[test]
fn unknown_role_sees_no_navigation() {
    assert!(visible_nav(Some(Role::Unknown)).is_empty());
}

#[test]
fn super_admin_sees_everything() {
    assert_eq!(visible_nav(Some(Role::SuperAdmin)).len(), NAV_ITEMS.len());
}

#[test]
fn school_admin_sees_school_screens_only() {
    assert_eq!(labels(Some(Role::SchoolAdmin)), vec!["Dashboard", "Students", "Schools"]);
}

#[test]
fn support_sees_operational_screens() {
    assert_eq!(labels(Some(Role::Support)), vec!["Dashboard", "Trips", "Ratings"]);
}

#[test]
fn admin_cannot_manage_admins_or_roles() {
    let visible = labels(Some(Role::Admin));
    assert!(!visible.contains(&"Admins"));
    assert!(!visible.contains(&"Roles"));
    assert!(!visible.contains(&"Audit logs"));
    assert!(visible.contains(&"Payments"));
}

#[test]
fn nav_hrefs_are_unique() {
    for (i, a) in NAV_ITEMS.iter().enumerate() {
        assert!(NAV_ITEMS[i + 1..].iter().all(|b| b.href != a.href), "duplicate {}", a.href);
    }
}
