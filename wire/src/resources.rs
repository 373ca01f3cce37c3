//! Endpoint catalog: one marker type per backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every resource exposes the same read surface (`Resource`), most add
//! create/update (`Mutable`) or delete (`Deletable`). URL templates default
//! to `BASE_PATH/{id}`; resources whose list route differs override
//! `LIST_PATH`, and resource-specific actions live as inherent functions on
//! the marker type. Each mutation reports the cache tags it invalidates.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{self, Entity};
use crate::tags::Tag;

/// Read surface of a backend resource.
pub trait Resource: 'static {
    type Item: Entity + Clone + PartialEq + DeserializeOwned + Serialize + Send + Sync + 'static;

    /// Tag provided by every read of this resource.
    const TAG: Tag;
    /// Display name for one record.
    const SINGULAR: &'static str;
    /// Display name for the collection.
    const PLURAL: &'static str;
    /// Root for item routes.
    const BASE_PATH: &'static str;
    /// List route; most resources list at their base path.
    const LIST_PATH: &'static str = Self::BASE_PATH;

    #[must_use]
    fn detail_path(id: &str) -> String {
        format!("{}/{id}", Self::BASE_PATH)
    }

    /// Tags a write against this resource makes stale.
    #[must_use]
    fn invalidates() -> Vec<Tag> {
        vec![Self::TAG, Tag::AuditLog, Tag::Dashboard]
    }

    /// [`Resource::invalidates`] plus tags of related resources.
    #[must_use]
    fn invalidates_with(extra: &[Tag]) -> Vec<Tag> {
        let mut tags = Self::invalidates();
        for tag in extra {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
        tags
    }
}

/// Resources the console can create and update.
pub trait Mutable: Resource {
    type Draft: Clone + Serialize + Send + Sync + 'static;

    #[must_use]
    fn create_path() -> String {
        Self::BASE_PATH.to_owned()
    }

    #[must_use]
    fn update_path(id: &str) -> String {
        Self::detail_path(id)
    }
}

/// Resources the console can delete.
pub trait Deletable: Resource {
    #[must_use]
    fn delete_path(id: &str) -> String {
        Self::detail_path(id)
    }
}

/// Non-resource routes.
pub mod paths {
    pub const LOGIN: &str = "/admin/login";
    pub const VERIFY_TOKEN: &str = "/admin/verify-admin-token";
    pub const DASHBOARD_STATS: &str = "/admin/dashboard-stats";
    pub const RAZORPAY_CREATE_ORDER: &str = "/razorpay/create-order";
    pub const RAZORPAY_VERIFY_PAYMENT: &str = "/razorpay/verify-payment";
    pub const RAZORPAY_REFUND: &str = "/razorpay/refund";
}

macro_rules! resource {
    ($(#[$meta:meta])* $name:ident, $item:ty, $tag:expr, $singular:literal, $plural:literal, $base:literal $(, list = $list:literal)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl Resource for $name {
            type Item = $item;
            const TAG: Tag = $tag;
            const SINGULAR: &'static str = $singular;
            const PLURAL: &'static str = $plural;
            const BASE_PATH: &'static str = $base;
            $(const LIST_PATH: &'static str = $list;)?
        }
    };
}

resource!(
    /// Console operator accounts.
    Admins, models::Admin, Tag::Admin, "Admin", "Admins", "/admin/users"
);
resource!(Drivers, models::Driver, Tag::Driver, "Driver", "Drivers", "/drivers");
resource!(Parents, models::Parent, Tag::Parent, "Parent", "Parents", "/parents");
resource!(Students, models::Student, Tag::Student, "Student", "Students", "/students");
resource!(Schools, models::School, Tag::School, "School", "Schools", "/schools");
resource!(
    /// Trips are listed through the admin aggregate route.
    Trips, models::Trip, Tag::Trip, "Trip", "Trips", "/trips", list = "/trips/admin/all-trips"
);
resource!(
    Assignments, models::Assignment, Tag::Assignment, "Assignment", "Assignments", "/assignments"
);
resource!(
    SubscriptionPlans,
    models::SubscriptionPlan,
    Tag::SubscriptionPlan,
    "Plan",
    "Subscription plans",
    "/subscription-plans"
);
resource!(
    ParentSubscriptions,
    models::ParentSubscription,
    Tag::ParentSubscription,
    "Parent subscription",
    "Parent subscriptions",
    "/parent-subscriptions"
);
resource!(
    SchoolSubscriptions,
    models::SchoolSubscription,
    Tag::SchoolSubscription,
    "School subscription",
    "School subscriptions",
    "/school-subscriptions"
);
resource!(
    RedemptionCodes,
    models::RedemptionCode,
    Tag::RedemptionCode,
    "Redemption code",
    "Redemption codes",
    "/redemption-codes"
);
resource!(
    /// Payments are listed through the admin aggregate route.
    Payments, models::Payment, Tag::Payment, "Payment", "Payments", "/payments", list = "/payments/admin/all-payments"
);
resource!(Roles, models::RoleRecord, Tag::Role, "Role", "Roles", "/roles");
resource!(AuditLogs, models::AuditLog, Tag::AuditLog, "Audit log", "Audit logs", "/audit-logs");
resource!(
    Notifications, models::Notification, Tag::Notification, "Notification", "Notifications", "/notifications"
);
resource!(Ratings, models::Rating, Tag::Rating, "Rating", "Ratings & reviews", "/ratings-reviews");

impl Mutable for Admins {
    type Draft = models::AdminDraft;
}
impl Deletable for Admins {}

impl Admins {
    /// `PATCH /admin/users/{id}/status`
    #[must_use]
    pub fn status_path(id: &str) -> String {
        format!("{}/status", Self::detail_path(id))
    }
}

impl Mutable for Drivers {
    type Draft = models::DriverDraft;
}
impl Deletable for Drivers {}

impl Drivers {
    /// `PATCH /drivers/{id}/verify`
    #[must_use]
    pub fn verify_path(id: &str) -> String {
        format!("{}/verify", Self::detail_path(id))
    }
}

impl Mutable for Parents {
    type Draft = models::ParentDraft;
}
impl Deletable for Parents {}

impl Mutable for Students {
    type Draft = models::StudentDraft;
}
impl Deletable for Students {}

impl Mutable for Schools {
    type Draft = models::SchoolDraft;
}
impl Deletable for Schools {}

impl Trips {
    /// `PATCH /trips/{id}/cancel`
    #[must_use]
    pub fn cancel_path(id: &str) -> String {
        format!("{}/cancel", Self::detail_path(id))
    }
}

impl Mutable for Assignments {
    type Draft = models::AssignmentDraft;
}
impl Deletable for Assignments {}

impl Assignments {
    /// `PATCH /assignments/{id}/approve`
    #[must_use]
    pub fn approve_path(id: &str) -> String {
        format!("{}/approve", Self::detail_path(id))
    }

    /// `PATCH /assignments/{id}/reject`
    #[must_use]
    pub fn reject_path(id: &str) -> String {
        format!("{}/reject", Self::detail_path(id))
    }

    /// A review decision changes what drivers and students show as assigned.
    #[must_use]
    pub fn review_invalidates() -> Vec<Tag> {
        Self::invalidates_with(&[Tag::Driver, Tag::Student, Tag::School])
    }
}

impl Mutable for SubscriptionPlans {
    type Draft = models::SubscriptionPlanDraft;
}
impl Deletable for SubscriptionPlans {}

impl ParentSubscriptions {
    /// `PATCH /parent-subscriptions/{id}/cancel`
    #[must_use]
    pub fn cancel_path(id: &str) -> String {
        format!("{}/cancel", Self::detail_path(id))
    }
}

impl Mutable for SchoolSubscriptions {
    type Draft = models::SchoolSubscriptionDraft;
}
impl Deletable for SchoolSubscriptions {}

impl SchoolSubscriptions {
    /// `POST /school-subscriptions/{id}/generate-codes`
    #[must_use]
    pub fn generate_codes_path(id: &str) -> String {
        format!("{}/generate-codes", Self::detail_path(id))
    }

    /// Code generation creates redemption codes under the subscription.
    #[must_use]
    pub fn generate_codes_invalidates() -> Vec<Tag> {
        Self::invalidates_with(&[Tag::RedemptionCode])
    }
}

impl Payments {
    /// A refund changes the payment and whatever it paid for.
    #[must_use]
    pub fn refund_invalidates() -> Vec<Tag> {
        Self::invalidates_with(&[Tag::ParentSubscription, Tag::SchoolSubscription])
    }
}

impl Mutable for Roles {
    type Draft = models::RoleDraft;
}
impl Deletable for Roles {}

impl Mutable for Notifications {
    type Draft = models::NotificationDraft;
}
impl Deletable for Notifications {}

impl Notifications {
    /// `PATCH /notifications/{id}/read`
    #[must_use]
    pub fn read_path(id: &str) -> String {
        format!("{}/read", Self::detail_path(id))
    }
}

impl Deletable for Ratings {}
