//! Entity DTOs mirrored from the upstream API.
//!
//! DESIGN
//! ======
//! The console never enforces server invariants, so almost every descriptive
//! field is optional and every status enum tolerates unknown values. Create
//! and update payloads (`*Draft`) only carry what the forms edit.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::auth::Role;

/// Anything with an opaque API identifier.
pub trait Entity {
    fn id(&self) -> &str;
}

/// Records may carry `_id`, `id`, or both (`id` as a virtual copy of `_id`).
/// Keep one so the derived field matching never sees a duplicate.
fn with_single_id(mut fields: Map<String, Value>) -> Map<String, Value> {
    if fields.contains_key("_id") {
        fields.remove("id");
    }
    fields
}

// Entities derive with `remote = "Self"`, which turns the generated serde
// code into inherent functions; the trait impls below wrap them.
macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    <$ty>::serialize(self, serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let fields = with_single_id(Map::deserialize(deserializer)?);
                    <$ty>::deserialize(Value::Object(fields)).map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

impl_entity!(
    Admin,
    Driver,
    Parent,
    Student,
    School,
    Trip,
    Assignment,
    SubscriptionPlan,
    ParentSubscription,
    SchoolSubscription,
    RedemptionCode,
    Payment,
    RoleRecord,
    AuditLog,
    Notification,
    Rating,
);

// =============================================================================
// STATUS ENUMS
// =============================================================================

/// Lifecycle of a trip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Scheduled,
    Started,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl TripStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Started => "Started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// Trips that have not finished can still be cancelled.
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Scheduled | Self::Started | Self::InProgress)
    }
}

/// State of a driver↔student or driver↔school assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Active,
    Inactive,
    #[default]
    Pending,
    ParentRequested,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl AssignmentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::ParentRequested => "Parent requested",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }

    /// Pending and parent-requested assignments await an admin decision.
    #[must_use]
    pub fn awaits_review(self) -> bool {
        matches!(self, Self::Pending | Self::ParentRequested)
    }
}

/// What an assignment links a driver to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentKind {
    #[default]
    DriverStudent,
    DriverSchool,
}

impl AssignmentKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DriverStudent => "Driver ↔ Student",
            Self::DriverSchool => "Driver ↔ School",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DriverStudent => "driver_student",
            Self::DriverSchool => "driver_school",
        }
    }
}

/// Settlement state of a payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
            Self::Unknown => "Unknown",
        }
    }
}

/// State of a parent or school subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Cancelled,
    #[default]
    Pending,
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Cancelled => "Cancelled",
            Self::Pending => "Pending",
            Self::Unknown => "Unknown",
        }
    }
}

/// Document verification state of a driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}

/// Who a subscription plan is sold to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanAudience {
    #[default]
    Parent,
    School,
}

impl PlanAudience {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::School => "School",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::School => "school",
        }
    }
}

/// Recipients of a broadcast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    All,
    Parents,
    Drivers,
    Schools,
    #[serde(other)]
    Unknown,
}

impl Audience {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Everyone",
            Self::Parents => "Parents",
            Self::Drivers => "Drivers",
            Self::Schools => "Schools",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Parents => "parents",
            Self::Drivers => "drivers",
            Self::Schools => "schools",
            Self::Unknown => "unknown",
        }
    }
}

fn default_true() -> bool {
    true
}

// =============================================================================
// PEOPLE
// =============================================================================

/// Console operator account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Admin {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    /// Only sent on create or when the operator resets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Driver {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub seat_capacity: Option<u32>,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_capacity: Option<u32>,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Parent {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub children_count: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub parent_id: String,
    pub school_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,
    pub is_active: bool,
}

// =============================================================================
// SCHOOLS & TRIPS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct School {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub student_count: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDraft {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Trip {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    /// Pickup or drop-off run, as reported by the API.
    #[serde(default)]
    pub trip_type: Option<String>,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub student_count: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Assignment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub kind: AssignmentKind,
    pub driver_id: String,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub requested_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Assignment {
    /// Name of the student or school on the other end of the assignment.
    #[must_use]
    pub fn target_name(&self) -> Option<&str> {
        match self.kind {
            AssignmentKind::DriverStudent => self.student_name.as_deref().or(self.student_id.as_deref()),
            AssignmentKind::DriverSchool => self.school_name.as_deref().or(self.school_id.as_deref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub kind: AssignmentKind,
    pub driver_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct SubscriptionPlan {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub audience: PlanAudience,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub duration_days: u32,
    pub audience: PlanAudience,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct ParentSubscription {
    #[serde(alias = "_id")]
    pub id: String,
    pub parent_id: String,
    #[serde(default)]
    pub parent_name: Option<String>,
    pub plan_id: String,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct SchoolSubscription {
    #[serde(alias = "_id")]
    pub id: String,
    pub school_id: String,
    #[serde(default)]
    pub school_name: Option<String>,
    pub plan_id: String,
    #[serde(default)]
    pub plan_name: Option<String>,
    pub seats: u32,
    #[serde(default)]
    pub seats_used: Option<u32>,
    #[serde(default)]
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSubscriptionDraft {
    pub school_id: String,
    pub plan_id: String,
    pub seats: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct RedemptionCode {
    #[serde(alias = "_id")]
    pub id: String,
    pub code: String,
    pub school_subscription_id: String,
    #[serde(default)]
    pub is_redeemed: bool,
    #[serde(default)]
    pub redeemed_by: Option<String>,
    #[serde(default)]
    pub redeemed_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// `POST /school-subscriptions/{id}/generate-codes` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCodes {
    pub count: u32,
}

// =============================================================================
// PAYMENTS, ROLES, AUDIT, NOTIFICATIONS, RATINGS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Payment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub payer_name: Option<String>,
    #[serde(default)]
    pub payer_type: Option<String>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_currency() -> String {
    "INR".to_owned()
}

impl Payment {
    /// Only settled payments with a gateway reference can be refunded.
    #[must_use]
    pub fn is_refundable(&self) -> bool {
        self.status == PaymentStatus::Completed && self.razorpay_payment_id.is_some()
    }
}

/// Role definition managed under `/roles`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct RoleRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct AuditLog {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub actor: Option<String>,
    pub action: String,
    pub resource: String,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub audience: Audience,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Rating {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    pub score: u8,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `PATCH .../status` body for enabling or disabling a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveToggle {
    pub is_active: bool,
}

/// `PATCH /drivers/{id}/verify` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverVerification {
    pub status: VerificationStatus,
}

/// Aggregated counters for the dashboard landing page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_drivers: u64,
    pub total_parents: u64,
    pub total_students: u64,
    pub total_schools: u64,
    pub active_trips: u64,
    pub pending_assignments: u64,
    pub pending_driver_verifications: u64,
    pub active_subscriptions: u64,
    pub total_revenue: f64,
}
