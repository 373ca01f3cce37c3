//! Cache tags naming the resources a query reads or a mutation touches.

use serde::{Deserialize, Serialize};

/// One tag per backend resource, plus the aggregated dashboard counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tag {
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
    Role,
    AuditLog,
    Notification,
    Rating,
    Dashboard,
}
