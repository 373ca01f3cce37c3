//! Badge tones for API status values.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use wire::auth::Role;
use wire::models::{
    AssignmentStatus, PaymentStatus, SubscriptionStatus, TripStatus, VerificationStatus,
};

use super::data_table::{Cell, Tone};

/// A status value with a label and a badge colour.
pub trait StatusBadge: Copy {
    fn badge_label(self) -> &'static str;
    fn tone(self) -> Tone;
}

/// Badge cell for any status value.
pub fn badge<S: StatusBadge>(status: S) -> Cell {
    Cell::Badge(status.badge_label(), status.tone())
}

/// Badge cell for an enabled/disabled flag.
#[must_use]
pub fn active_badge(active: bool) -> Cell {
    if active { Cell::Badge("Active", Tone::Positive) } else { Cell::Badge("Inactive", Tone::Neutral) }
}

impl StatusBadge for TripStatus {
    fn badge_label(self) -> &'static str {
        self.label()
    }

    fn tone(self) -> Tone {
        match self {
            Self::Scheduled => Tone::Info,
            Self::Started | Self::InProgress => Tone::Warning,
            Self::Completed => Tone::Positive,
            Self::Cancelled => Tone::Negative,
            Self::Unknown => Tone::Neutral,
        }
    }
}

impl StatusBadge for AssignmentStatus {
    fn badge_label(self) -> &'static str {
        self.label()
    }

    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Pending | Self::ParentRequested => Tone::Warning,
            Self::Rejected => Tone::Negative,
            Self::Inactive | Self::Unknown => Tone::Neutral,
        }
    }
}

impl StatusBadge for PaymentStatus {
    fn badge_label(self) -> &'static str {
        self.label()
    }

    fn tone(self) -> Tone {
        match self {
            Self::Completed => Tone::Positive,
            Self::Pending => Tone::Warning,
            Self::Failed => Tone::Negative,
            Self::Refunded => Tone::Info,
            Self::Unknown => Tone::Neutral,
        }
    }
}

impl StatusBadge for SubscriptionStatus {
    fn badge_label(self) -> &'static str {
        self.label()
    }

    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Pending => Tone::Warning,
            Self::Cancelled => Tone::Negative,
            Self::Expired | Self::Unknown => Tone::Neutral,
        }
    }
}

impl StatusBadge for VerificationStatus {
    fn badge_label(self) -> &'static str {
        self.label()
    }

    fn tone(self) -> Tone {
        match self {
            Self::Approved => Tone::Positive,
            Self::Pending => Tone::Warning,
            Self::Rejected => Tone::Negative,
            Self::Unknown => Tone::Neutral,
        }
    }
}

impl StatusBadge for Role {
    fn badge_label(self) -> &'static str {
        self.label()
    }

    fn tone(self) -> Tone {
        match self {
            Self::SuperAdmin => Tone::Negative,
            Self::Admin => Tone::Info,
            Self::SchoolAdmin | Self::Support => Tone::Neutral,
            Self::Unknown => Tone::Warning,
        }
    }
}
