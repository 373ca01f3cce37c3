//! Razorpay order, verification, and refund payloads.
//!
//! The gateway itself is reached only through the upstream API's
//! `/razorpay/*` routes; these types mirror those routes' bodies. Amounts on
//! the gateway side are integer paise.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use serde::{Deserialize, Serialize};

/// `POST /razorpay/create-order` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    /// Amount in paise.
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

/// Order returned by `POST /razorpay/create-order`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `POST /razorpay/verify-payment` body, using the gateway's field names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyPayment {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// `POST /razorpay/refund` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub payment_id: String,
    /// Partial refund amount in paise; `None` refunds in full.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Refund record returned by `POST /razorpay/refund`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub amount: u64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Convert a rupee amount into paise, rounding to the nearest paisa.
///
/// Returns `None` for negative or non-finite amounts.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_paise(rupees: f64) -> Option<u64> {
    if !rupees.is_finite() || rupees < 0.0 {
        return None;
    }
    Some((rupees * 100.0).round() as u64)
}

/// Split integer digits into comma groups: the last three, then pairs for
/// the Indian system (`1,00,000`) or threes otherwise (`100,000`).
fn group_digits(whole: &str, indian: bool) -> String {
    let digits = whole.as_bytes();
    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&whole[start..end]);
        end = start;
        if indian {
            size = 2;
        }
    }
    groups.reverse();
    groups.join(",")
}

/// Format an amount for display: `₹1,00,000.00` for INR, `$100,000.00` for USD.
#[must_use]
pub fn format_amount(amount: f64, currency: &str) -> String {
    let (symbol, indian) = match currency {
        "INR" => ("₹", true),
        "USD" => ("$", false),
        other => return format!("{other} {amount:.2}"),
    };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}.{frac}", group_digits(whole, indian))
}
