//! Form field descriptors, validation, and value conversion helpers.
//!
//! DESIGN
//! ======
//! Forms keep every value as a string keyed by field name. Validation runs
//! over the descriptors before any draft is built; each resource page then
//! converts the validated map into its typed draft and, for edits, converts
//! a record back into a map to prefill the dialog.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

/// Field name to current string value.
pub type FormValues = BTreeMap<String, String>;

/// Field name to validation message.
pub type FieldErrors = BTreeMap<String, String>;

/// Input widget and format rule for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Number,
    Date,
    TextArea,
    Password,
    /// `(value, label)` pairs; the first is the default.
    Select(&'static [(&'static str, &'static str)]),
    Checkbox,
}

impl FieldKind {
    /// `type` attribute for `<input>` based kinds.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Number => "number",
            Self::Date => "date",
            Self::Password => "password",
            Self::Checkbox => "checkbox",
            Self::Text | Self::TextArea | Self::Select(_) => "text",
        }
    }
}

/// One form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false }
    }

    #[must_use]
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    #[must_use]
    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    #[must_use]
    pub const fn phone(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Phone)
    }

    #[must_use]
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    #[must_use]
    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    #[must_use]
    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    #[must_use]
    pub const fn password(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    #[must_use]
    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    #[must_use]
    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value a create dialog starts with.
    #[must_use]
    pub fn default_value(&self) -> String {
        match self.kind {
            FieldKind::Select(options) => options.first().map(|(value, _)| (*value).to_owned()).unwrap_or_default(),
            FieldKind::Checkbox => "true".to_owned(),
            _ => String::new(),
        }
    }

    fn check(&self, raw: &str) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return (self.required && self.kind != FieldKind::Checkbox).then(|| format!("{} is required", self.label));
        }
        match self.kind {
            FieldKind::Email if !is_valid_email(value) => Some("Enter a valid email address".to_owned()),
            FieldKind::Phone if !is_valid_phone(value) => Some("Enter a valid phone number".to_owned()),
            FieldKind::Number if value.parse::<f64>().map_or(true, |n| !n.is_finite()) => {
                Some(format!("{} must be a number", self.label))
            }
            FieldKind::Select(options) if !options.iter().any(|(v, _)| *v == value) => {
                Some(format!("{} is required", self.label))
            }
            _ => None,
        }
    }
}

/// Initial values for a create dialog.
#[must_use]
pub fn initial_values(fields: &[FieldSpec]) -> FormValues {
    fields.iter().map(|f| (f.name.to_owned(), f.default_value())).collect()
}

/// Validate `values` against `fields`; an empty result allows submission.
#[must_use]
pub fn validate(fields: &[FieldSpec], values: &FormValues) -> FieldErrors {
    fields
        .iter()
        .filter_map(|field| {
            let raw = values.get(field.name).map_or("", String::as_str);
            field.check(raw).map(|message| (field.name.to_owned(), message))
        })
        .collect()
}

/// Build a value map from `(name, value)` pairs, e.g. to prefill an edit dialog.
pub fn values_from<I, K>(pairs: I) -> FormValues
where
    I: IntoIterator<Item = (K, String)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Trimmed value of `name`, empty when absent.
#[must_use]
pub fn text(values: &FormValues, name: &str) -> String {
    values.get(name).map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// Trimmed value of `name`, `None` when blank.
#[must_use]
pub fn optional(values: &FormValues, name: &str) -> Option<String> {
    Some(text(values, name)).filter(|v| !v.is_empty())
}

/// Checkbox state of `name`.
#[must_use]
pub fn flag(values: &FormValues, name: &str) -> bool {
    values.get(name).is_some_and(|v| v == "true")
}

/// String form of a checkbox state.
#[must_use]
pub fn flag_value(on: bool) -> String {
    if on { "true" } else { "false" }.to_owned()
}

/// Parse a whole, non-negative number.
///
/// # Errors
///
/// Returns a display message naming `label` when the value is not a whole number.
pub fn parse_u32(values: &FormValues, name: &str, label: &str) -> Result<u32, String> {
    text(values, name).parse::<u32>().map_err(|_| format!("{label} must be a whole number"))
}

/// Like [`parse_u32`] but a blank value is `None`.
///
/// # Errors
///
/// See [`parse_u32`].
pub fn parse_opt_u32(values: &FormValues, name: &str, label: &str) -> Result<Option<u32>, String> {
    if optional(values, name).is_none() {
        return Ok(None);
    }
    parse_u32(values, name, label).map(Some)
}

/// Parse a finite, non-negative decimal number.
///
/// # Errors
///
/// Returns a display message naming `label` when the value is not a valid amount.
pub fn parse_f64(values: &FormValues, name: &str, label: &str) -> Result<f64, String> {
    match text(values, name).parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(format!("{label} must be a number")),
    }
}

/// Loose address check: one `@`, a non-empty local part, a dotted domain.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// 10 to 15 digits, ignoring spaces, dashes, parentheses and a leading `+`.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return false,
        }
    }
    (10..=15).contains(&digits)
}
