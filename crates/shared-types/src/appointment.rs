use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Field keys
// ---------------------------------------------------------------------------

/// One of the five inputs on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentField {
    Name,
    Email,
    Phone,
    Date,
    Reason,
}

/// All fields in render order.
pub const ALL_FIELDS: &[AppointmentField] = &[
    AppointmentField::Name,
    AppointmentField::Email,
    AppointmentField::Phone,
    AppointmentField::Date,
    AppointmentField::Reason,
];

/// How a field is presented in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A single-line `<input>` with the given `type` attribute.
    Line(&'static str),
    /// A `<textarea>`.
    MultiLine,
}

impl AppointmentField {
    /// Stable key used for element ids and serialized maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentField::Name => "name",
            AppointmentField::Email => "email",
            AppointmentField::Phone => "phone",
            AppointmentField::Date => "date",
            AppointmentField::Reason => "reason",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentField::Name => "Name",
            AppointmentField::Email => "Email",
            AppointmentField::Phone => "Phone",
            AppointmentField::Date => "Date",
            AppointmentField::Reason => "Reason",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            AppointmentField::Name => InputKind::Line("text"),
            AppointmentField::Email => InputKind::Line("email"),
            AppointmentField::Phone => InputKind::Line("tel"),
            AppointmentField::Date => InputKind::Line("date"),
            AppointmentField::Reason => InputKind::MultiLine,
        }
    }

    /// Parse a field key, returning `None` for anything unknown.
    pub fn from_key(s: &str) -> Option<Self> {
        ALL_FIELDS.iter().copied().find(|f| f.as_str() == s)
    }
}

impl fmt::Display for AppointmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The in-progress, not-yet-submitted booking values.
///
/// Every field is free text; `date` holds whatever the browser's date input
/// produced (normally `YYYY-MM-DD`) and is not parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub reason: String,
}

impl AppointmentDraft {
    pub fn get(&self, field: AppointmentField) -> &str {
        match field {
            AppointmentField::Name => &self.name,
            AppointmentField::Email => &self.email,
            AppointmentField::Phone => &self.phone,
            AppointmentField::Date => &self.date,
            AppointmentField::Reason => &self.reason,
        }
    }

    /// Return a copy of the draft with `field` replaced by `value`.
    pub fn with(&self, field: AppointmentField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            AppointmentField::Name => &mut next.name,
            AppointmentField::Email => &mut next.email,
            AppointmentField::Phone => &mut next.phone,
            AppointmentField::Date => &mut next.date,
            AppointmentField::Reason => &mut next.reason,
        };
        *slot = value.into();
        next
    }

    /// True when every field is the empty string (the reset state).
    pub fn is_empty(&self) -> bool {
        ALL_FIELDS.iter().all(|f| self.get(*f).is_empty())
    }
}
