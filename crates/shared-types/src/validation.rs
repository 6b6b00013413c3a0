use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::appointment::{AppointmentDraft, AppointmentField, ALL_FIELDS};

/// Intentionally permissive: something, an `@`, something, a dot, something.
/// U+FEFF counts as whitespace here, as it does for browser form values.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}]+@[^\s\x{FEFF}]+\.[^\s\x{FEFF}]+$").expect("email pattern is valid")
});

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Whether `value` is empty once surrounding whitespace (and BOMs) are gone.
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_blank_char).is_empty()
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

impl FieldError {
    /// User-facing message for this failure on `field`.
    pub fn message(&self, field: AppointmentField) -> String {
        match self {
            FieldError::Required => format!("{} is required", field.label()),
            FieldError::InvalidFormat => format!("Invalid {}", field.as_str()),
        }
    }
}

/// Whether `value` has the minimal `local@domain.tld` shape.
///
/// The value is matched as-is; surrounding whitespace makes it fail.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

fn check(field: AppointmentField, value: &str) -> Option<FieldError> {
    if is_blank(value) {
        return Some(FieldError::Required);
    }
    if field == AppointmentField::Email && !is_email_shaped(value) {
        return Some(FieldError::InvalidFormat);
    }
    None
}

/// Per-field validation failures for a draft.
///
/// Built wholesale by [`ValidationErrors::validate`] on each submit attempt;
/// individual entries are dropped with [`ValidationErrors::clear`] as the
/// user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<AppointmentField, FieldError>,
}

impl ValidationErrors {
    /// Check every field independently and collect all failures.
    pub fn validate(draft: &AppointmentDraft) -> Self {
        let errors = ALL_FIELDS
            .iter()
            .filter_map(|field| check(*field, draft.get(*field)).map(|e| (*field, e)))
            .collect();
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: AppointmentField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn message(&self, field: AppointmentField) -> Option<String> {
        self.get(field).map(|e| e.message(field))
    }

    /// Drop the error for one field, leaving the others in place.
    pub fn clear(&mut self, field: AppointmentField) {
        self.errors.remove(&field);
    }

    /// Failing fields in render order.
    pub fn fields(&self) -> impl Iterator<Item = AppointmentField> + '_ {
        self.errors.keys().copied()
    }
}
