use pretty_assertions::assert_eq;
use shared_types::{AppointmentDraft, AppointmentField, FieldError, ValidationErrors, ALL_FIELDS};

use crate::common::valid_draft;

const BLANKS: &[&str] = &["", " ", "   ", "\t", "\n", " \t\n "];

#[test]
fn any_blank_field_is_reported_with_its_label() {
    for field in ALL_FIELDS {
        for blank in BLANKS {
            let draft = valid_draft().with(*field, *blank);
            let errors = ValidationErrors::validate(&draft);
            assert_eq!(errors.len(), 1, "field {field} value {blank:?}");
            assert_eq!(
                errors.message(*field),
                Some(format!("{} is required", field.label()))
            );
        }
    }
}

#[test]
fn every_combination_of_blank_fields_is_reported_in_full() {
    for mask in 0u32..(1 << ALL_FIELDS.len()) {
        let draft = ALL_FIELDS
            .iter()
            .enumerate()
            .fold(valid_draft(), |draft, (i, field)| {
                if mask & (1 << i) != 0 {
                    draft.with(*field, "")
                } else {
                    draft
                }
            });
        let errors = ValidationErrors::validate(&draft);
        assert_eq!(errors.len(), mask.count_ones() as usize, "mask {mask:05b}");
        for (i, field) in ALL_FIELDS.iter().enumerate() {
            let expected = (mask & (1 << i) != 0).then_some(FieldError::Required);
            assert_eq!(errors.get(*field), expected);
        }
    }
}

#[test]
fn well_formed_drafts_pass() {
    let emails = ["a@b.co", "x.y+z@clinic.example.org", "user@host.local", "a@b.c.d"];
    for email in emails {
        let draft = AppointmentDraft {
            email: email.into(),
            name: "  padded  ".into(),
            ..valid_draft()
        };
        assert!(ValidationErrors::validate(&draft).is_empty(), "{email}");
    }
}

#[test]
fn emails_missing_at_or_dot_are_invalid() {
    let emails = ["plainaddress", "no-at.example.com", "a@localhost", "a@b.", "a@.", "a@ b.com"];
    for email in emails {
        let draft = valid_draft().with(AppointmentField::Email, email);
        let errors = ValidationErrors::validate(&draft);
        assert_eq!(
            errors.message(AppointmentField::Email).as_deref(),
            Some("Invalid email"),
            "{email}"
        );
    }
}
