use serde::{Deserialize, Serialize};

use crate::models::StudentTransfer;

/// Maximum accepted length of a student name, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Category of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum ViolationKind {
    MissingField,
    TooLong,
    InvalidFormat,
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

/// A single declarative validation rule: `check` returns true when the
/// transfer satisfies it.
struct Rule {
    field: &'static str,
    kind: ViolationKind,
    message: &'static str,
    check: fn(&StudentTransfer) -> bool,
}

/// Ordered rule list applied to every inbound transfer before it reaches the
/// store. `id` is never validated against caller input.
const RULES: &[Rule] = &[
    Rule {
        field: "studentName",
        kind: ViolationKind::MissingField,
        message: "Student name is required",
        check: |t| !t.student_name.is_empty(),
    },
    Rule {
        field: "studentName",
        kind: ViolationKind::TooLong,
        message: "Student name must be at most 100 characters",
        check: |t| t.student_name.chars().count() <= NAME_MAX_LEN,
    },
    Rule {
        field: "email",
        kind: ViolationKind::InvalidFormat,
        message: "Please enter a valid email address",
        check: |t| t.email.is_empty() || email_shape_ok(&t.email),
    },
    Rule {
        field: "address",
        kind: ViolationKind::MissingField,
        message: "Address is required",
        check: |t| !t.address.is_empty(),
    },
];

/// Run all rules against a transfer. An empty result means acceptable.
pub fn validate(transfer: &StudentTransfer) -> Vec<FieldViolation> {
    RULES
        .iter()
        .filter(|rule| !(rule.check)(transfer))
        .map(|rule| FieldViolation {
            field: rule.field.to_string(),
            kind: rule.kind,
            message: rule.message.to_string(),
        })
        .collect()
}

/// Structural email check: exactly one `@`, neither first nor last character.
fn email_shape_ok(value: &str) -> bool {
    let mut at_positions = value.char_indices().filter(|(_, c)| *c == '@');
    match (at_positions.next(), at_positions.next()) {
        (Some((index, _)), None) => index > 0 && index < value.len() - 1,
        _ => false,
    }
}
