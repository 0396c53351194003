use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::validation::{FieldViolation, ViolationKind};

/// Store-side student record. `id` is assigned by the store on insert and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// The caller-writable fields of a student record.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Wire-side student representation.
///
/// Serialized as `{"id", "studentName", "email", "address"}`. Every field
/// defaults on deserialization so that missing fields surface as validation
/// violations rather than body-parse failures; `id` is server-assigned and
/// ignored when supplied on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentTransfer {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl StudentTransfer {
    /// Project a stored record into its wire representation.
    pub fn from_record(record: &StudentRecord) -> Self {
        StudentTransfer {
            id: record.id,
            student_name: record.name.clone(),
            email: record.email.clone(),
            address: record.address.clone(),
        }
    }

    /// Extract the store-writable fields, discarding `id`.
    pub fn into_fields(self) -> StudentFields {
        StudentFields {
            name: self.student_name,
            email: self.email,
            address: self.address,
        }
    }
}

/// A single JSON-Patch style instruction against a student transfer.
///
/// Supported ops: `add` and `replace` set a field, `remove` clears it.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: JsonValue,
}

impl PatchOperation {
    /// Apply this operation to a transient transfer copy.
    ///
    /// `/id` is accepted here but the store never commits it back; unknown
    /// ops, unknown paths, and mistyped values are reported as violations.
    pub fn apply(&self, draft: &mut StudentTransfer) -> Result<(), FieldViolation> {
        let field = self.path.strip_prefix('/').unwrap_or(&self.path);
        match self.op.as_str() {
            "add" | "replace" => match field {
                "studentName" => draft.student_name = self.string_value(field)?,
                "email" => draft.email = self.string_value(field)?,
                "address" => draft.address = self.string_value(field)?,
                "id" => draft.id = self.int_value(field)?,
                _ => return Err(self.unknown_path(field)),
            },
            "remove" => match field {
                "studentName" => draft.student_name.clear(),
                "email" => draft.email.clear(),
                "address" => draft.address.clear(),
                "id" => draft.id = 0,
                _ => return Err(self.unknown_path(field)),
            },
            _ => {
                return Err(FieldViolation {
                    field: field.to_string(),
                    kind: ViolationKind::InvalidFormat,
                    message: format!("unsupported patch op '{}'", self.op),
                });
            }
        }
        Ok(())
    }

    fn string_value(&self, field: &str) -> Result<String, FieldViolation> {
        match &self.value {
            JsonValue::String(s) => Ok(s.clone()),
            other => Err(FieldViolation {
                field: field.to_string(),
                kind: ViolationKind::InvalidFormat,
                message: format!("patch value for '{}' must be a string, got {}", field, other),
            }),
        }
    }

    fn int_value(&self, field: &str) -> Result<i32, FieldViolation> {
        self.value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| FieldViolation {
                field: field.to_string(),
                kind: ViolationKind::InvalidFormat,
                message: format!("patch value for '{}' must be an integer", field),
            })
    }

    fn unknown_path(&self, field: &str) -> FieldViolation {
        FieldViolation {
            field: field.to_string(),
            kind: ViolationKind::InvalidFormat,
            message: format!("unknown patch path '{}'", self.path),
        }
    }
}
