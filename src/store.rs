use crate::models::{PatchOperation, StudentFields, StudentRecord, StudentTransfer};
use crate::validation::{self, FieldViolation};

/// Process-lifetime, insertion-ordered collection of student records.
///
/// The store is the single owner of all records; callers serialize access
/// through the shared lock in [`crate::state::AppState`]. Lookups are linear
/// scans, which is the right tool for a collection this size.
#[derive(Debug, Default)]
pub struct StudentStore {
    records: Vec<StudentRecord>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed sample data the service boots with.
    pub fn seeded() -> Self {
        StudentStore {
            records: vec![
                StudentRecord {
                    id: 1,
                    name: "Tyan".to_string(),
                    email: "phamquangtuyen.nt@gmail.com".to_string(),
                    address: "12 Melbourne".to_string(),
                },
                StudentRecord {
                    id: 2,
                    name: "Scul".to_string(),
                    email: "student2@gmail.com".to_string(),
                    address: "Los Angeles".to_string(),
                },
            ],
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[StudentRecord] {
        &self.records
    }

    /// First record with the given id, if any.
    pub fn get_by_id(&self, id: i32) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// First record whose name matches exactly, if any.
    pub fn get_by_name(&self, name: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Append a new record with a freshly assigned id and return it.
    pub fn insert(&mut self, fields: StudentFields) -> &StudentRecord {
        let index = self.records.len();
        self.records.push(StudentRecord {
            id: self.next_id(),
            name: fields.name,
            email: fields.email,
            address: fields.address,
        });
        &self.records[index]
    }

    /// Overwrite the writable fields of the record with the given id.
    pub fn replace(&mut self, id: i32, fields: StudentFields) -> Option<&StudentRecord> {
        let record = self.records.iter_mut().find(|record| record.id == id)?;
        record.name = fields.name;
        record.email = fields.email;
        record.address = fields.address;
        Some(record)
    }

    /// Apply an ordered patch batch to the record with the given id.
    ///
    /// Ops run against a transient transfer copy; if any op fails or the
    /// patched result violates validation rules, the stored record is left
    /// untouched and the violations are returned. `None` means no record
    /// matched the id.
    pub fn apply_patch(
        &mut self,
        id: i32,
        ops: &[PatchOperation],
    ) -> Option<Result<&StudentRecord, Vec<FieldViolation>>> {
        let index = self.records.iter().position(|record| record.id == id)?;

        let mut draft = StudentTransfer::from_record(&self.records[index]);
        let mut violations: Vec<FieldViolation> = ops
            .iter()
            .filter_map(|op| op.apply(&mut draft).err())
            .collect();
        if violations.is_empty() {
            violations = validation::validate(&draft);
        }
        if !violations.is_empty() {
            return Some(Err(violations));
        }

        // Commit the writable fields only; id is immutable.
        let record = &mut self.records[index];
        record.name = draft.student_name;
        record.email = draft.email;
        record.address = draft.address;
        Some(Ok(&self.records[index]))
    }

    /// Remove the record with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: i32) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() < before
    }

    fn next_id(&self) -> i32 {
        self.records.iter().map(|record| record.id).max().unwrap_or(0) + 1
    }
}
