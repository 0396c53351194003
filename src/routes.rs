// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const DEMO: &str = "/demo";
pub const STUDENTS_ALL: &str = "/students/all";
pub const STUDENT_BY_KEY: &str = "/students/{key}";
pub const STUDENTS_CREATE: &str = "/students/create";
pub const STUDENTS_UPDATE: &str = "/students/update";
pub const STUDENT_UPDATE_PARTIAL: &str = "/students/{id}/update-partial";
pub const STUDENTS_DELETE: &str = "/students/delete/{id}";
