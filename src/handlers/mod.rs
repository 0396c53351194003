pub mod create;
pub mod delete;
pub mod demo;
pub mod get;
pub mod health;
pub mod list;
pub mod patch;
pub mod update;

pub use create::create_student_handler;
pub use delete::delete_student_handler;
pub use demo::demo_handler;
pub use get::get_student_handler;
pub use health::health_handler;
pub use list::list_students_handler;
pub use patch::update_student_partial_handler;
pub use update::update_student_handler;
