pub mod department;
pub mod subject;
pub mod teacher;

pub use department::{Department, DepartmentChanges};
pub use subject::{NewSubject, Subject};
pub use teacher::Teacher;
