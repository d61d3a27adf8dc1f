//! # Students
//!
//! Record shape, persistence collaborator and service layer for the student
//! API.

pub mod errors;
pub mod model;
pub mod service;
pub mod store;

pub use errors::{StudentError, StudentResult};
pub use model::Student;
pub use service::StudentService;
pub use store::{FileStudentStore, InMemoryStudentStore, StoreError, StoreResult, StudentStore};
