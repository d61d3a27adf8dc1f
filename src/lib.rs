//! rosterdb - REST service for student records
//!
//! Five endpoints under `/api/v1/student` backed by a pluggable record store.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod student;
