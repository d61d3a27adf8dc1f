//! Student service
//!
//! One store call per operation. Every outcome is logged and counted here.

use std::sync::Arc;

use super::errors::StudentResult;
use super::model::Student;
use super::store::{StoreError, StoreResult, StudentStore};
use crate::observability::{Logger, MetricsRegistry};

/// Service layer over a [`StudentStore`]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
    metrics: Arc<MetricsRegistry>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Upsert the record as given and return the stored copy
    pub fn save_or_update(&self, student: Student) -> StudentResult<Student> {
        let saved = self.track("upsert", self.store.upsert(student))?;
        self.metrics.increment_saves();
        Logger::info("STUDENT_SAVED", &[("id", saved.id().unwrap_or_default())]);
        Ok(saved)
    }

    /// Every record in store order
    pub fn list_all(&self) -> StudentResult<Vec<Student>> {
        let students = self.track("find_all", self.store.find_all())?;
        self.metrics.increment_listings();
        Logger::trace(
            "STUDENTS_LISTED",
            &[("count", &students.len().to_string())],
        );
        Ok(students)
    }

    pub fn get_by_id(&self, id: &str) -> StudentResult<Option<Student>> {
        let found = self.track("find_by_id", self.store.find_by_id(id))?;
        self.metrics.record_lookup(found.is_some());
        Logger::trace(
            "STUDENT_LOOKUP",
            &[("found", if found.is_some() { "true" } else { "false" }), ("id", id)],
        );
        Ok(found)
    }

    /// Remove a record; unknown identifiers succeed silently
    pub fn delete(&self, id: &str) -> StudentResult<()> {
        self.track("delete_by_id", self.store.delete_by_id(id))?;
        self.metrics.increment_deletes();
        Logger::info("STUDENT_DELETED", &[("id", id)]);
        Ok(())
    }

    /// Number of stored records
    pub fn count(&self) -> StudentResult<usize> {
        self.track("count", self.store.count()).map_err(Into::into)
    }

    fn track<T>(&self, operation: &str, result: StoreResult<T>) -> Result<T, StoreError> {
        if let Err(e) = &result {
            self.metrics.increment_store_errors();
            Logger::error(
                "STORE_OPERATION_FAILED",
                &[("error", &e.to_string()), ("operation", operation)],
            );
        }
        result
    }
}
