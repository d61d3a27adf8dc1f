//! In-memory record store

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{assign_id, StoreError, StoreResult, StudentStore};
use crate::student::model::Student;

/// Process-local store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    records: RwLock<BTreeMap<String, Student>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentStore for InMemoryStudentStore {
    fn upsert(&self, mut student: Student) -> StoreResult<Student> {
        let id = assign_id(&mut student);
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(id, student.clone());
        Ok(student)
    }

    fn find_all(&self) -> StoreResult<Vec<Student>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Student>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.remove(id);
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
