//! JSON-file record store
//!
//! The whole record set lives in memory and is rewritten to disk after every
//! mutation. A write goes to a sibling temp file, is fsynced, then renamed
//! over the data file, so a crash leaves either the old or the new contents.
//! A mutation whose write fails is rolled back in memory.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::{assign_id, StoreError, StoreResult, StudentStore};
use crate::student::model::Student;

/// Store persisted as a JSON array of students
#[derive(Debug)]
pub struct FileStudentStore {
    path: PathBuf,
    records: RwLock<BTreeMap<String, Student>>,
}

impl FileStudentStore {
    /// Open the store at `path`, loading existing records
    ///
    /// A missing file yields an empty store; the parent directory is created
    /// so the first write can succeed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let records = if path.exists() {
            load_records(&path)?
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
            BTreeMap::new()
        };

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, records: &BTreeMap<String, Student>) -> StoreResult<()> {
        let snapshot: Vec<&Student> = records.values().collect();
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let tmp_path = self.path.with_extension("tmp");
        let mut file = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        file.write_all(&bytes)
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&tmp_path, e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        fsync_parent(&self.path)
    }
}

fn load_records(path: &Path) -> StoreResult<BTreeMap<String, Student>> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let students: Vec<Student> =
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut records = BTreeMap::new();
    for student in students {
        let id = student
            .id()
            .ok_or_else(|| StoreError::Corrupt {
                path: path.to_path_buf(),
                reason: format!("record '{}' has no _id", student.name),
            })?
            .to_string();
        records.insert(id, student);
    }
    Ok(records)
}

#[cfg(unix)]
fn fsync_parent(path: &Path) -> StoreResult<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    let dir = fs::OpenOptions::new()
        .read(true)
        .open(parent)
        .map_err(|e| StoreError::io(parent, e))?;
    dir.sync_all().map_err(|e| StoreError::io(parent, e))
}

#[cfg(not(unix))]
fn fsync_parent(_path: &Path) -> StoreResult<()> {
    Ok(())
}

impl StudentStore for FileStudentStore {
    fn upsert(&self, mut student: Student) -> StoreResult<Student> {
        let id = assign_id(&mut student);
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;

        let previous = records.insert(id.clone(), student.clone());
        if let Err(e) = self.persist(&records) {
            match previous {
                Some(old) => records.insert(id, old),
                None => records.remove(&id),
            };
            return Err(e);
        }
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

        let Some(removed) = records.remove(id) else {
            return Ok(());
        };
        if let Err(e) = self.persist(&records) {
            records.insert(id.to_string(), removed);
            return Err(e);
        }
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
