//! File-based Assessment Repository
//!
//! Stores each assessment as a YAML file on disk, one directory per user:
//! `<base>/<hex(user)>/<assessment_id>.yaml`. Files are only ever created,
//! never rewritten.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::assessment::{AssessmentSnapshot, PreviousAssessment};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{AssessmentRecord, AssessmentRepository, SavedAssessment};

use super::StorageError;

/// File-based storage for assessment records
#[derive(Debug, Clone)]
pub struct FileAssessmentRepository {
    base_path: PathBuf,
}

impl FileAssessmentRepository {
    /// Create a new file repository rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileAssessmentRepository::new("./data/assessments");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one user's records
    fn user_dir(&self, user_id: &UserId) -> PathBuf {
        self.base_path.join(dir_name(user_id))
    }

    async fn read_record(path: &Path) -> Result<AssessmentRecord, StorageError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        serde_yaml::from_str(&yaml).map_err(|e| StorageError::DeserializationFailed(e.to_string()))
    }

    async fn write_record(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        let dir = self.user_dir(&record.user_id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        let yaml = serde_yaml::to_string(record)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        fs::write(dir.join(format!("{}.yaml", record.id)), yaml)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))
    }
}

/// Directory name for a user id.
///
/// Hex keeps distinct ids in distinct directories and never yields `.`,
/// `..` or a path separator.
fn dir_name(user_id: &UserId) -> String {
    hex::encode(user_id.as_str())
}

#[async_trait]
impl AssessmentRepository for FileAssessmentRepository {
    async fn load_latest(&self, user_id: &UserId) -> Result<Option<PreviousAssessment>, DomainError> {
        let dir = self.user_dir(user_id);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::IoError(e.to_string()).into()),
        };

        let mut latest: Option<AssessmentRecord> = None;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            match Self::read_record(&path).await {
                Ok(record) if record.user_id != *user_id => {
                    tracing::warn!(path = %path.display(), "skipping assessment owned by another user");
                }
                Ok(record) => {
                    if latest.as_ref().map_or(true, |l| record.created_at >= l.created_at) {
                        latest = Some(record);
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable assessment file");
                }
            }
        }

        Ok(latest.map(AssessmentRecord::into_previous))
    }

    async fn save(
        &self,
        user_id: &UserId,
        snapshot: &AssessmentSnapshot,
    ) -> Result<SavedAssessment, DomainError> {
        let record = AssessmentRecord::from_snapshot(user_id, snapshot, Timestamp::now());
        self.write_record(&record).await?;
        tracing::debug!(id = %record.id, user = %user_id, "assessment written");
        Ok(SavedAssessment {
            id: record.id,
            created_at: record.created_at,
        })
    }
}
