use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{SnapshotSource, parse_snapshots, select_course};
use crate::config::SnapshotConfig;
use crate::errors::{ExerciseBoardError, Result};
use crate::models::CourseSnapshot;

/// 从 JSON 文件读取课程快照，每次拉取都重新读取文件
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &SnapshotConfig) -> Result<Self> {
        if config.path.is_empty() {
            return Err(ExerciseBoardError::configuration(
                "snapshot.path must be set for the file snapshot source",
            ));
        }
        Ok(Self::new(&config.path))
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch_course_snapshot(&self, course_id: i64) -> Result<CourseSnapshot> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ExerciseBoardError::snapshot_fetch(format!(
                "Failed to read snapshot file {}: {e}",
                self.path.display()
            ))
        })?;
        debug!("Read snapshot file {}", self.path.display());
        select_course(parse_snapshots(&content)?, course_id)
    }
}
