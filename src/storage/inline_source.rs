use async_trait::async_trait;
use tracing::debug;

use super::{SnapshotSource, parse_snapshots, select_course};
use crate::config::SnapshotConfig;
use crate::errors::Result;
use crate::models::CourseSnapshot;

/// 内存中的课程快照
pub struct InlineSnapshotSource {
    snapshots: Vec<CourseSnapshot>,
}

impl InlineSnapshotSource {
    pub fn new(snapshots: Vec<CourseSnapshot>) -> Self {
        Self { snapshots }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_snapshots(json)?))
    }

    pub fn from_config(config: &SnapshotConfig) -> Result<Self> {
        let source = Self::from_json(&config.inline)?;
        debug!(
            "InlineSnapshotSource initialized with {} course(s)",
            source.snapshots.len()
        );
        Ok(source)
    }
}

#[async_trait]
impl SnapshotSource for InlineSnapshotSource {
    async fn fetch_course_snapshot(&self, course_id: i64) -> Result<CourseSnapshot> {
        select_course(self.snapshots.clone(), course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOTS: &str = r#"[
        {
            "course": { "id": 3, "title": "Databases" },
            "exercises": [
                { "id": 1, "title": "ER Model", "kind": { "type": "modeling", "diagram_type": "CLASS_DIAGRAM" } },
                { "id": 2, "title": "Essay", "kind": { "type": "text" }, "due_date": "2024-05-01T10:00:00Z" }
            ]
        }
    ]"#;

    #[tokio::test]
    async fn test_fetch_known_course() {
        let source = InlineSnapshotSource::from_json(SNAPSHOTS).unwrap();
        let snapshot = source.fetch_course_snapshot(3).await.unwrap();
        assert_eq!(snapshot.course.title, "Databases");
        assert_eq!(snapshot.exercises.len(), 2);
        assert!(snapshot.exercises[0].participations.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_unknown_course() {
        let source = InlineSnapshotSource::from_json(SNAPSHOTS).unwrap();
        let err = source.fetch_course_snapshot(4).await.unwrap_err();
        assert_eq!(err.code(), "E006");
        assert_eq!(err.message(), "Course 4 not found in snapshot");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = InlineSnapshotSource::from_json("{ not json").err().unwrap();
        assert_eq!(err.code(), "E004");
    }
}
