//! 课程快照数据源
//!
//! 练习数据由外部拉取，核心逻辑只读取完整快照。数据源按名称注册，
//! 启动时根据 `snapshot.type` 选择。

pub mod file_source;
pub mod inline_source;
pub mod register;

use std::sync::Arc;

use tracing::info;

use crate::config::SnapshotConfig;
use crate::errors::{ExerciseBoardError, Result};
use crate::models::CourseSnapshot;

#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    // 拉取课程及其全部练习、参与记录、评分结果
    async fn fetch_course_snapshot(&self, course_id: i64) -> Result<CourseSnapshot>;
}

/// 根据配置创建数据源
pub fn create_snapshot_source(config: &SnapshotConfig) -> Result<Arc<dyn SnapshotSource>> {
    let constructor = register::get_snapshot_source_plugin(&config.source_type).ok_or_else(|| {
        ExerciseBoardError::snapshot_source_not_found(format!(
            "Snapshot source '{}' not found in registry",
            config.source_type
        ))
    })?;
    let source = constructor(config)?;
    info!("Snapshot source '{}' initialized", config.source_type);
    Ok(Arc::from(source))
}

pub(crate) fn parse_snapshots(json: &str) -> Result<Vec<CourseSnapshot>> {
    Ok(serde_json::from_str(json)?)
}

pub(crate) fn select_course(
    snapshots: Vec<CourseSnapshot>,
    course_id: i64,
) -> Result<CourseSnapshot> {
    snapshots
        .into_iter()
        .find(|snapshot| snapshot.course.id == course_id)
        .ok_or_else(|| {
            ExerciseBoardError::not_found(format!("Course {course_id} not found in snapshot"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(source_type: &str, inline: &str) -> SnapshotConfig {
        SnapshotConfig {
            source_type: source_type.to_string(),
            path: String::new(),
            inline: inline.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_inline_source() {
        let source = create_snapshot_source(&config(
            "inline",
            r#"[{ "course": { "id": 2, "title": "Compilers" } }]"#,
        ))
        .unwrap();
        let snapshot = source.fetch_course_snapshot(2).await.unwrap();
        assert_eq!(snapshot.course.title, "Compilers");
    }

    #[test]
    fn test_unknown_source_type() {
        let err = create_snapshot_source(&config("graphql", "")).err().unwrap();
        assert_eq!(err.code(), "E002");
    }
}
