use serde::{Deserialize, Serialize};

use crate::models::courses::entities::CourseRole;

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub snapshot: SnapshotConfig,
    pub dashboard: DashboardConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 快照数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(rename = "type")]
    pub source_type: String, // 数据源类型：file | inline
    pub path: String,        // file 数据源的 JSON 文件路径
    #[serde(default)]
    pub inline: String, // inline 数据源的 JSON 内容
}

/// 练习面板配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub course_id: i64,
    pub show_inactive: bool,
    #[serde(default)]
    pub filter_by_exercise_id: Option<i64>,
    pub viewer_role: CourseRole,
}
