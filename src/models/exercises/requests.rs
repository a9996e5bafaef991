use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::courses::entities::CourseRole;

/// 练习列表投影参数
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ProjectionOptions {
    // 只保留指定 ID 的练习
    #[serde(default)]
    pub filter_by_id: Option<i64>,
    // 是否显示已过截止时间的练习
    #[serde(default)]
    pub show_inactive: bool,
    // 当前用户在课程中的角色
    pub viewer_role: CourseRole,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            filter_by_id: None,
            show_inactive: false,
            viewer_role: CourseRole::Student,
        }
    }
}
