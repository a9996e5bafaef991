use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/participation.ts")]
pub struct Participation {
    // 唯一 ID
    pub id: i64,
    // 初始化状态
    pub initialization_state: InitializationState,
    // 评分结果
    #[serde(default)]
    pub results: Vec<ExerciseResult>,
    // 所属练习 ID（非拥有关系，仅用于导航）
    #[serde(default)]
    pub exercise_id: Option<i64>,
    // 初始化时间
    #[serde(default)]
    pub initialization_date: Option<DateTime<Utc>>,
}

impl Participation {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// 最新的一条评分结果
    pub fn latest_result(&self) -> Option<&ExerciseResult> {
        self.results.last()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/participation.ts")]
pub enum InitializationState {
    Uninitialized,
    RepoCopied,
    RepoConfigured,
    BuildPlanCopied,
    BuildPlanConfigured,
    Initialized,
    Finished,
    Inactive,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/participation.ts")]
pub struct ExerciseResult {
    pub id: i64,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub successful: Option<bool>,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub feedbacks: Vec<Feedback>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/participation.ts")]
pub struct Feedback {
    // 测试用例或评分项名称
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub detail_text: Option<String>,
    // 是否通过
    #[serde(default)]
    pub positive: Option<bool>,
}
