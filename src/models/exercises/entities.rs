use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::participations::entities::Participation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct Exercise {
    // 唯一 ID
    pub id: i64,
    // 练习标题
    pub title: String,
    // 练习类型及其专有字段
    pub kind: ExerciseKind,
    // 截止时间
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    // 参与记录，第一条为当前参与
    #[serde(default)]
    pub participations: Vec<Participation>,
}

impl Exercise {
    /// 当前参与记录（列表中的第一条）
    pub fn current_participation(&self) -> Option<&Participation> {
        self.participations.first()
    }

    pub fn is_quiz(&self) -> bool {
        matches!(self.kind, ExerciseKind::Quiz(_))
    }

    pub fn quiz_details(&self) -> Option<&QuizDetails> {
        match &self.kind {
            ExerciseKind::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }
}

// 练习类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub enum ExerciseKind {
    Quiz(QuizDetails),
    Programming(ProgrammingDetails),
    Modeling(ModelingDetails),
    Text,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct QuizDetails {
    // 测验开放时间
    #[serde(default)]
    pub release_date: Option<DateTime<Utc>>,
    // 是否已计划开始
    #[serde(default)]
    pub is_planned_to_start: bool,
    // 结束后是否开放练习模式
    #[serde(default)]
    pub is_open_for_practice: bool,
    // 学生是否可见
    #[serde(default)]
    pub visible_to_students: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ProgrammingDetails {
    // 题目说明（含 [task] 标签的 markdown）
    #[serde(default)]
    pub problem_statement: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ModelingDetails {
    pub diagram_type: DiagramType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub enum DiagramType {
    ClassDiagram,
    ActivityDiagram,
    UseCaseDiagram,
    CommunicationDiagram,
}

/// 面向界面的参与状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub enum ParticipationStatus {
    QuizNotStarted,
    QuizUninitialized,
    QuizNotParticipated,
    QuizActive,
    QuizSubmitted,
    QuizFinished,
    ModelingExercise,
    TextExercise,
    Uninitialized,
    Initialized,
    Inactive,
}

impl ParticipationStatus {
    /// 测验仍可进入（未开始作答、作答中、已提交待结束）
    pub fn is_active_quiz(&self) -> bool {
        matches!(
            self,
            ParticipationStatus::QuizUninitialized
                | ParticipationStatus::QuizActive
                | ParticipationStatus::QuizSubmitted
        )
    }
}
