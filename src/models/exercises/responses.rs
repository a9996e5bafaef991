use serde::Serialize;
use ts_rs::TS;

use crate::models::exercises::entities::{Exercise, ParticipationStatus};
use crate::services::instructions::InstructionTask;

/// 附带派生状态的练习
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct AnnotatedExercise {
    pub exercise: Exercise,
    pub participation_status: ParticipationStatus,
    pub is_active_quiz: bool,
    pub is_practice_mode_available: bool,
    pub is_at_least_tutor: bool,
    pub is_at_least_instructor: bool,
    // 编程练习题目说明中的任务
    pub tasks: Vec<InstructionTask>,
    // 在当前筛选条件下是否显示
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ExerciseListView {
    // 按截止时间排序，包含被隐藏的练习
    pub exercises: Vec<AnnotatedExercise>,
    pub num_inactive: usize,
}

impl ExerciseListView {
    /// 需要展示的练习
    pub fn visible_exercises(&self) -> impl Iterator<Item = &AnnotatedExercise> {
        self.exercises.iter().filter(|item| item.visible)
    }

    pub fn get(&self, exercise_id: i64) -> Option<&AnnotatedExercise> {
        self.exercises
            .iter()
            .find(|item| item.exercise.id == exercise_id)
    }

    pub fn get_mut(&mut self, exercise_id: i64) -> Option<&mut AnnotatedExercise> {
        self.exercises
            .iter_mut()
            .find(|item| item.exercise.id == exercise_id)
    }
}
