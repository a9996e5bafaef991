use crate::models::{Exercise, ExerciseListView, Participation};

const CODE_EDITOR_PREFIX: &str = "/code-editor";

/// 在所有练习的参与记录中按 ID 查找
pub fn find_participation(exercises: &[Exercise], participation_id: i64) -> Option<&Participation> {
    exercises
        .iter()
        .flat_map(|exercise| exercise.participations.iter())
        .find(|participation| participation.id == participation_id)
}

/// 从代码编辑器路径（`/code-editor/{participation_id}`）中解析参与记录 ID
pub fn participation_id_from_editor_path(path: &str) -> Option<i64> {
    if !path.starts_with(CODE_EDITOR_PREFIX) {
        return None;
    }
    path.rsplit('/').next()?.parse().ok()
}

impl ExerciseListView {
    pub fn find_participation(&self, participation_id: i64) -> Option<&Participation> {
        self.exercises
            .iter()
            .flat_map(|item| item.exercise.participations.iter())
            .find(|participation| participation.id == participation_id)
    }

    /// 代码编辑器路径对应的参与记录
    pub fn participation_for_editor_path(&self, path: &str) -> Option<&Participation> {
        self.find_participation(participation_id_from_editor_path(path)?)
    }
}
