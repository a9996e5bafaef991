//! 练习列表投影
//!
//! 过滤、标注并按截止时间排序课程练习。隐藏的练习同样会被标注，
//! 只通过 `visible` 标记与 `num_inactive` 计数区分。

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::status::{classify, is_after, is_before};
use crate::models::{
    AnnotatedExercise, CourseRole, Exercise, ExerciseListView, Participation, ProjectionOptions,
};

/// 生成练习列表视图
pub fn project(
    exercises: Vec<Exercise>,
    now: DateTime<Utc>,
    options: &ProjectionOptions,
) -> ExerciseListView {
    let mut annotated: Vec<AnnotatedExercise> = exercises
        .into_iter()
        .filter(|exercise| options.filter_by_id.is_none_or(|id| exercise.id == id))
        .map(|exercise| {
            let visible = is_shown(&exercise, now, options.show_inactive);
            annotate(exercise, now, options.viewer_role, visible)
        })
        .collect();

    let num_inactive = annotated.iter().filter(|item| !item.visible).count();

    // sort_by 是稳定排序，没有截止时间的练习保持原有相对顺序
    annotated.sort_by(|a, b| compare_due_dates(a.exercise.due_date, b.exercise.due_date));

    debug!(
        "Projected {} exercise(s), {} inactive",
        annotated.len(),
        num_inactive
    );

    ExerciseListView {
        exercises: annotated,
        num_inactive,
    }
}

/// 练习是否在列表中显示
pub fn is_shown(exercise: &Exercise, now: DateTime<Utc>, show_inactive: bool) -> bool {
    show_inactive
        || exercise.is_quiz()
        || exercise.due_date.is_none()
        || is_after(exercise.due_date, now)
}

/// 有截止时间的排在前面并升序，没有截止时间的排在最后
fn compare_due_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

fn annotate(
    mut exercise: Exercise,
    now: DateTime<Utc>,
    viewer_role: CourseRole,
    visible: bool,
) -> AnnotatedExercise {
    link_current_participation(&mut exercise);

    let participation_status = classify(&exercise, now);
    let (is_active_quiz, is_practice_mode_available) = match exercise.quiz_details() {
        Some(quiz) => (
            participation_status.is_active_quiz(),
            quiz.is_planned_to_start && quiz.is_open_for_practice && is_before(exercise.due_date, now),
        ),
        None => (false, false),
    };

    let tasks = exercise.instruction_tasks();

    AnnotatedExercise {
        exercise,
        participation_status,
        is_active_quiz,
        is_practice_mode_available,
        is_at_least_tutor: viewer_role.is_at_least_tutor(),
        is_at_least_instructor: viewer_role.is_at_least_instructor(),
        tasks,
        visible,
    }
}

fn link_current_participation(exercise: &mut Exercise) {
    let exercise_id = exercise.id;
    if let Some(participation) = exercise.participations.first_mut() {
        participation.exercise_id = Some(exercise_id);
    }
}

impl AnnotatedExercise {
    /// 开始或继续练习后，用服务端返回的参与记录替换现有记录并重新计算派生字段
    pub fn replace_participation(&mut self, participation: Participation, now: DateTime<Utc>) {
        self.exercise.participations = vec![participation];
        link_current_participation(&mut self.exercise);

        self.participation_status = classify(&self.exercise, now);
        if let Some(quiz) = self.exercise.quiz_details() {
            self.is_active_quiz = self.participation_status.is_active_quiz();
            self.is_practice_mode_available = quiz.is_planned_to_start
                && quiz.is_open_for_practice
                && is_before(self.exercise.due_date, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::*;
    use crate::models::{
        ExerciseKind, InitializationState, ParticipationStatus, ProgrammingDetails, QuizDetails,
    };

    fn ids(view: &ExerciseListView) -> Vec<i64> {
        view.exercises.iter().map(|item| item.exercise.id).collect()
    }

    #[test]
    fn test_sort_puts_undated_last_in_original_order() {
        // 1 与 3 没有截止时间
        let exercises = vec![
            text(1, None),
            text(2, Some(at(2024, 1, 1))),
            text(3, None),
            text(4, Some(at(2023, 1, 1))),
        ];
        let options = ProjectionOptions {
            show_inactive: true,
            ..ProjectionOptions::default()
        };
        let view = project(exercises, now(), &options);
        assert_eq!(ids(&view), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_filter_by_id_restricts_list_and_count() {
        let exercises = vec![
            programming(4, Some(at(2024, 1, 1))),
            programming(5, Some(at(2024, 1, 1))),
            programming(6, Some(at(2030, 1, 1))),
        ];
        let options = ProjectionOptions {
            filter_by_id: Some(5),
            ..ProjectionOptions::default()
        };
        let view = project(exercises.clone(), now(), &options);
        assert_eq!(ids(&view), vec![5]);
        assert_eq!(view.num_inactive, 1);

        let missing = ProjectionOptions {
            filter_by_id: Some(99),
            ..ProjectionOptions::default()
        };
        let view = project(exercises, now(), &missing);
        assert!(view.exercises.is_empty());
        assert_eq!(view.num_inactive, 0);
    }

    #[test]
    fn test_visibility_partition() {
        let exercises = vec![
            programming(1, Some(at(2024, 5, 1))),
            quiz(2, released_quiz(), Some(at(2024, 5, 1))),
            text(3, None),
            modeling(4, Some(at(2024, 7, 1))),
            text(5, Some(at(2024, 5, 2))),
        ];
        let view = project(exercises.clone(), now(), &ProjectionOptions::default());
        assert_eq!(view.num_inactive, 2);
        assert_eq!(view.exercises.len(), 5);
        let visible: Vec<i64> = view.visible_exercises().map(|i| i.exercise.id).collect();
        assert_eq!(visible, vec![2, 4, 3]);

        let options = ProjectionOptions {
            show_inactive: true,
            ..ProjectionOptions::default()
        };
        let view = project(exercises, now(), &options);
        assert_eq!(view.num_inactive, 0);
        assert_eq!(view.visible_exercises().count(), 5);
    }

    #[test]
    fn test_exercise_due_exactly_now_is_inactive() {
        let view = project(
            vec![programming(1, Some(now())), programming(2, Some(at(2024, 6, 2)))],
            now(),
            &ProjectionOptions::default(),
        );
        assert!(!view.get(1).unwrap().visible);
        assert!(view.get(2).unwrap().visible);
        assert_eq!(view.num_inactive, 1);
    }

    #[test]
    fn test_programming_tasks_are_attached() {
        let mut exercise = programming(1, None);
        exercise.kind = ExerciseKind::Programming(ProgrammingDetails {
            problem_statement: Some("[task]Write tests(testA)[/task]".to_string()),
        });
        let view = project(
            vec![exercise, text(2, None)],
            now(),
            &ProjectionOptions::default(),
        );
        let tasks = &view.get(1).unwrap().tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Write tests");
        assert!(view.get(2).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_hidden_exercises_are_still_annotated() {
        let exercise = with_participation(
            programming(1, Some(at(2024, 5, 1))),
            participation(10, InitializationState::Initialized),
        );
        let view = project(vec![exercise], now(), &ProjectionOptions::default());
        let item = &view.exercises[0];
        assert!(!item.visible);
        assert_eq!(item.participation_status, ParticipationStatus::Initialized);
        assert_eq!(item.exercise.participations[0].exercise_id, Some(1));
    }

    #[test]
    fn test_quiz_flags() {
        let practice = QuizDetails {
            is_open_for_practice: true,
            ..released_quiz()
        };
        let over = with_participation(
            quiz(1, practice.clone(), Some(at(2024, 5, 20))),
            graded(participation(11, InitializationState::Finished), &["Q1"]),
        );
        let running = with_participation(
            quiz(2, practice, Some(at(2024, 6, 20))),
            participation(12, InitializationState::Initialized),
        );
        let view = project(vec![over, running], now(), &ProjectionOptions::default());

        let over = view.get(1).unwrap();
        assert_eq!(over.participation_status, ParticipationStatus::QuizFinished);
        assert!(!over.is_active_quiz);
        assert!(over.is_practice_mode_available);

        let running = view.get(2).unwrap();
        assert_eq!(running.participation_status, ParticipationStatus::QuizActive);
        assert!(running.is_active_quiz);
        assert!(!running.is_practice_mode_available);
    }

    #[test]
    fn test_practice_mode_requires_due_date() {
        let details = QuizDetails {
            is_open_for_practice: true,
            ..released_quiz()
        };
        let view = project(
            vec![quiz(1, details, None)],
            now(),
            &ProjectionOptions::default(),
        );
        assert!(!view.exercises[0].is_practice_mode_available);
    }

    #[test]
    fn test_role_flags_follow_viewer_role() {
        let options = ProjectionOptions {
            viewer_role: CourseRole::Tutor,
            ..ProjectionOptions::default()
        };
        let view = project(vec![text(1, None)], now(), &options);
        assert!(view.exercises[0].is_at_least_tutor);
        assert!(!view.exercises[0].is_at_least_instructor);

        let view = project(vec![text(1, None)], now(), &ProjectionOptions::default());
        assert!(!view.exercises[0].is_at_least_tutor);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let exercises = vec![
            text(1, None),
            quiz(2, released_quiz(), Some(at(2024, 6, 10))),
            programming(3, Some(at(2024, 6, 10))),
        ];
        let first = project(exercises.clone(), now(), &ProjectionOptions::default());
        let second = project(exercises, now(), &ProjectionOptions::default());
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![2, 3, 1]);
    }

    #[test]
    fn test_replace_participation_recomputes_status() {
        let view_source = vec![quiz(1, released_quiz(), Some(at(2024, 6, 20)))];
        let mut view = project(view_source, now(), &ProjectionOptions::default());
        let item = view.get_mut(1).unwrap();
        assert_eq!(item.participation_status, ParticipationStatus::QuizUninitialized);
        assert!(item.is_active_quiz);

        item.replace_participation(participation(30, InitializationState::Finished), now());
        assert_eq!(item.participation_status, ParticipationStatus::QuizSubmitted);
        assert_eq!(item.exercise.participations.len(), 1);
        assert_eq!(item.exercise.participations[0].exercise_id, Some(1));
    }

    #[test]
    fn test_replace_participation_on_programming_exercise() {
        let mut view = project(
            vec![programming(1, Some(at(2024, 7, 1)))],
            now(),
            &ProjectionOptions::default(),
        );
        let item = &mut view.exercises[0];
        assert_eq!(item.participation_status, ParticipationStatus::Uninitialized);
        item.replace_participation(participation(40, InitializationState::Initialized), now());
        assert_eq!(item.participation_status, ParticipationStatus::Initialized);
        assert!(!item.is_active_quiz);
    }
}
