//! 参与状态判定
//!
//! 给定练习、其参与记录与当前时间，得出唯一的 [`ParticipationStatus`]。
//! 规则按优先级依次匹配，首个命中的规则生效。

use chrono::{DateTime, Utc};

use crate::models::{
    Exercise, ExerciseKind, InitializationState, Participation, ParticipationStatus, QuizDetails,
};

/// 判定练习的参与状态
pub fn classify(exercise: &Exercise, now: DateTime<Utc>) -> ParticipationStatus {
    let participation = exercise.current_participation();

    match &exercise.kind {
        ExerciseKind::Quiz(quiz) => {
            return classify_quiz(quiz, exercise.due_date, participation, now);
        }
        ExerciseKind::Modeling(_) | ExerciseKind::Text => {
            if let Some(status) = editor_status(&exercise.kind, participation) {
                return status;
            }
        }
        ExerciseKind::Programming(_) => {}
    }

    match participation.map(|p| p.initialization_state) {
        None => ParticipationStatus::Uninitialized,
        Some(InitializationState::Initialized) => ParticipationStatus::Initialized,
        Some(_) => ParticipationStatus::Inactive,
    }
}

fn classify_quiz(
    quiz: &QuizDetails,
    due_date: Option<DateTime<Utc>>,
    participation: Option<&Participation>,
    now: DateTime<Utc>,
) -> ParticipationStatus {
    let not_started = !quiz.is_planned_to_start || is_after(quiz.release_date, now);
    if not_started && quiz.visible_to_students {
        return ParticipationStatus::QuizNotStarted;
    }

    let Some(participation) = participation else {
        let still_open = !quiz.is_planned_to_start || is_after(due_date, now);
        return if still_open && quiz.visible_to_students {
            ParticipationStatus::QuizUninitialized
        } else {
            ParticipationStatus::QuizNotParticipated
        };
    };

    let running = is_after(due_date, now);
    match participation.initialization_state {
        InitializationState::Initialized if running => ParticipationStatus::QuizActive,
        InitializationState::Finished if running => ParticipationStatus::QuizSubmitted,
        _ if !participation.has_results() => ParticipationStatus::QuizNotParticipated,
        _ => ParticipationStatus::QuizFinished,
    }
}

/// 建模、文本练习在编辑器中打开时的状态
fn editor_status(
    kind: &ExerciseKind,
    participation: Option<&Participation>,
) -> Option<ParticipationStatus> {
    let participation = participation?;
    if !matches!(
        participation.initialization_state,
        InitializationState::Initialized | InitializationState::Finished
    ) {
        return None;
    }
    match kind {
        ExerciseKind::Modeling(_) => Some(ParticipationStatus::ModelingExercise),
        ExerciseKind::Text => Some(ParticipationStatus::TextExercise),
        _ => None,
    }
}

/// 缺失的时间永远不在 `now` 之后
pub(crate) fn is_after(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    date.is_some_and(|date| date > now)
}

/// 缺失的时间永远不在 `now` 之前
pub(crate) fn is_before(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    date.is_some_and(|date| date < now)
}
