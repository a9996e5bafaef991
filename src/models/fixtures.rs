//! 测试用的实体构造函数

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    DiagramType, Exercise, ExerciseKind, ExerciseResult, Feedback, InitializationState,
    ModelingDetails, Participation, ProgrammingDetails, QuizDetails,
};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn now() -> DateTime<Utc> {
    at(2024, 6, 1)
}

pub fn exercise(id: i64, kind: ExerciseKind, due_date: Option<DateTime<Utc>>) -> Exercise {
    Exercise {
        id,
        title: format!("Exercise {id}"),
        kind,
        due_date,
        participations: Vec::new(),
    }
}

pub fn programming(id: i64, due_date: Option<DateTime<Utc>>) -> Exercise {
    exercise(
        id,
        ExerciseKind::Programming(ProgrammingDetails::default()),
        due_date,
    )
}

pub fn modeling(id: i64, due_date: Option<DateTime<Utc>>) -> Exercise {
    exercise(
        id,
        ExerciseKind::Modeling(ModelingDetails {
            diagram_type: DiagramType::ClassDiagram,
        }),
        due_date,
    )
}

pub fn text(id: i64, due_date: Option<DateTime<Utc>>) -> Exercise {
    exercise(id, ExerciseKind::Text, due_date)
}

pub fn quiz(id: i64, details: QuizDetails, due_date: Option<DateTime<Utc>>) -> Exercise {
    exercise(id, ExerciseKind::Quiz(details), due_date)
}

/// 已发布、已计划开始、对学生可见的测验
pub fn released_quiz() -> QuizDetails {
    QuizDetails {
        release_date: Some(at(2024, 5, 1)),
        is_planned_to_start: true,
        is_open_for_practice: false,
        visible_to_students: true,
    }
}

pub fn participation(id: i64, state: InitializationState) -> Participation {
    Participation {
        id,
        initialization_state: state,
        results: Vec::new(),
        exercise_id: None,
        initialization_date: None,
    }
}

pub fn graded(mut participation: Participation, feedback_texts: &[&str]) -> Participation {
    participation.results.push(ExerciseResult {
        id: participation.id * 10,
        score: Some(100.0),
        successful: Some(true),
        completion_date: None,
        feedbacks: feedback_texts
            .iter()
            .map(|text| Feedback {
                text: Some(text.to_string()),
                detail_text: None,
                positive: Some(true),
            })
            .collect(),
    });
    participation
}

pub fn with_participation(mut exercise: Exercise, participation: Participation) -> Exercise {
    exercise.participations.push(participation);
    exercise
}
