pub mod courses;
pub mod exercises;
pub mod participations;

#[cfg(test)]
pub(crate) mod fixtures;

pub use courses::entities::{Course, CourseRole, CourseSnapshot};
pub use exercises::entities::{
    DiagramType, Exercise, ExerciseKind, ModelingDetails, ParticipationStatus,
    ProgrammingDetails, QuizDetails,
};
pub use exercises::requests::ProjectionOptions;
pub use exercises::responses::{AnnotatedExercise, ExerciseListView};
pub use participations::entities::{ExerciseResult, Feedback, InitializationState, Participation};
