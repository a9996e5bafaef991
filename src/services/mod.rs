pub mod exercises;
pub mod instructions;

pub use exercises::ExerciseService;
