pub mod clock;
pub mod startup;
