pub mod me;
pub mod rules;
pub mod student;
