pub mod grade;
pub mod ids;
pub mod load;
pub mod prerequisite;
pub mod registration;
pub mod restriction;
pub mod status;
pub mod tags;
pub mod term;
