pub mod cart;
pub mod eligibility;
pub mod enrollment;
pub mod grade;
pub mod load;
pub mod options;
pub mod prerequisite;
pub mod restriction;
pub mod student;
