pub mod course;
pub mod course_sec;
pub mod department;
pub mod grade_scale;
pub mod options_meta;
pub mod person;
pub mod restriction;
pub mod restriction_code;
pub mod stu_acad_cred;
pub mod stu_course_sec;
pub mod stu_program;
pub mod stu_rgn_cart;
pub mod student;
pub mod student_load_rule;
