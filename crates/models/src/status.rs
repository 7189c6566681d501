use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator, IntoStaticStr};

/// Status stored on the `student` row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, EnumIter, AsRefStr, EnumProperty,
)]
pub enum StudentStatus {
    #[strum(serialize = "A", props(label = "Active"))]
    Active,
    #[strum(serialize = "I", props(label = "Inactive"))]
    Inactive,
    #[strum(serialize = "G", props(label = "Graduated"))]
    Graduated,
}

impl StudentStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        self.get_str("label").unwrap_or_default()
    }
}

/// Current status of a student's academic program (`stu_program.curr_status`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, EnumIter, AsRefStr, EnumProperty,
)]
pub enum ProgramStatus {
    #[strum(serialize = "A", props(label = "Active"))]
    Active,
    #[strum(serialize = "I", props(label = "Inactive"))]
    Inactive,
    #[strum(serialize = "P", props(label = "Potential"))]
    Potential,
    #[strum(serialize = "W", props(label = "Withdrawn"))]
    Withdrawn,
    #[strum(serialize = "C", props(label = "Changed Mind"))]
    ChangedMind,
    #[strum(serialize = "G", props(label = "Graduated"))]
    Graduated,
}

impl ProgramStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        self.get_str("label").unwrap_or_default()
    }

    /// Graduated programs are frozen: status and status dates become read-only
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Graduated)
    }
}

/// Status of a student's enrollment in a course section (`stu_course_sec.status`)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    EnumProperty,
    IntoStaticStr,
)]
pub enum EnrollmentStatus {
    #[strum(serialize = "A", props(label = "Add"))]
    Add,
    #[strum(serialize = "N", props(label = "New"))]
    New,
    #[strum(serialize = "D", props(label = "Drop"))]
    Drop,
    #[strum(serialize = "W", props(label = "Withdrawn"))]
    Withdrawn,
    #[strum(serialize = "C", props(label = "Cancelled"))]
    Cancelled,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        self.get_str("label").unwrap_or_default()
    }

    /// Whether an enrollment in this status occupies a seat in the student's load
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Add | Self::New)
    }

    /// Status codes that count as a current enrollment, for use in `IN (...)` filters
    pub fn current_codes() -> Vec<&'static str> {
        EnrollmentStatus::iter()
            .filter(EnrollmentStatus::is_current)
            .map(<&'static str>::from)
            .collect()
    }
}
