//! View data for the pages that show student rules.
//!
//! These helpers only decide what a page should show; rendering belongs to
//! whoever consumes the JSON.

use chrono::NaiveDate;
use models::{
    restriction::RestrictionSummary,
    status::{ProgramStatus, StudentStatus},
};
use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;

const REGISTRATION_BLOCK_NOTICE: &str = "Restricted from registering for courses.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn shown_if(condition: bool) -> Self {
        if condition { Self::Visible } else { Self::Hidden }
    }
}

/// Student menu is only for people with a student record
pub fn student_menu(is_student: bool) -> Visibility {
    Visibility::shown_if(is_student)
}

pub fn registration_link(registration_open: bool, is_student: bool) -> Visibility {
    Visibility::shown_if(registration_open && is_student)
}

/// A section cannot be registered for twice
pub fn section_register_action(already_enrolled: bool) -> Visibility {
    Visibility::shown_if(!already_enrolled)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Status label for the student header; unknown codes read as inactive
///
/// Graduated students are labelled `Graduated` rather than folded into `Inactive`.
pub fn student_status_label(code: &str) -> &'static str {
    StudentStatus::from_str(code)
        .map(|status| status.label())
        .unwrap_or(StudentStatus::Inactive.label())
}

/// Program status fields are read-only once the program is graduated
pub fn program_status_readonly(code: &str) -> bool {
    ProgramStatus::from_str(code).is_ok_and(|status| status.is_locked())
}

/// `Contact: Dept | email | phone`, plus the registration notice for blocking restrictions
pub fn restriction_contact(restriction: &RestrictionSummary) -> String {
    let mut parts = vec![format!(
        "Contact: {}",
        restriction.department_name.as_deref().unwrap_or_default()
    )];

    for detail in [&restriction.department_email, &restriction.department_phone] {
        if let Some(value) = detail.as_deref().filter(|v| !v.trim().is_empty()) {
            parts.push(value.to_string());
        }
    }

    if restriction.blocks_registration() {
        parts.push(REGISTRATION_BLOCK_NOTICE.to_string());
    }

    parts.join(" | ")
}

/// e.g. `Mon, Jan 15, 2024`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%a, %b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restriction(severity: i32, email: Option<&str>, phone: Option<&str>) -> RestrictionSummary {
        RestrictionSummary {
            code: "BUS".to_string(),
            severity,
            description: Some("Unpaid balance".to_string()),
            department_name: Some("Business Office".to_string()),
            department_email: email.map(str::to_string),
            department_phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn test_restriction_contact() {
        assert_eq!(
            restriction_contact(&restriction(99, Some("bursar@example.edu"), Some("555-0100"))),
            "Contact: Business Office | bursar@example.edu | 555-0100 | Restricted from registering for courses."
        );
        assert_eq!(
            restriction_contact(&restriction(10, Some(""), Some("555-0100"))),
            "Contact: Business Office | 555-0100"
        );
        assert_eq!(
            restriction_contact(&restriction(10, None, None)),
            "Contact: Business Office"
        );
    }

    #[test]
    fn test_visibility() {
        assert_eq!(student_menu(false), Visibility::Hidden);
        assert_eq!(student_menu(true), Visibility::Visible);

        assert_eq!(registration_link(true, true), Visibility::Visible);
        assert_eq!(registration_link(false, true), Visibility::Hidden);
        assert_eq!(registration_link(true, false), Visibility::Hidden);

        assert_eq!(section_register_action(true), Visibility::Hidden);
        assert_eq!(section_register_action(false), Visibility::Visible);
    }

    #[test]
    fn test_visibility_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Visibility::Hidden).unwrap(),
            "\"hidden\""
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
        assert_eq!(student_status_label("A"), "Active");
        assert_eq!(student_status_label("G"), "Graduated");
        assert_eq!(student_status_label("?"), "Inactive");
    }

    #[test]
    fn test_program_status_readonly() {
        assert!(program_status_readonly("G"));
        assert!(!program_status_readonly("A"));
        assert!(!program_status_readonly(""));
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(display_date(date), "Mon, Jan 15, 2024");
    }
}
