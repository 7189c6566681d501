use crate::views::{
    Visibility, display_date, program_status_readonly, restriction_contact, student_status_label,
    yes_no,
};
use database::{entities::stu_program, services::student::StudentRecord};
use models::{restriction::RestrictionSummary, status::ProgramStatus};
use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;

/// Everything shown in the header above a student's record
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentHeaderResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Street lines followed by the city line, blanks omitted
    pub address: Vec<String>,
    pub birth_date: Option<String>,
    pub status: String,
    pub status_label: String,
    pub ferpa: bool,
    pub ferpa_label: String,
    pub restrictions: Vec<RestrictionResponse>,
    pub entry_date: String,
}

impl StudentHeaderResponse {
    pub fn new(record: StudentRecord, ferpa: bool, restrictions: Vec<RestrictionSummary>) -> Self {
        let name = record.full_name();
        let person = record.person.as_ref();

        let address = person
            .map(|p| {
                let street = join_present(&[&p.address1, &p.address2]);
                let city = join_present(&[&p.city, &p.state, &p.zip]);
                [street, city].into_iter().flatten().collect::<Vec<String>>()
            })
            .unwrap_or_default();

        Self {
            id: record.student.stu_id,
            name,
            email: person.and_then(|p| p.email.clone()),
            phone: person.and_then(|p| p.phone.clone()),
            address,
            birth_date: person.and_then(|p| p.dob).map(display_date),
            status_label: student_status_label(&record.student.status).to_string(),
            status: record.student.status,
            ferpa,
            ferpa_label: yes_no(ferpa).to_string(),
            restrictions: restrictions.iter().map(RestrictionResponse::from).collect(),
            entry_date: display_date(record.student.add_date),
        }
    }
}

fn join_present(parts: &[&Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    (!present.is_empty()).then(|| present.join(" "))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestrictionResponse {
    pub code: String,
    pub description: Option<String>,
    pub severity: i32,
    pub blocks_registration: bool,
    /// e.g. `Contact: Business Office | bursar@example.edu`
    pub contact: String,
}

impl From<&RestrictionSummary> for RestrictionResponse {
    fn from(restriction: &RestrictionSummary) -> Self {
        Self {
            code: restriction.code.clone(),
            description: restriction.description.clone(),
            severity: restriction.severity,
            blocks_registration: restriction.blocks_registration(),
            contact: restriction_contact(restriction),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HoldsResponse {
    pub blocked: bool,
    /// Departments to contact, sorted by name
    pub departments: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FerpaResponse {
    pub ferpa: bool,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub has_items: bool,
    /// Whether the cart page link should be offered
    pub cart_link: Visibility,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramResponse {
    pub code: String,
    pub status: String,
    pub status_label: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    /// Graduated programs can no longer have their status edited
    pub readonly: bool,
}

impl From<stu_program::Model> for ProgramResponse {
    fn from(program: stu_program::Model) -> Self {
        Self {
            status_label: ProgramStatus::from_str(&program.curr_status)
                .ok()
                .map(|status| status.label().to_string()),
            readonly: program_status_readonly(&program.curr_status),
            code: program.prog_code,
            status: program.curr_status,
            start_date: display_date(program.start_date),
            end_date: program.end_date.map(display_date),
        }
    }
}
