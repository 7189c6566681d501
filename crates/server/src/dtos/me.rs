use crate::views::Visibility;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Navigation toggles for the signed-in person
#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub student_menu: Visibility,
    pub registration: Visibility,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SectionActionQuery {
    pub term: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionActionResponse {
    pub section_code: String,
    pub term: String,
    pub register: Visibility,
}
