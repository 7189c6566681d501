use crate::state::AppState;
use axum::{Router, routing::get};

pub mod grade;
pub mod health;
pub mod me;
pub mod student;
pub mod tags;

/// Public routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/students/{id}", get(student::get_student_header))
        .route("/students/{id}/programs", get(student::get_programs))
        .route(
            "/students/{id}/registration",
            get(student::get_registration),
        )
        .route(
            "/students/{id}/prerequisites/{section_id}",
            get(student::get_prerequisites),
        )
        .route(
            "/students/{id}/restrictions",
            get(student::get_restrictions),
        )
        .route("/students/{id}/holds", get(student::get_holds))
        .route("/students/{id}/ferpa", get(student::get_ferpa))
        .route("/students/{id}/load", get(student::get_load))
        .route("/students/{id}/cart", get(student::get_cart))
        .route("/grade-points", get(grade::get_grade_points))
        .route("/tags", get(tags::get_tags))
}

/// Routes for the signed-in person, nested under `/me` behind token validation
pub fn me_router() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(me::get_navigation))
        .route("/sections/{code}", get(me::get_section_action))
}
