use crate::routes::{grade, health, me, student, tags};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        student::get_student_header,
        student::get_programs,
        student::get_registration,
        student::get_prerequisites,
        student::get_restrictions,
        student::get_holds,
        student::get_ferpa,
        student::get_load,
        student::get_cart,
        grade::get_grade_points,
        tags::get_tags,
        me::get_navigation,
        me::get_section_action
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Students", description = "Student records and tags"),
        (name = "Registration", description = "Registration eligibility, prerequisites and load"),
        (name = "Restrictions", description = "Restrictions, holds and FERPA"),
        (name = "Grades", description = "Grade point calculation"),
        (name = "Current user", description = "Views for the authenticated person"),
    ),
    info(
        title = "Student Rules API",
        version = "1.0.0",
        description = "Student eligibility, restriction and grade rules",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/health",
            "/students/{id}",
            "/students/{id}/prerequisites/{section_id}",
            "/grade-points",
            "/me/navigation",
            "/me/sections/{code}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert!(
            doc.components
                .as_ref()
                .is_some_and(|c| c.security_schemes.contains_key("jwt"))
        );
    }
}
