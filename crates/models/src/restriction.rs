use serde::Serialize;
use std::collections::BTreeMap;

/// Restriction code reserved for privacy-protected records
pub const FERPA_CODE: &str = "FERPA";

/// Severity at which a restriction prevents course registration
pub const REGISTRATION_BLOCK_SEVERITY: i32 = 99;

/// A student's active restriction together with whom to contact about it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestrictionSummary {
    pub code: String,
    pub severity: i32,
    pub description: Option<String>,
    pub department_name: Option<String>,
    pub department_email: Option<String>,
    pub department_phone: Option<String>,
}

impl RestrictionSummary {
    pub fn blocks_registration(&self) -> bool {
        self.severity == REGISTRATION_BLOCK_SEVERITY
    }
}

/// Collapses multiple rows for the same code into one summary per code
///
/// The most severe row wins; the result is ordered by code.
pub fn collapse_by_code(rows: impl IntoIterator<Item = RestrictionSummary>) -> Vec<RestrictionSummary> {
    let mut by_code: BTreeMap<String, RestrictionSummary> = BTreeMap::new();

    for row in rows {
        match by_code.get(&row.code) {
            Some(existing) if existing.severity >= row.severity => {}
            _ => {
                by_code.insert(row.code.clone(), row);
            }
        }
    }

    by_code.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(code: &str, severity: i32) -> RestrictionSummary {
        RestrictionSummary {
            code: code.to_string(),
            severity,
            description: Some(format!("{code} hold")),
            department_name: Some("Registrar".to_string()),
            department_email: None,
            department_phone: None,
        }
    }

    #[test]
    fn test_collapse_by_code() {
        let rows = vec![
            summary("LIB", 10),
            summary("BUS", 50),
            summary("BUS", 99),
            summary("LIB", 5),
        ];

        let collapsed = collapse_by_code(rows);
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].code, "BUS");
        assert_eq!(collapsed[0].severity, 99);
        assert!(collapsed[0].blocks_registration());
        assert_eq!(collapsed[1].code, "LIB");
        assert_eq!(collapsed[1].severity, 10);
    }
}
