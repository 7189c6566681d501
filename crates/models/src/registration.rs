use crate::term::TermCode;
use serde::Serialize;

/// System-wide registration settings kept in `options_meta`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationOptions {
    /// Maximum number of current sections a student may hold in a term
    pub max_courses: u32,
    /// Term that registration currently targets
    pub registration_term: TermCode,
    /// Whether students may register at all right now
    pub registration_open: bool,
}

/// Everything the registration rule needs to know about a student
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationFacts {
    /// Current (`A`/`N`) sections held in the term; no enrollment rows means zero
    pub current_courses: u64,
    /// A severity 99 restriction is in force
    pub has_registration_hold: bool,
    /// Student status and at least one program status are both active
    pub is_active: bool,
}

/// Outcome of the registration rule, first failing check wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationDecision {
    Allowed,
    CourseLimitReached,
    RegistrationHold,
    InactiveStatus,
}

impl RegistrationDecision {
    pub fn evaluate(facts: RegistrationFacts, max_courses: u32) -> Self {
        if facts.current_courses >= u64::from(max_courses) {
            Self::CourseLimitReached
        } else if facts.has_registration_hold {
            Self::RegistrationHold
        } else if !facts.is_active {
            Self::InactiveStatus
        } else {
            Self::Allowed
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eligible() -> RegistrationFacts {
        RegistrationFacts {
            current_courses: 0,
            has_registration_hold: false,
            is_active: true,
        }
    }

    #[test]
    fn test_allowed_under_limit() {
        let facts = RegistrationFacts {
            current_courses: 3,
            ..eligible()
        };
        assert_eq!(
            RegistrationDecision::evaluate(facts, 4),
            RegistrationDecision::Allowed
        );
        assert!(RegistrationDecision::evaluate(facts, 4).is_allowed());
    }

    #[test]
    fn test_course_limit_wins_over_everything() {
        for hold in [false, true] {
            for active in [false, true] {
                let facts = RegistrationFacts {
                    current_courses: 4,
                    has_registration_hold: hold,
                    is_active: active,
                };
                assert_eq!(
                    RegistrationDecision::evaluate(facts, 4),
                    RegistrationDecision::CourseLimitReached
                );
            }
        }
    }

    #[test]
    fn test_hold_blocks_with_no_courses() {
        let facts = RegistrationFacts {
            has_registration_hold: true,
            ..eligible()
        };
        assert_eq!(
            RegistrationDecision::evaluate(facts, 4),
            RegistrationDecision::RegistrationHold
        );
    }

    #[test]
    fn test_inactive_student() {
        let facts = RegistrationFacts {
            is_active: false,
            ..eligible()
        };
        assert_eq!(
            RegistrationDecision::evaluate(facts, 4),
            RegistrationDecision::InactiveStatus
        );
    }

    #[test]
    fn test_zero_limit_blocks_everyone() {
        assert_eq!(
            RegistrationDecision::evaluate(eligible(), 0),
            RegistrationDecision::CourseLimitReached
        );
    }

    #[test]
    fn test_decision_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RegistrationDecision::CourseLimitReached).unwrap(),
            "\"course_limit_reached\""
        );
    }
}
