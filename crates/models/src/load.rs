use crate::term::TermCode;

/// Whether `word` appears as a whole word inside `list`
///
/// Lists are stored as free text such as `"FA,SP"` or `"UG GR"`, so any run of
/// non-alphanumeric characters separates words. Matching is case-sensitive.
pub fn contains_word(list: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }

    list.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|candidate| candidate == word)
}

/// Criteria a student load rule is matched against
#[derive(Debug, Clone, PartialEq)]
pub struct LoadQuery<'a> {
    pub term: &'a TermCode,
    pub credits: f64,
    pub level: &'a str,
}

/// The stored columns of a `student_load_rule` row that take part in matching
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRuleView<'a> {
    pub terms: &'a str,
    pub levels: &'a str,
    pub min_credits: f64,
    pub max_credits: f64,
    pub active: bool,
}

impl LoadRuleView<'_> {
    /// A rule applies when it is active, covers either term component, covers
    /// the level, and the credits fall within its inclusive range
    pub fn matches(&self, query: &LoadQuery<'_>) -> bool {
        let term_matches = query
            .term
            .components()
            .into_iter()
            .any(|part| contains_word(self.terms, part));

        self.active
            && term_matches
            && contains_word(self.levels, query.level)
            && self.min_credits <= query.credits
            && query.credits <= self.max_credits
    }
}
