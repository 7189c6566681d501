use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, convert::Infallible, str::FromStr};

/// How completed coursework is compared against a prerequisite list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrerequisitePolicy {
    /// Every distinct listed course must appear among the completed courses
    #[default]
    ExactSet,
    /// The number of listed codes (as written, duplicates included) must equal
    /// the number of distinct completed codes
    CodeCount,
}

/// The comma-separated prerequisite codes recorded on a course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteList {
    codes: Vec<String>,
}

impl PrerequisiteList {
    /// Parses an optional `course.pre_req` value; `None` and blanks mean no prerequisites
    pub fn from_column(value: Option<&str>) -> Self {
        value
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The codes as listed, in order and including repeats
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// The distinct listed codes
    pub fn distinct(&self) -> BTreeSet<&str> {
        self.codes.iter().map(String::as_str).collect()
    }

    /// Whether the completed courses satisfy this list under `policy`
    ///
    /// An empty list is always satisfied.
    pub fn is_satisfied_by(&self, completed: &[String], policy: PrerequisitePolicy) -> bool {
        if self.is_empty() {
            return true;
        }

        match policy {
            PrerequisitePolicy::ExactSet => self
                .distinct()
                .iter()
                .all(|code| completed.iter().any(|c| c == code)),
            PrerequisitePolicy::CodeCount => {
                let completed: BTreeSet<&str> = completed.iter().map(String::as_str).collect();
                self.codes.len() == completed.len()
            }
        }
    }

    /// The listed codes that are not yet completed, without repeats
    pub fn remaining(&self, completed: &[String]) -> Vec<String> {
        self.distinct()
            .into_iter()
            .filter(|code| !completed.iter().any(|c| c == code))
            .map(str::to_string)
            .collect()
    }
}

impl FromStr for PrerequisiteList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codes = s
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();

        Ok(PrerequisiteList { codes })
    }
}
