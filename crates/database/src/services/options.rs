use crate::{entities::options_meta, error::RuleError};
use log::warn;
use models::{registration::RegistrationOptions, term::TermCode};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

pub const NUMBER_OF_COURSES: &str = "number_of_courses";
pub const REGISTRATION_TERM: &str = "registration_term";
pub const OPEN_REGISTRATION: &str = "open_registration";

pub struct OptionService;

impl OptionService {
    /// Raw value of a system option, `None` when unset
    pub async fn get<C: ConnectionTrait>(db: &C, key: &str) -> Result<Option<String>, RuleError> {
        let option = options_meta::Entity::find()
            .filter(options_meta::Column::MetaKey.eq(key))
            .one(db)
            .await?;

        Ok(option.map(|o| o.meta_value))
    }

    async fn require<C: ConnectionTrait>(db: &C, key: &str) -> Result<String, RuleError> {
        Self::get(db, key)
            .await?
            .ok_or_else(|| RuleError::not_found("option", key))
    }

    pub async fn registration_options<C: ConnectionTrait>(
        db: &C,
    ) -> Result<RegistrationOptions, RuleError> {
        let raw_max = Self::require(db, NUMBER_OF_COURSES).await?;
        let max_courses = raw_max.trim().parse::<u32>().map_err(|_| {
            warn!("option {NUMBER_OF_COURSES} holds non-numeric value '{raw_max}'");
            RuleError::InvalidArgument(format!(
                "invalid option {NUMBER_OF_COURSES}: expected a course count, got '{raw_max}'"
            ))
        })?;

        let registration_term: TermCode = Self::require(db, REGISTRATION_TERM).await?.parse()?;

        let registration_open = Self::registration_open(db).await?;

        Ok(RegistrationOptions {
            max_courses,
            registration_term,
            registration_open,
        })
    }

    /// Whether registration is open; an unset flag means closed
    pub async fn registration_open<C: ConnectionTrait>(db: &C) -> Result<bool, RuleError> {
        match Self::get(db, OPEN_REGISTRATION).await? {
            None => Ok(false),
            Some(value) => parse_flag(&value).ok_or_else(|| {
                warn!("option {OPEN_REGISTRATION} holds unrecognised value '{value}'");
                RuleError::InvalidArgument(format!(
                    "invalid option {OPEN_REGISTRATION}: expected a flag, got '{value}'"
                ))
            }),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "" | "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
