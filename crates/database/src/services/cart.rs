use crate::{entities::stu_rgn_cart, error::RuleError};
use chrono::{Local, NaiveDateTime};
use models::ids::{SectionId, StudentId};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

pub struct CartService;

impl CartService {
    /// Whether the student has anything in their registration cart
    pub async fn has_items<C: ConnectionTrait>(db: &C, student_id: &str) -> Result<bool, RuleError> {
        let id: StudentId = student_id.parse()?;

        let item = stu_rgn_cart::Entity::find()
            .filter(stu_rgn_cart::Column::StuId.eq(id.0))
            .one(db)
            .await?;

        Ok(item.is_some())
    }

    pub async fn can_remove<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        course_section_id: &str,
    ) -> Result<bool, RuleError> {
        let now = Local::now().naive_local();
        Self::can_remove_at(db, student_id, course_section_id, now).await
    }

    /// Whether the section sits in the cart and its deletion deadline has not passed at `now`
    pub async fn can_remove_at<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        course_section_id: &str,
        now: NaiveDateTime,
    ) -> Result<bool, RuleError> {
        let id: StudentId = student_id.parse()?;
        let section: SectionId = course_section_id.parse()?;

        let item = stu_rgn_cart::Entity::find()
            .filter(stu_rgn_cart::Column::StuId.eq(id.0))
            .filter(stu_rgn_cart::Column::CourseSecId.eq(section.0))
            .filter(stu_rgn_cart::Column::DeleteDate.gte(now))
            .one(db)
            .await?;

        Ok(item.is_some())
    }
}
