use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Course load per student and term
        manager
            .create_index(
                Index::create()
                    .name("idx_stu_course_sec_stu_term")
                    .table(StuCourseSec::Table)
                    .col(StuCourseSec::StuId)
                    .col(StuCourseSec::TermCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stu_course_sec_course_sec_id")
                    .table(StuCourseSec::Table)
                    .col(StuCourseSec::CourseSecId)
                    .to_owned(),
            )
            .await?;

        // Holds and FERPA lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_restriction_stu_code")
                    .table(Restriction::Table)
                    .col(Restriction::StuId)
                    .col(Restriction::RstrCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stu_program_stu_id")
                    .table(StuProgram::Table)
                    .col(StuProgram::StuId)
                    .to_owned(),
            )
            .await?;

        // Completed prerequisite lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_stu_acad_cred_stu_course")
                    .table(StuAcadCred::Table)
                    .col(StuAcadCred::StuId)
                    .col(StuAcadCred::CourseCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stu_rgn_cart_stu_id")
                    .table(StuRgnCart::Table)
                    .col(StuRgnCart::StuId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_stu_rgn_cart_stu_id",
            "idx_stu_acad_cred_stu_course",
            "idx_stu_program_stu_id",
            "idx_restriction_stu_code",
            "idx_stu_course_sec_course_sec_id",
            "idx_stu_course_sec_stu_term",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum StuCourseSec {
    Table,
    StuId,
    CourseSecId,
    TermCode,
}

#[derive(Iden)]
enum Restriction {
    Table,
    StuId,
    RstrCode,
}

#[derive(Iden)]
enum StuProgram {
    Table,
    StuId,
}

#[derive(Iden)]
enum StuAcadCred {
    Table,
    StuId,
    CourseCode,
}

#[derive(Iden)]
enum StuRgnCart {
    Table,
    StuId,
}
