use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create person table
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Person::PersonId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Person::Fname).string().not_null())
                    .col(ColumnDef::new(Person::Lname).string().not_null())
                    .col(ColumnDef::new(Person::Email).string())
                    .col(ColumnDef::new(Person::Phone).string())
                    .col(ColumnDef::new(Person::Address1).string())
                    .col(ColumnDef::new(Person::Address2).string())
                    .col(ColumnDef::new(Person::City).string())
                    .col(ColumnDef::new(Person::State).string())
                    .col(ColumnDef::new(Person::Zip).string())
                    .col(ColumnDef::new(Person::Dob).date())
                    .to_owned(),
            )
            .await?;

        // Create student table, keyed by the person it belongs to
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::StuId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::Status).string_len(1).not_null())
                    .col(ColumnDef::new(Student::Tags).text())
                    .col(ColumnDef::new(Student::AddDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student-stu_id")
                            .from(Student::Table, Student::StuId)
                            .to(Person::Table, Person::PersonId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create stu_program table
        manager
            .create_table(
                Table::create()
                    .table(StuProgram::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StuProgram::StuProgId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StuProgram::StuId).big_integer().not_null())
                    .col(ColumnDef::new(StuProgram::ProgCode).string().not_null())
                    .col(
                        ColumnDef::new(StuProgram::CurrStatus)
                            .string_len(1)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StuProgram::StartDate).date().not_null())
                    .col(ColumnDef::new(StuProgram::EndDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stu_program-stu_id")
                            .from(StuProgram::Table, StuProgram::StuId)
                            .to(Student::Table, Student::StuId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create department table
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Department::DeptCode)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Department::DeptName).string().not_null())
                    .col(ColumnDef::new(Department::DeptEmail).string())
                    .col(ColumnDef::new(Department::DeptPhone).string())
                    .to_owned(),
            )
            .await?;

        // Create restriction_code table
        manager
            .create_table(
                Table::create()
                    .table(RestrictionCode::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestrictionCode::RstrCode)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RestrictionCode::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RestrictionCode::DeptCode).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-restriction_code-dept_code")
                            .from(RestrictionCode::Table, RestrictionCode::DeptCode)
                            .to(Department::Table, Department::DeptCode),
                    )
                    .to_owned(),
            )
            .await?;

        // Create restriction table; a NULL end date means open-ended
        manager
            .create_table(
                Table::create()
                    .table(Restriction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restriction::RstrId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restriction::StuId).big_integer().not_null())
                    .col(ColumnDef::new(Restriction::RstrCode).string().not_null())
                    .col(
                        ColumnDef::new(Restriction::Severity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Restriction::StartDate).date().not_null())
                    .col(ColumnDef::new(Restriction::EndDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-restriction-stu_id")
                            .from(Restriction::Table, Restriction::StuId)
                            .to(Student::Table, Student::StuId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-restriction-rstr_code")
                            .from(Restriction::Table, Restriction::RstrCode)
                            .to(RestrictionCode::Table, RestrictionCode::RstrCode),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course table
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::CourseId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::CourseCode).string().not_null())
                    .col(ColumnDef::new(Course::CourseShortTitle).string().not_null())
                    .col(ColumnDef::new(Course::PreReq).text())
                    .col(
                        ColumnDef::new(Course::MinCredit)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_sec table
        manager
            .create_table(
                Table::create()
                    .table(CourseSec::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseSec::CourseSecId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseSec::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(CourseSec::CourseSecCode).string().not_null())
                    .col(ColumnDef::new(CourseSec::TermCode).string().not_null())
                    .col(
                        ColumnDef::new(CourseSec::MinCredit)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_sec-course_id")
                            .from(CourseSec::Table, CourseSec::CourseId)
                            .to(Course::Table, Course::CourseId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create stu_course_sec table
        manager
            .create_table(
                Table::create()
                    .table(StuCourseSec::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StuCourseSec::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StuCourseSec::StuId).big_integer().not_null())
                    .col(
                        ColumnDef::new(StuCourseSec::CourseSecId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StuCourseSec::CourseSecCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StuCourseSec::TermCode).string().not_null())
                    .col(ColumnDef::new(StuCourseSec::Status).string_len(1).not_null())
                    .col(ColumnDef::new(StuCourseSec::StatusDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stu_course_sec-stu_id")
                            .from(StuCourseSec::Table, StuCourseSec::StuId)
                            .to(Student::Table, Student::StuId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stu_course_sec-course_sec_id")
                            .from(StuCourseSec::Table, StuCourseSec::CourseSecId)
                            .to(CourseSec::Table, CourseSec::CourseSecId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create stu_acad_cred table
        manager
            .create_table(
                Table::create()
                    .table(StuAcadCred::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StuAcadCred::StuAcadCredId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StuAcadCred::StuId).big_integer().not_null())
                    .col(ColumnDef::new(StuAcadCred::CourseCode).string().not_null())
                    .col(ColumnDef::new(StuAcadCred::CourseSecId).big_integer())
                    .col(ColumnDef::new(StuAcadCred::TermCode).string().not_null())
                    .col(ColumnDef::new(StuAcadCred::Grade).string())
                    .col(ColumnDef::new(StuAcadCred::Status).string_len(1).not_null())
                    .col(
                        ColumnDef::new(StuAcadCred::AttCred)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(StuAcadCred::CompCred)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stu_acad_cred-stu_id")
                            .from(StuAcadCred::Table, StuAcadCred::StuId)
                            .to(Student::Table, Student::StuId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create grade_scale table
        manager
            .create_table(
                Table::create()
                    .table(GradeScale::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradeScale::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GradeScale::Grade)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GradeScale::Points).double().not_null())
                    .to_owned(),
            )
            .await?;

        // Create stu_rgn_cart table
        manager
            .create_table(
                Table::create()
                    .table(StuRgnCart::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StuRgnCart::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StuRgnCart::StuId).big_integer().not_null())
                    .col(ColumnDef::new(StuRgnCart::CourseSecId).big_integer().not_null())
                    .col(ColumnDef::new(StuRgnCart::DeleteDate).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stu_rgn_cart-stu_id")
                            .from(StuRgnCart::Table, StuRgnCart::StuId)
                            .to(Student::Table, Student::StuId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_load_rule table
        manager
            .create_table(
                Table::create()
                    .table(StudentLoadRule::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentLoadRule::SlrId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentLoadRule::Status).string_len(1).not_null())
                    .col(ColumnDef::new(StudentLoadRule::MinCred).double().not_null())
                    .col(ColumnDef::new(StudentLoadRule::MaxCred).double().not_null())
                    .col(ColumnDef::new(StudentLoadRule::Term).string().not_null())
                    .col(
                        ColumnDef::new(StudentLoadRule::AcadLevelCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentLoadRule::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Create options_meta table
        manager
            .create_table(
                Table::create()
                    .table(OptionsMeta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OptionsMeta::MetaId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OptionsMeta::MetaKey)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(OptionsMeta::MetaValue).text().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order to respect foreign key constraints
        manager
            .drop_table(Table::drop().table(OptionsMeta::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentLoadRule::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StuRgnCart::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GradeScale::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StuAcadCred::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StuCourseSec::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseSec::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Restriction::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RestrictionCode::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StuProgram::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Person {
    Table,
    PersonId,
    Fname,
    Lname,
    Email,
    Phone,
    Address1,
    Address2,
    City,
    State,
    Zip,
    Dob,
}

#[derive(Iden)]
enum Student {
    Table,
    StuId,
    Status,
    Tags,
    AddDate,
}

#[derive(Iden)]
enum StuProgram {
    Table,
    StuProgId,
    StuId,
    ProgCode,
    CurrStatus,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Department {
    Table,
    DeptCode,
    DeptName,
    DeptEmail,
    DeptPhone,
}

#[derive(Iden)]
enum RestrictionCode {
    Table,
    RstrCode,
    Description,
    DeptCode,
}

#[derive(Iden)]
enum Restriction {
    Table,
    RstrId,
    StuId,
    RstrCode,
    Severity,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Course {
    Table,
    CourseId,
    CourseCode,
    CourseShortTitle,
    PreReq,
    MinCredit,
}

#[derive(Iden)]
enum CourseSec {
    Table,
    CourseSecId,
    CourseId,
    CourseSecCode,
    TermCode,
    MinCredit,
}

#[derive(Iden)]
enum StuCourseSec {
    Table,
    Id,
    StuId,
    CourseSecId,
    CourseSecCode,
    TermCode,
    Status,
    StatusDate,
}

#[derive(Iden)]
enum StuAcadCred {
    Table,
    StuAcadCredId,
    StuId,
    CourseCode,
    CourseSecId,
    TermCode,
    Grade,
    Status,
    AttCred,
    CompCred,
}

#[derive(Iden)]
enum GradeScale {
    Table,
    Id,
    Grade,
    Points,
}

#[derive(Iden)]
enum StuRgnCart {
    Table,
    Id,
    StuId,
    CourseSecId,
    DeleteDate,
}

#[derive(Iden)]
enum StudentLoadRule {
    Table,
    SlrId,
    Status,
    MinCred,
    MaxCred,
    Term,
    AcadLevelCode,
    Active,
}

#[derive(Iden)]
enum OptionsMeta {
    Table,
    MetaId,
    MetaKey,
    MetaValue,
}
