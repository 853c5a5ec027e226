use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users_table::Users;
use super::m20250301_000002_create_bootcamps_table::Bootcamps;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::BootcampId).uuid().not_null())
                    .col(ColumnDef::new(Courses::UserId).uuid().not_null())
                    .col(ColumnDef::new(Courses::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::Weeks).string_len(20).not_null())
                    .col(ColumnDef::new(Courses::Tuition).integer().not_null())
                    .col(ColumnDef::new(Courses::MinimumSkill).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Courses::ScholarshipAvailable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(
                        Expr::col(Courses::MinimumSkill)
                            .is_in(["beginner", "intermediate", "advanced"]),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_bootcamp_id")
                            .from(Courses::Table, Courses::BootcampId)
                            .to(Bootcamps::Table, Bootcamps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_user_id")
                            .from(Courses::Table, Courses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_courses_bootcamp_id ON courses (bootcamp_id);",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    BootcampId,
    UserId,
    Title,
    Description,
    Weeks,
    Tuition,
    MinimumSkill,
    ScholarshipAvailable,
    CreatedAt,
}
