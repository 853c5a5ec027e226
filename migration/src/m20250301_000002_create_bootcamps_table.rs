use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bootcamps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bootcamps::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bootcamps::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Bootcamps::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Bootcamps::Slug).string_len(60).not_null())
                    .col(ColumnDef::new(Bootcamps::Description).string_len(500).not_null())
                    .col(ColumnDef::new(Bootcamps::Website).text())
                    .col(ColumnDef::new(Bootcamps::Phone).string_len(20))
                    .col(ColumnDef::new(Bootcamps::Email).string_len(255))
                    .col(ColumnDef::new(Bootcamps::Latitude).double())
                    .col(ColumnDef::new(Bootcamps::Longitude).double())
                    .col(ColumnDef::new(Bootcamps::FormattedAddress).text())
                    .col(ColumnDef::new(Bootcamps::Street).text())
                    .col(ColumnDef::new(Bootcamps::City).string_len(100))
                    .col(ColumnDef::new(Bootcamps::State).string_len(100))
                    .col(ColumnDef::new(Bootcamps::Zipcode).string_len(20))
                    .col(ColumnDef::new(Bootcamps::Country).string_len(100))
                    .col(ColumnDef::new(Bootcamps::Careers).json_binary().not_null())
                    .col(ColumnDef::new(Bootcamps::AverageRating).double())
                    .col(ColumnDef::new(Bootcamps::AverageCost).integer())
                    .col(
                        ColumnDef::new(Bootcamps::Photo)
                            .string_len(255)
                            .not_null()
                            .default("no-photo.jpg"),
                    )
                    .col(boolean(Bootcamps::Housing))
                    .col(boolean(Bootcamps::JobAssistance))
                    .col(boolean(Bootcamps::JobGuarantee))
                    .col(boolean(Bootcamps::AcceptGi))
                    .col(
                        ColumnDef::new(Bootcamps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bootcamps_user_id")
                            .from(Bootcamps::Table, Bootcamps::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bootcamps_user_id ON bootcamps (user_id);
                CREATE INDEX IF NOT EXISTS idx_bootcamps_created_at ON bootcamps (created_at DESC);
                CREATE INDEX IF NOT EXISTS idx_bootcamps_careers ON bootcamps USING GIN (careers);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bootcamps::Table).to_owned())
            .await
    }
}

fn boolean(column: Bootcamps) -> ColumnDef {
    ColumnDef::new(column)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Bootcamps {
    Table,
    Id,
    UserId,
    Name,
    Slug,
    Description,
    Website,
    Phone,
    Email,
    Latitude,
    Longitude,
    FormattedAddress,
    Street,
    City,
    State,
    Zipcode,
    Country,
    Careers,
    AverageRating,
    AverageCost,
    Photo,
    Housing,
    JobAssistance,
    JobGuarantee,
    AcceptGi,
    CreatedAt,
}
