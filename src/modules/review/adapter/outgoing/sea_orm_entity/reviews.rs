use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// One review per (bootcamp, user), enforced by a unique index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub rating: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::bootcamp::adapter::outgoing::sea_orm_entity::bootcamps::Entity",
        from = "Column::BootcampId",
        to = "crate::bootcamp::adapter::outgoing::sea_orm_entity::bootcamps::Column::Id",
        on_delete = "Cascade"
    )]
    Bootcamp,
}

impl Related<crate::bootcamp::adapter::outgoing::sea_orm_entity::bootcamps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bootcamp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
