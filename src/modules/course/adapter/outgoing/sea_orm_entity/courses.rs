use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: i32,
    pub minimum_skill: String,
    pub scholarship_available: bool,
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
