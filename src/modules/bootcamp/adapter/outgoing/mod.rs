pub mod bootcamp_repository_postgres;
pub mod photo_storage_disk;
pub mod sea_orm_entity;
