use async_trait::async_trait;
use uuid::Uuid;

use crate::bootcamp::application::domain::entities::{Bootcamp, BootcampWithCourses};
use crate::geocoding::application::domain::entities::GeoLocation;
use crate::shared::api::AppError;
use crate::shared::query::{ListQuery, Page};
use crate::shared::storage::StorageFault;

#[derive(Debug, Clone, PartialEq)]
pub struct NewBootcamp {
    pub user: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: GeoLocation,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

/// Full replacement of every editable field; derived fields, owner and
/// photo are left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct BootcampChanges {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<GeoLocation>,
    pub careers: Vec<String>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BootcampRepository: Send + Sync {
    async fn create(&self, bootcamp: NewBootcamp) -> Result<Bootcamp, StorageFault>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bootcamp>, StorageFault>;

    async fn exists_for_owner(&self, user_id: Uuid) -> Result<bool, StorageFault>;

    /// Shaped page of bootcamps, each with its courses.
    async fn list(&self, query: &ListQuery) -> Result<Page<BootcampWithCourses>, AppError>;

    /// Bootcamps whose location lies within `radius` radians of the centre.
    async fn within_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> Result<Vec<Bootcamp>, StorageFault>;

    /// `None` when no such bootcamp exists.
    async fn update(
        &self,
        id: Uuid,
        changes: BootcampChanges,
    ) -> Result<Option<Bootcamp>, StorageFault>;

    async fn set_photo(&self, id: Uuid, photo: &str) -> Result<(), StorageFault>;

    /// Courses and reviews of the bootcamp go with it.
    async fn delete(&self, id: Uuid) -> Result<(), StorageFault>;
}
