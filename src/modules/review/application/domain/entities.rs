use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::bootcamp::application::domain::entities::BootcampRef;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    #[schema(example = "Learned a ton!")]
    pub title: String,
    pub text: String,
    #[schema(example = 8, minimum = 1, maximum = 10)]
    pub rating: i32,
    /// Bootcamp id on create, update and per-bootcamp lists; the
    /// `{id, name, description}` summary on single and global reads.
    pub bootcamp: BootcampRef,
    /// Author.
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
}
