use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::course::application::domain::entities::Course;
use crate::geocoding::application::domain::entities::GeoLocation;

pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

pub const CAREERS: [&str; 6] = [
    "Web Development",
    "Mobile Development",
    "UI/UX",
    "Data Science",
    "Business",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bootcamp {
    pub id: Uuid,
    /// Owner.
    pub user: Uuid,
    #[schema(example = "Devworks Bootcamp")]
    pub name: String,
    #[schema(example = "devworks-bootcamp")]
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<GeoLocation>,
    #[schema(example = json!(["Web Development", "UI/UX"]))]
    pub careers: Vec<String>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<i32>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub created_at: DateTime<Utc>,
}

/// What courses and reviews embed about their bootcamp.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BootcampSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<&Bootcamp> for BootcampSummary {
    fn from(b: &Bootcamp) -> Self {
        Self {
            id: b.id,
            name: b.name.clone(),
            description: b.description.clone(),
        }
    }
}

/// How a course or review refers to its bootcamp.
///
/// `GET /api/v1/courses`, `GET /api/v1/courses/{id}` and the review
/// equivalents embed the `{id, name, description}` summary. Create and
/// update responses, and the per-bootcamp lists, carry the bare id.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BootcampRef {
    Id(Uuid),
    Summary(BootcampSummary),
}

impl BootcampRef {
    pub fn bootcamp_id(&self) -> Uuid {
        match self {
            BootcampRef::Id(id) => *id,
            BootcampRef::Summary(summary) => summary.id,
        }
    }
}

/// A bootcamp as listed, with its courses.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BootcampWithCourses {
    #[serde(flatten)]
    pub bootcamp: Bootcamp,
    pub courses: Vec<Course>,
}

/// Divisor turning a search distance into the angular radius of the cap.
pub const EARTH_RADIUS_MILES: f64 = 6963.0;

pub fn radius_in_radians(distance_miles: f64) -> f64 {
    distance_miles / EARTH_RADIUS_MILES
}
