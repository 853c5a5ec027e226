use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::bootcamp::application::domain::entities::BootcampRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Beginner,
    Intermediate,
    Advanced,
}

impl Skill {
    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Beginner => "beginner",
            Skill::Intermediate => "intermediate",
            Skill::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill '{0}'")]
pub struct UnknownSkill(pub String);

impl FromStr for Skill {
    type Err = UnknownSkill;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Skill::Beginner),
            "intermediate" => Ok(Skill::Intermediate),
            "advanced" => Ok(Skill::Advanced),
            other => Err(UnknownSkill(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    #[schema(example = "Front End Web Development")]
    pub title: String,
    pub description: String,
    #[schema(example = "8")]
    pub weeks: String,
    #[schema(example = 8000)]
    pub tuition: i32,
    pub minimum_skill: Skill,
    pub scholarship_available: bool,
    /// Bootcamp id on create, update and per-bootcamp lists; the
    /// `{id, name, description}` summary on single and global reads.
    pub bootcamp: BootcampRef,
    /// Owner.
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
}
