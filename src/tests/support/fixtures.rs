use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User};
use crate::bootcamp::adapter::outgoing::sea_orm_entity::bootcamps;
use crate::bootcamp::application::domain::entities::{Bootcamp, BootcampRef, DEFAULT_PHOTO};
use crate::bootcamp::application::domain::schema::BootcampDraft;
use crate::course::adapter::outgoing::sea_orm_entity::courses;
use crate::course::application::domain::entities::{Course, Skill};
use crate::geocoding::application::domain::entities::GeoLocation;
use crate::review::application::domain::entities::Review;

pub fn sample_user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        name: "John Doe".to_string(),
        email: "john@gmail.com".to_string(),
        role,
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        reset_password_token: None,
        reset_password_expire: None,
        created_at: Utc::now(),
    }
}

pub fn sample_location() -> GeoLocation {
    GeoLocation {
        latitude: 42.350_9,
        longitude: -71.105_4,
        formatted_address: "233 Bay State Rd, Boston, MA 02118, US".to_string(),
        street: "233 Bay State Rd".to_string(),
        city: "Boston".to_string(),
        state: "MA".to_string(),
        zipcode: "02118".to_string(),
        country: "US".to_string(),
    }
}

pub fn sample_bootcamp(owner: Uuid) -> Bootcamp {
    Bootcamp {
        id: Uuid::new_v4(),
        user: owner,
        name: "Devworks Bootcamp".to_string(),
        slug: "devworks-bootcamp".to_string(),
        description: "Devworks is a full stack JavaScript Bootcamp located in the heart of Boston"
            .to_string(),
        website: Some("https://devworks.com".to_string()),
        phone: None,
        email: None,
        location: Some(sample_location()),
        careers: vec!["Web Development".to_string(), "UI/UX".to_string()],
        average_rating: None,
        average_cost: None,
        photo: DEFAULT_PHOTO.to_string(),
        housing: false,
        job_assistance: false,
        job_guarantee: false,
        accept_gi: false,
        created_at: Utc::now(),
    }
}

pub fn sample_draft() -> BootcampDraft {
    BootcampDraft {
        name: Some("Devworks Bootcamp".to_string()),
        description: Some(
            "Devworks is a full stack JavaScript Bootcamp located in the heart of Boston"
                .to_string(),
        ),
        address: Some("233 Bay State Rd Boston MA 02215".to_string()),
        careers: Some(vec!["Web Development".to_string(), "UI/UX".to_string()]),
        ..BootcampDraft::default()
    }
}

pub fn sample_course(owner: Uuid, bootcamp_id: Uuid) -> Course {
    Course {
        id: Uuid::new_v4(),
        title: "Front End Web Development".to_string(),
        description: "HTML, CSS and modern JavaScript".to_string(),
        weeks: "8".to_string(),
        tuition: 8000,
        minimum_skill: Skill::Beginner,
        scholarship_available: false,
        bootcamp: BootcampRef::Id(bootcamp_id),
        user: owner,
        created_at: Utc::now(),
    }
}

pub fn sample_review(author: Uuid, bootcamp_id: Uuid) -> Review {
    Review {
        id: Uuid::new_v4(),
        title: "Learned a ton!".to_string(),
        text: "The instructors were great and I landed a job two weeks after graduating."
            .to_string(),
        rating: 9,
        bootcamp: BootcampRef::Id(bootcamp_id),
        user: author,
        created_at: Utc::now(),
    }
}

pub fn bootcamp_model(owner: Uuid) -> bootcamps::Model {
    let location = sample_location();
    bootcamps::Model {
        id: Uuid::new_v4(),
        user_id: owner,
        name: "Devworks Bootcamp".to_string(),
        slug: "devworks-bootcamp".to_string(),
        description: "Full stack web development".to_string(),
        website: Some("https://devworks.com".to_string()),
        phone: None,
        email: None,
        latitude: Some(location.latitude),
        longitude: Some(location.longitude),
        formatted_address: Some(location.formatted_address),
        street: Some(location.street),
        city: Some(location.city),
        state: Some(location.state),
        zipcode: Some(location.zipcode),
        country: Some(location.country),
        careers: serde_json::json!(["Web Development", "UI/UX"]),
        average_rating: None,
        average_cost: None,
        photo: DEFAULT_PHOTO.to_string(),
        housing: false,
        job_assistance: false,
        job_guarantee: false,
        accept_gi: false,
        created_at: Utc::now().fixed_offset(),
    }
}

pub fn course_model(bootcamp_id: Uuid, tuition: i32) -> courses::Model {
    courses::Model {
        id: Uuid::new_v4(),
        bootcamp_id,
        user_id: Uuid::new_v4(),
        title: "Front End Web Development".to_string(),
        description: "HTML, CSS and modern JavaScript".to_string(),
        weeks: "8".to_string(),
        tuition,
        minimum_skill: "beginner".to_string(),
        scholarship_available: false,
        created_at: Utc::now().fixed_offset(),
    }
}
