// src/api/schemas.rs
//! Envelope shapes as they appear in the OpenAPI document.
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::token_cookie::TokenData;
use crate::auth::application::domain::entities::User;
use crate::bootcamp::application::domain::entities::{Bootcamp, BootcampWithCourses};
use crate::course::application::domain::entities::Course;
use crate::review::application::domain::entities::Review;

/// Failure envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Resource not found")]
    pub error: String,
}

/// `data` is `{}`
#[derive(Serialize, ToSchema)]
pub struct EmptyResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Email sent")]
    pub data: String,
}

/// Signed token, also set as the `token` cookie
#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: TokenData,
}

#[derive(Serialize, ToSchema)]
pub struct PageLink {
    #[schema(example = 2)]
    pub page: u64,
    #[schema(example = 25)]
    pub limit: u64,
}

/// Neighbouring pages; absent at either end
#[derive(Serialize, ToSchema)]
pub struct PaginationLinks {
    pub next: Option<PageLink>,
    pub prev: Option<PageLink>,
}

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: User,
}

#[derive(Serialize, ToSchema)]
pub struct UserListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub pagination: PaginationLinks,
    pub data: Vec<User>,
}

#[derive(Serialize, ToSchema)]
pub struct BootcampResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Bootcamp,
}

#[derive(Serialize, ToSchema)]
pub struct BootcampListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub pagination: PaginationLinks,
    pub data: Vec<BootcampWithCourses>,
}

/// Unpaginated
#[derive(Serialize, ToSchema)]
pub struct BootcampRadiusResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub data: Vec<Bootcamp>,
}

#[derive(Serialize, ToSchema)]
pub struct CourseResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Course,
}

#[derive(Serialize, ToSchema)]
pub struct CourseListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub pagination: PaginationLinks,
    pub data: Vec<Course>,
}

/// Every course of one bootcamp, unpaginated
#[derive(Serialize, ToSchema)]
pub struct CourseCollectionResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub data: Vec<Course>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Review,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub pagination: PaginationLinks,
    pub data: Vec<Review>,
}

/// Every review of one bootcamp, unpaginated
#[derive(Serialize, ToSchema)]
pub struct ReviewCollectionResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub data: Vec<Review>,
}
