use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{
    BootcampListResponse, BootcampRadiusResponse, BootcampResponse, CourseCollectionResponse,
    CourseListResponse, CourseResponse, EmptyResponse, ErrorResponse, MessageResponse, PageLink,
    PaginationLinks, ReviewCollectionResponse, ReviewListResponse, ReviewResponse, TokenResponse,
    UserListResponse, UserResponse,
};
use crate::auth::adapter::incoming::web::routes::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
    UpdateDetailsRequest, UpdatePasswordRequest,
};
use crate::bootcamp::adapter::incoming::web::routes::{
    CreateBootcampRequest, PhotoForm, UpdateBootcampRequest,
};
use crate::course::adapter::incoming::web::routes::{CreateCourseRequest, UpdateCourseRequest};
use crate::health::HealthStatus;
use crate::review::adapter::incoming::web::routes::{CreateReviewRequest, UpdateReviewRequest};
use crate::user::adapter::incoming::web::routes::{CreateUserRequest, UpdateUserRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevCamper API",
        version = "1.0.0",
        description = "Bootcamps, courses, reviews and the accounts that manage them"
    ),
    paths(
        crate::health::health_handler,
        crate::health::ready_handler,

        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::get_me_handler,
        crate::auth::adapter::incoming::web::routes::update_details_handler,
        crate::auth::adapter::incoming::web::routes::update_password_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,

        // Users (admin)
        crate::user::adapter::incoming::web::routes::list_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::create_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,

        // Bootcamps
        crate::bootcamp::adapter::incoming::web::routes::list_bootcamps_handler,
        crate::bootcamp::adapter::incoming::web::routes::bootcamps_in_radius_handler,
        crate::bootcamp::adapter::incoming::web::routes::get_bootcamp_handler,
        crate::bootcamp::adapter::incoming::web::routes::create_bootcamp_handler,
        crate::bootcamp::adapter::incoming::web::routes::update_bootcamp_handler,
        crate::bootcamp::adapter::incoming::web::routes::delete_bootcamp_handler,
        crate::bootcamp::adapter::incoming::web::routes::upload_photo_handler,

        // Courses
        crate::course::adapter::incoming::web::routes::list_courses_handler,
        crate::course::adapter::incoming::web::routes::list_bootcamp_courses_handler,
        crate::course::adapter::incoming::web::routes::get_course_handler,
        crate::course::adapter::incoming::web::routes::create_course_handler,
        crate::course::adapter::incoming::web::routes::update_course_handler,
        crate::course::adapter::incoming::web::routes::delete_course_handler,

        // Reviews
        crate::review::adapter::incoming::web::routes::list_reviews_handler,
        crate::review::adapter::incoming::web::routes::list_bootcamp_reviews_handler,
        crate::review::adapter::incoming::web::routes::get_review_handler,
        crate::review::adapter::incoming::web::routes::create_review_handler,
        crate::review::adapter::incoming::web::routes::update_review_handler,
        crate::review::adapter::incoming::web::routes::delete_review_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            EmptyResponse,
            MessageResponse,
            TokenResponse,
            PageLink,
            PaginationLinks,
            HealthStatus,
            UserResponse,
            UserListResponse,
            BootcampResponse,
            BootcampListResponse,
            BootcampRadiusResponse,
            CourseResponse,
            CourseListResponse,
            CourseCollectionResponse,
            ReviewResponse,
            ReviewListResponse,
            ReviewCollectionResponse,
            RegisterRequest,
            LoginRequest,
            UpdateDetailsRequest,
            UpdatePasswordRequest,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            CreateUserRequest,
            UpdateUserRequest,
            CreateBootcampRequest,
            UpdateBootcampRequest,
            PhotoForm,
            CreateCourseRequest,
            UpdateCourseRequest,
            CreateReviewRequest,
            UpdateReviewRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "auth", description = "Registration, login and the current account"),
        (name = "users", description = "Account management, admin only"),
        (name = "bootcamps", description = "Bootcamps and their photos"),
        (name = "courses", description = "Courses offered by bootcamps"),
        (name = "reviews", description = "User reviews of bootcamps"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from /api/v1/auth/login or /register"))
                        .build(),
                ),
            )
        }
    }
}
