use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Principal, User};
use crate::auth::application::domain::schema::UserDraft;
use crate::auth::application::ports::incoming::use_cases::{
    ForgotPasswordUseCase, GetMeUseCase, LoginCredentials, LoginUserUseCase,
    PasswordChange, RegisterUserUseCase, ResetPasswordUseCase, UpdateDetailsData,
    UpdateDetailsUseCase, UpdatePasswordUseCase,
};
use crate::bootcamp::application::domain::entities::{Bootcamp, BootcampWithCourses};
use crate::bootcamp::application::domain::schema::BootcampDraft;
use crate::bootcamp::application::domain::upload_policy::PhotoUpload;
use crate::bootcamp::application::ports::incoming::use_cases::{
    BootcampPatch, BootcampsInRadiusUseCase, CreateBootcampUseCase, DeleteBootcampUseCase,
    GetBootcampUseCase, ListBootcampsUseCase, UpdateBootcampUseCase, UploadPhotoUseCase,
};
use crate::course::application::domain::entities::Course;
use crate::course::application::domain::schema::CourseDraft;
use crate::course::application::ports::incoming::{
    CoursePatch, CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase,
    ListBootcampCoursesUseCase, ListCoursesUseCase, UpdateCourseUseCase,
};
use crate::review::application::domain::entities::Review;
use crate::review::application::domain::schema::ReviewDraft;
use crate::review::application::ports::incoming::{
    CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase, ListBootcampReviewsUseCase,
    ListReviewsUseCase, ReviewPatch, UpdateReviewUseCase,
};
use crate::shared::api::AppError;
use crate::shared::query::{ListQuery, Page};
use crate::user::application::ports::incoming::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
    UserPatch,
};

/// Placeholder for every use case a test does not exercise.
#[derive(Default, Clone)]
pub struct NotUsed;

#[async_trait]
impl RegisterUserUseCase for NotUsed {
    async fn execute(&self, _draft: UserDraft) -> Result<String, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl LoginUserUseCase for NotUsed {
    async fn execute(&self, _credentials: LoginCredentials) -> Result<String, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetMeUseCase for NotUsed {
    async fn execute(&self, _principal: Principal) -> Result<User, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateDetailsUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _data: UpdateDetailsData,
    ) -> Result<User, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdatePasswordUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _change: PasswordChange,
    ) -> Result<String, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ForgotPasswordUseCase for NotUsed {
    async fn execute(&self, _email: Option<String>, _origin: &str) -> Result<(), AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ResetPasswordUseCase for NotUsed {
    async fn execute(
        &self,
        _reset_token: &str,
        _password: Option<String>,
    ) -> Result<String, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListUsersUseCase for NotUsed {
    async fn execute(&self, _query: ListQuery) -> Result<Page<User>, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetUserUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<User, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateUserUseCase for NotUsed {
    async fn execute(&self, _draft: UserDraft) -> Result<User, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateUserUseCase for NotUsed {
    async fn execute(&self, _id: Uuid, _patch: UserPatch) -> Result<User, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteUserUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<(), AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListBootcampsUseCase for NotUsed {
    async fn execute(&self, _query: ListQuery) -> Result<Page<BootcampWithCourses>, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetBootcampUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<Bootcamp, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateBootcampUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _draft: BootcampDraft,
    ) -> Result<Bootcamp, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateBootcampUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _id: Uuid,
        _patch: BootcampPatch,
    ) -> Result<Bootcamp, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteBootcampUseCase for NotUsed {
    async fn execute(&self, _principal: Principal, _id: Uuid) -> Result<(), AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl BootcampsInRadiusUseCase for NotUsed {
    async fn execute(&self, _zipcode: &str, _distance: f64) -> Result<Vec<Bootcamp>, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UploadPhotoUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _id: Uuid,
        _upload: Option<PhotoUpload>,
    ) -> Result<String, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListCoursesUseCase for NotUsed {
    async fn execute(&self, _query: ListQuery) -> Result<Page<Course>, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListBootcampCoursesUseCase for NotUsed {
    async fn execute(&self, _bootcamp_id: Uuid) -> Result<Vec<Course>, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetCourseUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<Course, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateCourseUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _bootcamp_id: Uuid,
        _draft: CourseDraft,
    ) -> Result<Course, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateCourseUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _id: Uuid,
        _patch: CoursePatch,
    ) -> Result<Course, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteCourseUseCase for NotUsed {
    async fn execute(&self, _principal: Principal, _id: Uuid) -> Result<(), AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListReviewsUseCase for NotUsed {
    async fn execute(&self, _query: ListQuery) -> Result<Page<Review>, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListBootcampReviewsUseCase for NotUsed {
    async fn execute(&self, _bootcamp_id: Uuid) -> Result<Vec<Review>, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetReviewUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<Review, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateReviewUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _bootcamp_id: Uuid,
        _draft: ReviewDraft,
    ) -> Result<Review, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateReviewUseCase for NotUsed {
    async fn execute(
        &self,
        _principal: Principal,
        _id: Uuid,
        _patch: ReviewPatch,
    ) -> Result<Review, AppError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteReviewUseCase for NotUsed {
    async fn execute(&self, _principal: Principal, _id: Uuid) -> Result<(), AppError> {
        unimplemented!("Not used in this test")
    }
}
