use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::incoming::web::token_cookie::TokenCookieConfig;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::bootcamp::application::bootcamp_use_cases::BootcampUseCases;
use crate::bootcamp::application::domain::upload_policy::PhotoUploadPolicy;
use crate::course::application::course_use_cases::CourseUseCases;
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::tests::support::stubs::NotUsed;
use crate::user::application::user_use_cases::UserUseCases;
use crate::AppState;

/// `AppState` whose use cases are all [`NotUsed`] until a test swaps one in.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    users: UserUseCases,
    bootcamps: BootcampUseCases,
    courses: CourseUseCases,
    reviews: ReviewUseCases,
    token_cookie: TokenCookieConfig,
    photo_upload: PhotoUploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(NotUsed);
        Self {
            auth: AuthUseCases {
                register: stub.clone(),
                login: stub.clone(),
                me: stub.clone(),
                update_details: stub.clone(),
                update_password: stub.clone(),
                forgot_password: stub.clone(),
                reset_password: stub.clone(),
            },
            users: UserUseCases {
                list: stub.clone(),
                get: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
            },
            bootcamps: BootcampUseCases {
                list: stub.clone(),
                get: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
                in_radius: stub.clone(),
                upload_photo: stub.clone(),
            },
            courses: CourseUseCases {
                list: stub.clone(),
                list_for_bootcamp: stub.clone(),
                get: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
            },
            reviews: ReviewUseCases {
                list: stub.clone(),
                list_for_bootcamp: stub.clone(),
                get: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                delete: stub,
            },
            token_cookie: TokenCookieConfig {
                max_age_days: 30,
                secure: false,
            },
            photo_upload: PhotoUploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_auth(mut self, f: impl FnOnce(&mut AuthUseCases)) -> Self {
        f(&mut self.auth);
        self
    }

    pub fn with_users(mut self, f: impl FnOnce(&mut UserUseCases)) -> Self {
        f(&mut self.users);
        self
    }

    pub fn with_bootcamps(mut self, f: impl FnOnce(&mut BootcampUseCases)) -> Self {
        f(&mut self.bootcamps);
        self
    }

    pub fn with_courses(mut self, f: impl FnOnce(&mut CourseUseCases)) -> Self {
        f(&mut self.courses);
        self
    }

    pub fn with_reviews(mut self, f: impl FnOnce(&mut ReviewUseCases)) -> Self {
        f(&mut self.reviews);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            users: self.users,
            bootcamps: self.bootcamps,
            courses: self.courses,
            reviews: self.reviews,
            token_cookie: self.token_cookie,
            photo_upload: self.photo_upload,
        })
    }
}
