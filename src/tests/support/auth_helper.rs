use actix_web::web;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::Authenticator;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::ports::outgoing::user_repository::{
    MockUserRepository, UserRepository,
};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::tests::support::fixtures::sample_user;

const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

/// Users that `token` has signed in, keyed by id.
fn signed_in() -> &'static Mutex<HashMap<Uuid, Role>> {
    static USERS: OnceLock<Mutex<HashMap<Uuid, Role>>> = OnceLock::new();
    USERS.get_or_init(|| Mutex::new(HashMap::new()))
}

fn stored_user(id: Uuid) -> Option<User> {
    let role = *signed_in().lock().unwrap().get(&id)?;
    Some(User {
        id,
        ..sample_user(role)
    })
}

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig::new(TEST_SECRET, 3600))
}

/// Authenticator whose user store knows everyone signed in through `token`.
pub fn authenticator() -> web::Data<Authenticator> {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(|id| Ok(stored_user(id)));
    authenticator_with(users)
}

pub fn authenticator_with(users: impl UserRepository + 'static) -> web::Data<Authenticator> {
    web::Data::new(Authenticator::new(
        Arc::new(jwt_service()),
        Arc::new(users),
    ))
}

/// Signs `user_id` in with `role` and returns its token.
pub fn token(user_id: Uuid, role: Role) -> String {
    signed_in().lock().unwrap().insert(user_id, role);
    jwt_service().generate_token(user_id, role).unwrap()
}

pub fn bearer(user_id: Uuid, role: Role) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token(user_id, role)))
}
