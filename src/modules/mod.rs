pub mod auth;
pub mod bootcamp;
pub mod course;
pub mod email;
pub mod geocoding;
pub mod review;
pub mod user;
