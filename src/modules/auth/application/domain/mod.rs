pub mod entities;
pub mod reset_token;
pub mod schema;
