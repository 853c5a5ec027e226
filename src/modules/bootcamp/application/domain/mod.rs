pub mod entities;
pub mod schema;
pub mod upload_policy;
