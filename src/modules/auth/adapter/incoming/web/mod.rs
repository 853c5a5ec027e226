pub mod extractors;
pub mod routes;
pub mod token_cookie;
