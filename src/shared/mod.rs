pub mod api;
pub mod patch;
pub mod query;
pub mod storage;
