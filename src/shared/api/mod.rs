pub mod error;
pub mod json_config;
pub mod response;

pub use error::{ApiError, ApiResult, AppError};
pub use response::{ApiResponse, EmptyData};
