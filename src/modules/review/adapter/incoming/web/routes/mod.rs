mod create_review;
mod delete_review;
mod get_review;
mod list_bootcamp_reviews;
mod list_reviews;
mod update_review;

pub use create_review::{__path_create_review_handler, create_review_handler, CreateReviewRequest};
pub use delete_review::{__path_delete_review_handler, delete_review_handler};
pub use get_review::{__path_get_review_handler, get_review_handler};
pub use list_bootcamp_reviews::{__path_list_bootcamp_reviews_handler, list_bootcamp_reviews_handler};
pub use list_reviews::{__path_list_reviews_handler, list_reviews_handler};
pub use update_review::{__path_update_review_handler, update_review_handler, UpdateReviewRequest};
