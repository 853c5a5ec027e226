mod create_user;
mod delete_user;
mod get_user;
mod list_users;
mod update_user;

pub use create_user::{__path_create_user_handler, create_user_handler, CreateUserRequest};
pub use delete_user::{__path_delete_user_handler, delete_user_handler};
pub use get_user::{__path_get_user_handler, get_user_handler};
pub use list_users::{__path_list_users_handler, list_users_handler};
pub use update_user::{__path_update_user_handler, update_user_handler, UpdateUserRequest};
