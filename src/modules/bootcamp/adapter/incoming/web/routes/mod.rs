mod bootcamps_in_radius;
mod create_bootcamp;
mod delete_bootcamp;
mod get_bootcamp;
mod list_bootcamps;
mod update_bootcamp;
mod upload_photo;

pub use bootcamps_in_radius::{__path_bootcamps_in_radius_handler, bootcamps_in_radius_handler};
pub use create_bootcamp::{
    __path_create_bootcamp_handler, create_bootcamp_handler, CreateBootcampRequest,
};
pub use delete_bootcamp::{__path_delete_bootcamp_handler, delete_bootcamp_handler};
pub use get_bootcamp::{__path_get_bootcamp_handler, get_bootcamp_handler};
pub use list_bootcamps::{__path_list_bootcamps_handler, list_bootcamps_handler};
pub use update_bootcamp::{
    __path_update_bootcamp_handler, update_bootcamp_handler, UpdateBootcampRequest,
};
pub use upload_photo::{__path_upload_photo_handler, upload_photo_handler, PhotoForm};
