pub mod bootcamp_repository;
pub mod photo_storage;

pub use bootcamp_repository::{BootcampChanges, BootcampRepository, NewBootcamp};
pub use photo_storage::{PhotoStorage, PhotoStorageError};
