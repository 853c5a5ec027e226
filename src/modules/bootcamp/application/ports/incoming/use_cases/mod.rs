mod bootcamps_in_radius;
mod create_bootcamp;
mod delete_bootcamp;
mod get_bootcamp;
mod list_bootcamps;
mod update_bootcamp;
mod upload_photo;

pub use bootcamps_in_radius::BootcampsInRadiusUseCase;
pub use create_bootcamp::CreateBootcampUseCase;
pub use delete_bootcamp::DeleteBootcampUseCase;
pub use get_bootcamp::GetBootcampUseCase;
pub use list_bootcamps::ListBootcampsUseCase;
pub use update_bootcamp::{BootcampPatch, UpdateBootcampUseCase};
pub use upload_photo::UploadPhotoUseCase;
