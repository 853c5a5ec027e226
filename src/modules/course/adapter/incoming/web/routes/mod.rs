mod create_course;
mod delete_course;
mod get_course;
mod list_bootcamp_courses;
mod list_courses;
mod update_course;

pub use create_course::{__path_create_course_handler, create_course_handler, CreateCourseRequest};
pub use delete_course::{__path_delete_course_handler, delete_course_handler};
pub use get_course::{__path_get_course_handler, get_course_handler};
pub use list_bootcamp_courses::{__path_list_bootcamp_courses_handler, list_bootcamp_courses_handler};
pub use list_courses::{__path_list_courses_handler, list_courses_handler};
pub use update_course::{__path_update_course_handler, update_course_handler, UpdateCourseRequest};
