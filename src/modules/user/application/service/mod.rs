mod user_admin_service;

pub use user_admin_service::UserAdminService;
