pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, bootcamp, course, email, geocoding, review, user};

use crate::auth::adapter::incoming::web::extractors::Authenticator;
use crate::auth::adapter::incoming::web::token_cookie::TokenCookieConfig;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::service::{
    ForgotPasswordService, GetMeService, LoginUserService, RegisterUserService,
    ResetPasswordService, UpdateDetailsService, UpdatePasswordService,
};
use crate::bootcamp::adapter::outgoing::bootcamp_repository_postgres::BootcampRepositoryPostgres;
use crate::bootcamp::adapter::outgoing::photo_storage_disk::DiskPhotoStorage;
use crate::bootcamp::application::bootcamp_use_cases::BootcampUseCases;
use crate::bootcamp::application::domain::upload_policy::PhotoUploadPolicy;
use crate::bootcamp::application::service::{
    BootcampsInRadiusService, CreateBootcampService, DeleteBootcampService, GetBootcampService,
    ListBootcampsService, UpdateBootcampService, UploadPhotoService,
};
use crate::config::{AppConfig, MailTransport, RunMode};
use crate::course::adapter::outgoing::course_repository_postgres::CourseRepositoryPostgres;
use crate::course::application::course_use_cases::CourseUseCases;
use crate::course::application::service::CourseService;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::geocoding::adapter::outgoing::MapQuestGeocoder;
use crate::review::adapter::outgoing::review_repository_postgres::ReviewRepositoryPostgres;
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::review::application::service::ReviewService;
use crate::shared::api::json_config::{custom_json_config, custom_path_config, custom_query_config};
use crate::user::application::service::UserAdminService;
use crate::user::application::user_use_cases::UserUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub users: UserUseCases,
    pub bootcamps: BootcampUseCases,
    pub courses: CourseUseCases,
    pub reviews: ReviewUseCases,
    pub token_cookie: TokenCookieConfig,
    pub photo_upload: PhotoUploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(Database::connect(opt).await?);
    info!("Database connected");

    if config.run_migrations {
        Migrator::up(&*db_arc, None).await?;
        info!("Migrations applied");
    }

    // Outgoing adapters
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let hasher = Argon2Hasher::from_env()?;
    let geocoder = MapQuestGeocoder::new(config.geocoder.clone())?;
    let mailer = match &config.mail {
        MailTransport::Relay(smtp) => SmtpEmailSender::new(smtp)?,
        MailTransport::Local {
            host,
            port,
            from_email,
            from_name,
        } => {
            warn!(host = %host, port = port, "Using unauthenticated local SMTP transport");
            SmtpEmailSender::new_local(host, *port, from_email, from_name)
        }
    };

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let bootcamp_repo = BootcampRepositoryPostgres::new(Arc::clone(&db_arc));
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db_arc));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(&db_arc));

    let photo_upload = PhotoUploadPolicy::new(config.max_file_upload);

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            hasher.clone(),
            jwt_service.clone(),
        )),
        login: Arc::new(LoginUserService::new(
            user_repo.clone(),
            hasher.clone(),
            jwt_service.clone(),
        )),
        me: Arc::new(GetMeService::new(user_repo.clone())),
        update_details: Arc::new(UpdateDetailsService::new(user_repo.clone())),
        update_password: Arc::new(UpdatePasswordService::new(
            user_repo.clone(),
            hasher.clone(),
            jwt_service.clone(),
        )),
        forgot_password: Arc::new(ForgotPasswordService::new(user_repo.clone(), mailer)),
        reset_password: Arc::new(ResetPasswordService::new(
            user_repo.clone(),
            hasher.clone(),
            jwt_service.clone(),
        )),
    };

    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let authenticator = web::Data::new(Authenticator::new(tokens, Arc::new(user_repo.clone())));

    let user_admin = Arc::new(UserAdminService::new(user_repo, hasher));
    let users = UserUseCases {
        list: user_admin.clone(),
        get: user_admin.clone(),
        create: user_admin.clone(),
        update: user_admin.clone(),
        delete: user_admin,
    };

    let bootcamps = BootcampUseCases {
        list: Arc::new(ListBootcampsService::new(bootcamp_repo.clone())),
        get: Arc::new(GetBootcampService::new(bootcamp_repo.clone())),
        create: Arc::new(CreateBootcampService::new(
            bootcamp_repo.clone(),
            geocoder.clone(),
        )),
        update: Arc::new(UpdateBootcampService::new(
            bootcamp_repo.clone(),
            geocoder.clone(),
        )),
        delete: Arc::new(DeleteBootcampService::new(bootcamp_repo.clone())),
        in_radius: Arc::new(BootcampsInRadiusService::new(bootcamp_repo.clone(), geocoder)),
        upload_photo: Arc::new(UploadPhotoService::new(
            bootcamp_repo.clone(),
            DiskPhotoStorage::new(config.file_upload_path.clone()),
            photo_upload.clone(),
        )),
    };

    let course_service = Arc::new(CourseService::new(course_repo, bootcamp_repo.clone()));
    let courses = CourseUseCases {
        list: course_service.clone(),
        list_for_bootcamp: course_service.clone(),
        get: course_service.clone(),
        create: course_service.clone(),
        update: course_service.clone(),
        delete: course_service,
    };

    let review_service = Arc::new(ReviewService::new(review_repo, bootcamp_repo));
    let reviews = ReviewUseCases {
        list: review_service.clone(),
        list_for_bootcamp: review_service.clone(),
        get: review_service.clone(),
        create: review_service.clone(),
        update: review_service.clone(),
        delete: review_service,
    };

    let state = AppState {
        auth,
        users,
        bootcamps,
        courses,
        reviews,
        token_cookie: TokenCookieConfig {
            max_age_days: config.cookie_expire_days,
            secure: config.mode == RunMode::Production,
        },
        photo_upload,
    };

    let openapi = api::openapi::ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(authenticator.clone())
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::bootcamp::adapter::incoming::web::routes as bootcamp_routes;
    use crate::course::adapter::incoming::web::routes as course_routes;
    use crate::review::adapter::incoming::web::routes as review_routes;
    use crate::user::adapter::incoming::web::routes as user_routes;

    // Health
    cfg.service(crate::health::health_handler);
    cfg.service(crate::health::ready_handler);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::get_me_handler);
    cfg.service(auth_routes::update_details_handler);
    cfg.service(auth_routes::update_password_handler);
    cfg.service(auth_routes::forgot_password_handler);
    cfg.service(auth_routes::reset_password_handler);
    // Users
    cfg.service(user_routes::list_users_handler);
    cfg.service(user_routes::get_user_handler);
    cfg.service(user_routes::create_user_handler);
    cfg.service(user_routes::update_user_handler);
    cfg.service(user_routes::delete_user_handler);
    // Bootcamps
    cfg.service(bootcamp_routes::list_bootcamps_handler);
    cfg.service(bootcamp_routes::bootcamps_in_radius_handler);
    cfg.service(bootcamp_routes::get_bootcamp_handler);
    cfg.service(bootcamp_routes::create_bootcamp_handler);
    cfg.service(bootcamp_routes::update_bootcamp_handler);
    cfg.service(bootcamp_routes::delete_bootcamp_handler);
    cfg.service(bootcamp_routes::upload_photo_handler);
    // Courses
    cfg.service(course_routes::list_courses_handler);
    cfg.service(course_routes::list_bootcamp_courses_handler);
    cfg.service(course_routes::get_course_handler);
    cfg.service(course_routes::create_course_handler);
    cfg.service(course_routes::update_course_handler);
    cfg.service(course_routes::delete_course_handler);
    // Reviews
    cfg.service(review_routes::list_reviews_handler);
    cfg.service(review_routes::list_bootcamp_reviews_handler);
    cfg.service(review_routes::get_review_handler);
    cfg.service(review_routes::create_review_handler);
    cfg.service(review_routes::update_review_handler);
    cfg.service(review_routes::delete_review_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
