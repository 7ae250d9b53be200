use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Condition, ErrorHandlers, Logger},
    web, App, Error,
};

use crate::config::Config;
use crate::dal::add_dal;
use crate::docs;
use crate::error::developer_error_page;
use crate::logic::add_logic;
use crate::pipeline::{Identification, ResponseBoundary, ResponseTiming};
use crate::routes::{self, health};
use crate::use_cases::{ManageUser, ManageUserUseCase};

/// Access log line; the last field is the reported response time.
const LOG_FORMAT: &str = r#"%a "%r" %s %b %{X-Response-time-Ms}o"#;

/// Collaborators handed to the controllers.
#[derive(Clone)]
pub struct AppServices {
    pub manage_user: web::Data<dyn ManageUserUseCase>,
}

impl AppServices {
    /// Registers the data-access and business-logic layers and the use cases
    /// built on top of them.
    pub fn register() -> Self {
        let dal = add_dal();
        let logic = add_logic(&dal);
        let manage_user: Arc<dyn ManageUserUseCase> = Arc::new(ManageUser::new(&logic));

        Self {
            manage_user: web::Data::from(manage_user),
        }
    }
}

pub fn cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_origin, _req_head| true)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

/// Builds the application: controllers behind the request pipeline.
///
/// Middleware order, outermost first: access log, response boundary,
/// response timing, identification, CORS, and in Development the detailed
/// error page. Services registered on the returned `App` sit behind the same
/// pipeline.
pub fn build_app(
    config: &Config,
    services: &AppServices,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let development = config.environment.is_development();

    App::new()
        .app_data(services.manage_user.clone())
        .configure(|cfg| {
            if development {
                docs::configure(cfg);
            }
        })
        .service(health::health)
        .service(web::scope("/api").configure(routes::config))
        .wrap(Condition::new(
            development,
            ErrorHandlers::new().default_handler(developer_error_page),
        ))
        .wrap(cors())
        .wrap(Identification::new(&config.identity))
        .wrap(ResponseTiming)
        .wrap(ResponseBoundary)
        .wrap(Logger::new(LOG_FORMAT))
}
