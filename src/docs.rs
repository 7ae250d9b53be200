use actix_web::{get, web, HttpResponse, Responder};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use crate::models::{CreateUserRequest, User};

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";
pub const UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(title = "TaskHub Api", version = "v1"),
    paths(
        crate::routes::health::health,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
    ),
    components(schemas(User, CreateUserRequest)),
    tags(
        (name = "health", description = "Liveness"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

#[get("/swagger/v1/swagger.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Mounts the OpenAPI document and its interactive viewer.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json)
        .service(Scalar::with_url(UI_PATH, ApiDoc::openapi()));
}
