use crate::{
    error::AppError,
    models::{CreateUserRequest, User},
    use_cases::ManageUserUseCase,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use uuid::Uuid;

/// Lists all users.
///
/// ## Responses:
/// - `200 OK`: JSON array of `User` objects.
/// - `500 Internal Server Error`: the user store is unavailable.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "User store unavailable")
    )
)]
#[get("")]
pub async fn list_users(
    use_case: web::Data<dyn ManageUserUseCase>,
) -> Result<impl Responder, AppError> {
    let users = use_case.list_users()?;
    Ok(HttpResponse::Ok().json(users))
}

/// Creates a user.
///
/// ## Request Body:
/// A JSON object matching `CreateUserRequest` (`username`, `email`).
///
/// ## Responses:
/// - `201 Created`: the created `User`.
/// - `400 Bad Request`: the body is not a valid `CreateUserRequest`.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body")
    )
)]
#[post("")]
pub async fn create_user(
    use_case: web::Data<dyn ManageUserUseCase>,
    payload: web::Json<CreateUserRequest>,
) -> Result<impl Responder, AppError> {
    let user = use_case.create_user(payload.into_inner())?;
    Ok(HttpResponse::Created().json(user))
}

/// Retrieves a user by id.
///
/// ## Responses:
/// - `200 OK`: the `User`.
/// - `404 Not Found`: no user with that id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "User not found")
    )
)]
#[get("/{id}")]
pub async fn get_user(
    use_case: web::Data<dyn ManageUserUseCase>,
    user_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let user = use_case.get_user(user_id.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}
