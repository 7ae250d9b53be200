//! Error handling for the TaskHub API.
//!
//! [`AppError`] is the error type returned by handlers and collaborators.
//! Actix Web turns it into a JSON error response through [`ResponseError`].
//!
//! In Development, [`developer_error_page`] replaces the body of any error
//! response with the error's full details, for local debugging.

use actix_web::{
    dev::ServiceResponse,
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    middleware::ErrorHandlerResponse,
    HttpResponse, ResponseError,
};
use serde_json::json;
use std::fmt;

/// Application-wide error type.
///
/// Handlers and collaborators return `AppError`; Actix Web renders it through
/// [`ResponseError`] as a JSON body of the form `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    /// A requested resource does not exist (HTTP 404).
    NotFound(String),
    /// An unexpected server-side failure (HTTP 500).
    InternalServerError(String),
    /// The process configuration could not be loaded or is invalid.
    /// Fatal at startup; rendered as HTTP 500 if it ever reaches a response.
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// Handlers returning `Result<_, AppError>` get the matching status code and
/// an `{"error": "<message>"}` body.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            // Configuration details stay in the logs.
            AppError::Configuration(_) => HttpResponse::InternalServerError().json(json!({
                "error": "Server misconfigured"
            })),
        }
    }
}

/// Development-mode error page, for use with `ErrorHandlers::default_handler`.
///
/// Responses that carry an error get a JSON body with the error message, its
/// debug representation, and the request method and path. Other headers are
/// kept. Responses without an attached error, such as the router's default
/// 404, pass through unchanged.
pub fn developer_error_page<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (message, detail) = match res.response().error() {
        Some(err) => (err.to_string(), format!("{:?}", err)),
        None => return Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    };

    let (req, res) = res.into_parts();
    let mut page = HttpResponse::build(res.status()).json(json!({
        "error": message,
        "detail": detail,
        "method": req.method().as_str(),
        "path": req.path(),
    }));
    for (name, value) in res.headers() {
        if *name != CONTENT_TYPE && *name != CONTENT_LENGTH {
            page.headers_mut().append(name.clone(), value.clone());
        }
    }

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, page).map_into_right_body(),
    ))
}

impl From<AppError> for std::io::Error {
    fn from(error: AppError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::middleware::ErrorHandlers;
    use actix_web::test as actix_test;
    use actix_web::{web, App};

    async fn missing() -> Result<HttpResponse, AppError> {
        Err(AppError::Configuration("DATABASE_URL is not set".into()))
    }

    #[actix_rt::test]
    async fn test_developer_error_page_shows_details() {
        let app = actix_test::init_service(
            App::new()
                .wrap(ErrorHandlers::new().default_handler(developer_error_page))
                .route("/broken", web::get().to(missing)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/broken").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let json: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(json["error"].as_str().unwrap().contains("DATABASE_URL is not set"));
        assert!(json["detail"].as_str().unwrap().contains("Configuration"));
        assert_eq!(json["method"], "GET");
        assert_eq!(json["path"], "/broken");
    }

    #[actix_rt::test]
    async fn test_developer_error_page_ignores_plain_not_found() {
        let app = actix_test::init_service(
            App::new()
                .wrap(ErrorHandlers::new().default_handler(developer_error_page))
                .route("/broken", web::get().to(missing)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/elsewhere").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body = actix_test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[test]
    fn test_error_responses() {
        let error = AppError::NotFound("User not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::InternalServerError("Lock poisoned".into());
        assert_eq!(error.error_response().status(), 500);

        let error = AppError::Configuration("SERVER_PORT must be a number".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[actix_rt::test]
    async fn test_configuration_error_hides_details() {
        let error = AppError::Configuration("STUDENT_NAME contains a newline".into());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Server misconfigured");
    }

    #[test]
    fn test_display_prefixes() {
        let error = AppError::NotFound("User 42".into());
        assert_eq!(error.to_string(), "Not Found: User 42");
    }
}
