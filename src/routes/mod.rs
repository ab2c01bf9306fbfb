// Route exports
pub mod dashboard;
pub mod page;

use actix_web::{error, http::StatusCode, web, HttpResponse};

pub use dashboard::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(page::index)).service(
        web::scope("/api/v1")
            .configure(dashboard::configure),
    );
}

/// JSON error for rejected query strings
#[derive(Debug, serde::Serialize)]
pub struct QueryError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for QueryError {}

impl error::ResponseError for QueryError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    QueryError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}
