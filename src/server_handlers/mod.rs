//! Handlers HTTP. Cada handler recibe el estado compartido (`AppState`) vía
//! `web::Data` y devuelve JSON; los errores se convierten con `ResponseError`.
pub mod audit;
pub mod calendar;
pub mod catalog;
pub mod docs;
pub mod schedules;

pub use audit::*;
pub use calendar::*;
pub use catalog::*;
pub use docs::*;
pub use schedules::*;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::error::SchedulerError;

impl ResponseError for SchedulerError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}

/// Ejecuta trabajo de CPU fuera del runtime async.
pub(crate) async fn run_blocking<T, F>(f: F) -> crate::error::Result<T>
where
    F: FnOnce() -> crate::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(res) => res,
        Err(e) => Err(SchedulerError::Internal(format!("task join error: {}", e))),
    }
}
