use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::Result;
use crate::models::CourseKey;
use crate::server::AppState;

/// GET /catalog/summary
pub async fn catalog_summary_handler(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.catalog.summary()))
}

/// GET /catalog/{subject}/{number}
/// 404 si el curso no tiene secciones en el catálogo.
pub async fn catalog_course_handler(state: web::Data<AppState>, path: web::Path<(String, String)>) -> Result<HttpResponse> {
    let (subject, number) = path.into_inner();
    let key = CourseKey::new(subject.trim(), number.trim());
    let sections = state.catalog.sections(&key);
    if sections.is_empty() {
        return Ok(HttpResponse::NotFound().json(json!({"error": format!("course {} not found in catalog", key)})));
    }
    Ok(HttpResponse::Ok().json(json!({"course": key.to_string(), "sections": sections})))
}
