use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::api_json::ScheduleRequest;
use crate::models::Requirement;
use crate::server::AppState;

/// GET /help
pub async fn help_handler(state: web::Data<AppState>) -> HttpResponse {
    // Ejemplo de cuerpo para POST /schedules
    let example = ScheduleRequest {
        requirements: vec![
            Requirement::course("PHYS2001"),
            Requirement::options(2, vec!["CHEM3001".to_string(), "CHEM3002".to_string(), "CHEM3003".to_string()]),
            Requirement::advisory("120 credit hours are required. You currently have 96"),
        ],
        desired_credits: state.config.credit_loads.first().copied().unwrap_or(12),
        max_schedules: Some(state.config.max_schedules),
        enforce_option_groups: false,
    };

    HttpResponse::Ok().json(json!({
        "description": "API para generar horarios sin conflictos a partir de una auditoría de grado. \
                        Flujo: POST /audit/pdf (o /audit/text) -> POST /schedules con los requisitos -> POST /calendar con el horario elegido.",
        "endpoints": {
            "POST /audit/text": "body {\"text\": ...}; devuelve still_needed y bloques de la auditoría",
            "POST /audit/pdf": "multipart con un archivo PDF",
            "POST /schedules": "genera horarios (ver 'schedules_example')",
            "POST /calendar": "body {\"schedule\": [secciones], \"today\"?, \"semester_end\"?, \"view\": day|week|month}",
            "GET /catalog/summary": "materias, cursos y secciones cargadas",
            "GET /catalog/{subject}/{number}": "secciones de un curso",
        },
        "schedules_example": example,
        "credit_loads": state.config.credit_loads,
        "max_schedules_default": state.config.max_schedules,
        "catalog": state.catalog.summary(),
    }))
}
