use actix_web::{web, HttpResponse};
use chrono::{Datelike, Duration, NaiveDate};
use serde_json::json;

use crate::algorithm::{project_schedule, stress_report, ProjectionWindow};
use crate::api_json::CalendarRequest;
use crate::error::{Result, SchedulerError};
use crate::models::{Schedule, Weekday};
use crate::server::AppState;

/// Semanas proyectadas cuando no hay fecha de término configurada.
pub const DEFAULT_SEMESTER_WEEKS: i64 = 16;
/// Longitud máxima de la ventana de proyección.
pub const MAX_PROJECTION_DAYS: i64 = 366;

/// Ventana de proyección: `semester_end` de la petición, luego el de la
/// configuración, luego hoy + 16 semanas. Se rechaza un fin anterior a hoy
/// o a más de `MAX_PROJECTION_DAYS` días.
pub fn projection_window(today: NaiveDate, requested: Option<NaiveDate>, configured: Option<NaiveDate>) -> Result<ProjectionWindow> {
    let semester_end = match requested.or(configured) {
        Some(end) => end,
        None => today
            .checked_add_signed(Duration::weeks(DEFAULT_SEMESTER_WEEKS))
            .ok_or_else(|| SchedulerError::InvalidDate(format!("today {} is out of range", today)))?,
    };
    if semester_end < today {
        return Err(SchedulerError::InvalidDate(format!("semester_end {} is before {}", semester_end, today)));
    }
    if (semester_end - today).num_days() > MAX_PROJECTION_DAYS {
        return Err(SchedulerError::InvalidDate(format!(
            "semester_end {} is more than {} days after {}",
            semester_end, MAX_PROJECTION_DAYS, today
        )));
    }
    Ok(ProjectionWindow { today, semester_end })
}

/// POST /calendar
/// Proyecta un horario elegido a eventos de calendario y calcula el nivel de estrés.
pub async fn calendar_handler(state: web::Data<AppState>, body: web::Json<CalendarRequest>) -> Result<HttpResponse> {
    let request = body.into_inner();
    let today = request.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let window = projection_window(today, request.semester_end, state.config.semester_end)?;

    let schedule = Schedule::new(request.schedule);
    let projection = project_schedule(&schedule, &window);
    let stress = stress_report(&schedule, request.view, Weekday::from_chrono(today.weekday()));

    Ok(HttpResponse::Ok().json(json!({
        "window": window,
        "total_credits": schedule.total_credits(),
        "events": projection.events,
        "skipped": projection.skipped,
        "analysis": stress.analysis,
        "stress": stress,
    })))
}
