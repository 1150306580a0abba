use actix_web::{web, HttpResponse};
use std::time::Instant;
use tracing::info;

use super::run_blocking;
use crate::algorithm::{plan_schedules, validate_credit_target};
use crate::api_json::{ScheduleEntry, ScheduleRequest, ScheduleResponse};
use crate::error::{Result, SchedulerError};
use crate::server::AppState;

/// POST /schedules
///
/// Valida la carga de créditos, resuelve los requisitos contra el catálogo
/// cargado al inicio y ejecuta la búsqueda en un hilo bloqueante. Las búsquedas
/// concurrentes quedan limitadas por el semáforo del estado (uno por CPU).
pub async fn schedules_handler(state: web::Data<AppState>, body: web::Json<ScheduleRequest>) -> Result<HttpResponse> {
    let request = body.into_inner();
    validate_credit_target(request.desired_credits, &state.config.credit_loads)?;
    let opts = request.generator_options(state.config.max_schedules, state.config.max_combinations);
    if opts.max_schedules == 0 {
        return Err(SchedulerError::InvalidMaxSchedules);
    }

    let permit = state
        .generation_slots
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| SchedulerError::Internal("failed to acquire semaphore".to_string()))?;

    let start = Instant::now();
    let catalog = state.catalog.clone();
    let plan = run_blocking(move || {
        let _permit = permit;
        plan_schedules(&catalog, &request.requirements, &opts)
    })
    .await?;
    info!(
        "⏱ /schedules: {} horarios, {} combinaciones en {} ms",
        plan.schedules.len(),
        plan.stats.combinations_examined,
        start.elapsed().as_millis()
    );

    let message = if plan.schedules.is_empty() {
        Some(
            "No valid schedules found. Possible reasons: not enough courses to reach the desired credits, \
             time conflicts between required courses, or no sections available for some courses."
                .to_string(),
        )
    } else {
        None
    };

    let resp = ScheduleResponse {
        pool_size: plan.pool_size(),
        pool_sections: plan.pool.total_sections(),
        skipped_codes: plan.pool.skipped_codes().to_vec(),
        advisories: plan.pool.advisories().to_vec(),
        stats: plan.stats,
        schedules: plan.schedules.into_iter().map(ScheduleEntry::from).collect(),
        message,
    };
    Ok(HttpResponse::Ok().json(resp))
}
