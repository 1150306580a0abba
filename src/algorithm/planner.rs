// planner.rs - Orquestador del flujo de generación:
//
// FASE 1: resolver requisitos contra el catálogo -> CandidatePool
// FASE 2: búsqueda combinatoria (generator) -> Vec<Schedule>
//
// El catálogo ya viene cargado; no hay I/O ni estado compartido aquí.

use serde::Serialize;
use tracing::info;

use super::generator::{generate_schedules_with_stats, GenerationStats, GeneratorOptions};
use super::resolver::{resolve_requirements, CandidatePool};
use crate::catalog::Catalog;
use crate::error::{Result, SchedulerError};
use crate::models::{Requirement, Schedule};

/// Resultado de una ejecución completa.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    pub pool: CandidatePool,
    pub schedules: Vec<Schedule>,
    pub stats: GenerationStats,
}

impl PlanResult {
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

/// Valida el objetivo de créditos contra las cargas permitidas.
pub fn validate_credit_target(desired: u32, allowed: &[u32]) -> Result<()> {
    if allowed.contains(&desired) {
        Ok(())
    } else {
        Err(SchedulerError::InvalidCreditTarget { requested: desired, allowed: allowed.to_vec() })
    }
}

/// Ejecuta resolver + generador. Sólo falla por opciones inválidas;
/// cero horarios es un resultado normal.
pub fn plan_schedules(catalog: &Catalog, requirements: &[Requirement], opts: &GeneratorOptions) -> Result<PlanResult> {
    if opts.max_schedules == 0 {
        return Err(SchedulerError::InvalidMaxSchedules);
    }

    info!("📋 FASE 1: resolver {} requisitos", requirements.len());
    let pool = resolve_requirements(requirements, catalog);

    info!("📋 FASE 2: búsqueda de combinaciones");
    let outcome = generate_schedules_with_stats(&pool, opts);

    Ok(PlanResult { pool, schedules: outcome.schedules, stats: outcome.stats })
}
