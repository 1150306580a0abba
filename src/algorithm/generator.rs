//! Generador de horarios: búsqueda combinatoria sobre los cursos del pool.
//!
//! Estrategia (determinista):
//! 1. aplanar el pool y quedarse con una sección representativa por
//!    (subject, course number), la primera encontrada ("slot")
//! 2. para r = 1..=n, recorrer las combinaciones de tamaño r en orden
//!    lexicográfico de índices
//! 3. filtrar por ventana de créditos (más barato) y luego por solapamiento
//! 4. detener toda la enumeración al alcanzar `max_schedules` resultados
//!
//! Es una búsqueda de factibilidad, no de optimización: devuelve los primeros
//! M horarios válidos en orden de enumeración, sesgados a menos cursos.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

use super::conflict::is_conflict_free;
use super::resolver::CandidatePool;
use crate::models::{CourseKey, Schedule, Section};

/// Holgura de créditos alrededor del objetivo (±3).
pub const CREDIT_TOLERANCE: u32 = 3;
pub const DEFAULT_MAX_SCHEDULES: usize = 4;

/// Cómo tratar los grupos "elegir N de M".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionGroupPolicy {
    /// Las opciones entran al pool plano igual que los cursos fijos.
    #[default]
    Flat,
    /// Rechaza combinaciones con más de N cursos de un mismo grupo.
    AtMostPick,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub desired_credits: u32,
    pub max_schedules: usize,
    /// Techo de combinaciones examinadas; `None` = sin límite.
    pub max_combinations: Option<u64>,
    pub option_groups: OptionGroupPolicy,
}

impl GeneratorOptions {
    pub fn new(desired_credits: u32) -> Self {
        GeneratorOptions {
            desired_credits,
            max_schedules: DEFAULT_MAX_SCHEDULES,
            max_combinations: None,
            option_groups: OptionGroupPolicy::Flat,
        }
    }

    pub fn with_max_schedules(mut self, max_schedules: usize) -> Self {
        self.max_schedules = max_schedules;
        self
    }

    pub fn with_max_combinations(mut self, ceiling: Option<u64>) -> Self {
        self.max_combinations = ceiling;
        self
    }

    pub fn with_option_groups(mut self, policy: OptionGroupPolicy) -> Self {
        self.option_groups = policy;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub slots: usize,
    pub combinations_examined: u64,
    pub credit_rejections: u64,
    pub conflict_rejections: u64,
    pub option_group_rejections: u64,
    /// true si se cortó por `max_combinations`.
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub schedules: Vec<Schedule>,
    pub stats: GenerationStats,
}

/// Una sección por curso distinto, la primera en orden del pool.
pub fn unique_slots(pool: &CandidatePool) -> Vec<&Section> {
    let mut seen: HashSet<CourseKey> = HashSet::new();
    let mut slots: Vec<&Section> = Vec::new();
    for s in pool.all_sections() {
        if seen.insert(s.key()) {
            slots.push(s);
        }
    }
    slots
}

/// Ventana inclusiva [deseado-3, deseado+3].
pub fn credits_within_window(total: u32, desired: u32) -> bool {
    desired.saturating_sub(CREDIT_TOLERANCE) <= total && total <= desired.saturating_add(CREDIT_TOLERANCE)
}

/// Avanza `idx` a la siguiente combinación lexicográfica de `n` elementos.
/// Devuelve false cuando ya no hay más.
fn next_combination(idx: &mut [usize], n: usize) -> bool {
    let r = idx.len();
    let mut i = r;
    while i > 0 {
        i -= 1;
        if idx[i] < n - r + i {
            idx[i] += 1;
            for j in i + 1..r {
                idx[j] = idx[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

fn exceeds_option_groups(pool: &CandidatePool, combo: &[&Section]) -> bool {
    pool.option_groups().iter().any(|g| {
        let taken = combo.iter().filter(|s| g.keys.contains(&s.key())).count();
        taken > g.num_to_pick as usize
    })
}

pub fn generate_schedules(pool: &CandidatePool, opts: &GeneratorOptions) -> Vec<Schedule> {
    generate_schedules_with_stats(pool, opts).schedules
}

pub fn generate_schedules_with_stats(pool: &CandidatePool, opts: &GeneratorOptions) -> GenerationOutcome {
    let slots = unique_slots(pool);
    let n = slots.len();
    let mut stats = GenerationStats { slots: n, ..Default::default() };
    let mut schedules: Vec<Schedule> = Vec::new();

    info!(
        "🧠 generando horarios: {} secciones en pool, {} slots, créditos deseados {} (±{}), máximo {}",
        pool.total_sections(),
        n,
        opts.desired_credits,
        CREDIT_TOLERANCE,
        opts.max_schedules
    );

    if opts.max_schedules == 0 {
        return GenerationOutcome { schedules, stats };
    }

    'search: for r in 1..=n {
        let mut idx: Vec<usize> = (0..r).collect();
        loop {
            if let Some(limit) = opts.max_combinations {
                if stats.combinations_examined >= limit {
                    stats.truncated = true;
                    break 'search;
                }
            }
            stats.combinations_examined += 1;

            let combo: Vec<&Section> = idx.iter().map(|&i| slots[i]).collect();
            let total = combo.iter().map(|s| s.credits_or_zero()).fold(0, u32::saturating_add);

            if !credits_within_window(total, opts.desired_credits) {
                stats.credit_rejections += 1;
            } else if !is_conflict_free(&combo) {
                stats.conflict_rejections += 1;
            } else if opts.option_groups == OptionGroupPolicy::AtMostPick && exceeds_option_groups(pool, &combo) {
                stats.option_group_rejections += 1;
            } else {
                schedules.push(Schedule::new(combo.into_iter().cloned().collect()));
                if schedules.len() >= opts.max_schedules {
                    break 'search;
                }
            }

            if !next_combination(&mut idx, n) {
                break;
            }
        }
    }

    info!(
        "✅ {} horarios válidos ({} combinaciones examinadas{})",
        schedules.len(),
        stats.combinations_examined,
        if stats.truncated { ", enumeración truncada" } else { "" }
    );

    if schedules.is_empty() {
        info!("No se generaron horarios válidos. Posibles causas:");
        info!(
            "1. No hay cursos suficientes para llegar a {} créditos (±{})",
            opts.desired_credits, CREDIT_TOLERANCE
        );
        info!("2. Los cursos requeridos se solapan entre sí");
        info!(
            "3. Ninguna combinación de cursos cae dentro de {} ±{} créditos",
            opts.desired_credits, CREDIT_TOLERANCE
        );
    }

    GenerationOutcome { schedules, stats }
}
