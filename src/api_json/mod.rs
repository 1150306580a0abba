use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::algorithm::{CalendarView, GenerationStats, GeneratorOptions, OptionGroupPolicy};
use crate::models::{Requirement, Schedule, Section};

/// Petición de generación de horarios.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "requirements": [
///     {"type": "course", "code": "PHYS2001"},
///     {"type": "options", "num_to_pick": 2, "courses": ["CHEM3001", "CHEM3002"]},
///     {"type": "advisory", "text": "120 credit hours are required"}
///   ],
///   "desired_credits": 15,
///   "max_schedules": 4,
///   "enforce_option_groups": false
/// }
/// ```
///
/// - `desired_credits`: debe ser una de las cargas configuradas (12/15/18 por defecto)
/// - `max_schedules`: opcional; si falta se usa el valor configurado
/// - `enforce_option_groups`: opcional; limita cada grupo a N cursos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub requirements: Vec<Requirement>,
    pub desired_credits: u32,
    #[serde(default)]
    pub max_schedules: Option<usize>,
    #[serde(default)]
    pub enforce_option_groups: bool,
}

impl ScheduleRequest {
    /// Opciones del generador combinando la petición con los valores por defecto.
    pub fn generator_options(&self, default_max: usize, max_combinations: Option<u64>) -> GeneratorOptions {
        let policy = if self.enforce_option_groups {
            OptionGroupPolicy::AtMostPick
        } else {
            OptionGroupPolicy::Flat
        };
        GeneratorOptions::new(self.desired_credits)
            .with_max_schedules(self.max_schedules.unwrap_or(default_max))
            .with_max_combinations(max_combinations)
            .with_option_groups(policy)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub total_credits: u32,
    pub sections: Vec<Section>,
}

impl From<Schedule> for ScheduleEntry {
    fn from(s: Schedule) -> Self {
        ScheduleEntry { total_credits: s.total_credits(), sections: s.sections }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub pool_size: usize,
    pub pool_sections: usize,
    pub skipped_codes: Vec<String>,
    pub advisories: Vec<String>,
    pub schedules: Vec<ScheduleEntry>,
    pub stats: GenerationStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTextRequest {
    pub text: String,
}

/// Petición de proyección a calendario + análisis de estrés.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    pub schedule: Vec<Section>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub semester_end: Option<NaiveDate>,
    #[serde(default)]
    pub view: CalendarView,
}

pub fn parse_schedule_request(json_str: &str) -> Result<ScheduleRequest, serde_json::Error> {
    serde_json::from_str::<ScheduleRequest>(json_str)
}
