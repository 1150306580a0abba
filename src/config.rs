use chrono::NaiveDate;
use std::path::PathBuf;

use crate::algorithm::generator::DEFAULT_MAX_SCHEDULES;
use crate::error::{Result, SchedulerError};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_CATALOG_DIR: &str = "all_courses";
pub const DEFAULT_CREDIT_LOADS: [u32; 3] = [12, 15, 18];

/// Configuración del servicio, leída de variables de entorno (y `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub catalog_dir: PathBuf,
    /// Cargas de créditos aceptadas por la API.
    pub credit_loads: Vec<u32>,
    pub max_schedules: usize,
    /// Techo opcional de combinaciones examinadas; `None` = sin límite.
    pub max_combinations: Option<u64>,
    pub semester_end: Option<NaiveDate>,
    /// Nivel de log del crate cuando `RUST_LOG` no está definido.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND.to_string(),
            catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
            credit_loads: DEFAULT_CREDIT_LOADS.to_vec(),
            max_schedules: DEFAULT_MAX_SCHEDULES,
            max_combinations: None,
            semester_end: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Versión parametrizable para pruebas: recibe la función de búsqueda
    /// de variables en lugar de leer el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = Config::default();

        if let Some(bind) = get("SCHEDULER_BIND") {
            cfg.bind_addr = bind;
        }
        if let Some(dir) = get("SCHEDULER_CATALOG_DIR") {
            cfg.catalog_dir = PathBuf::from(dir);
        }
        if let Some(loads) = get("SCHEDULER_CREDIT_LOADS") {
            cfg.credit_loads = parse_credit_loads(&loads)?;
        }
        if let Some(max) = get("SCHEDULER_MAX_SCHEDULES") {
            let n = max
                .parse::<usize>()
                .map_err(|_| SchedulerError::Config(format!("SCHEDULER_MAX_SCHEDULES must be a positive integer, got '{}'", max)))?;
            if n == 0 {
                return Err(SchedulerError::Config("SCHEDULER_MAX_SCHEDULES must be at least 1".to_string()));
            }
            cfg.max_schedules = n;
        }
        if let Some(ceiling) = get("SCHEDULER_MAX_COMBINATIONS") {
            let n = ceiling
                .parse::<u64>()
                .map_err(|_| SchedulerError::Config(format!("SCHEDULER_MAX_COMBINATIONS must be an integer, got '{}'", ceiling)))?;
            cfg.max_combinations = Some(n);
        }
        if let Some(end) = get("SCHEDULER_SEMESTER_END") {
            let date = NaiveDate::parse_from_str(&end, "%Y-%m-%d")
                .map_err(|_| SchedulerError::Config(format!("SCHEDULER_SEMESTER_END must be YYYY-MM-DD, got '{}'", end)))?;
            cfg.semester_end = Some(date);
        }
        if let Some(level) = get("SCHEDULER_LOG") {
            cfg.log_level = level;
        }
        Ok(cfg)
    }
}

fn parse_credit_loads(raw: &str) -> Result<Vec<u32>> {
    let mut loads = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let n = part
            .parse::<u32>()
            .map_err(|_| SchedulerError::Config(format!("invalid credit load '{}' in SCHEDULER_CREDIT_LOADS", part)))?;
        loads.push(n);
    }
    if loads.is_empty() {
        return Err(SchedulerError::Config("SCHEDULER_CREDIT_LOADS is empty".to_string()));
    }
    Ok(loads)
}
