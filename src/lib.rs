// Biblioteca raíz del crate `degreeshift`.
// Reexporta los módulos principales: catálogo, auditoría, generador de
// horarios, calendario y el servidor HTTP que los expone.
pub mod algorithm;
pub mod api_json;
pub mod audit;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod server_handlers;

pub use algorithm::{generate_schedules, plan_schedules, resolve_requirements, GeneratorOptions};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Result, SchedulerError};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
