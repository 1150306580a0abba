use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::catalog::{load_catalog_dir, Catalog};
use crate::config::Config;
use crate::server_handlers::{
    audit_pdf_handler, audit_text_handler, calendar_handler, catalog_course_handler, catalog_summary_handler,
    help_handler, schedules_handler,
};

/// Estado compartido por todos los workers. El catálogo se carga una vez al
/// inicio y es de sólo lectura.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Config,
    pub generation_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let procs = std::cmp::max(1, num_cpus::get());
        AppState { catalog: Arc::new(catalog), config, generation_slots: Arc::new(Semaphore::new(procs)) }
    }
}

/// Rutas de la API; se usa tanto en `run_server` como en los tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/audit/text", web::post().to(audit_text_handler))
        .route("/audit/pdf", web::post().to(audit_pdf_handler))
        .route("/schedules", web::post().to(schedules_handler))
        .route("/calendar", web::post().to(calendar_handler))
        .route("/catalog/summary", web::get().to(catalog_summary_handler))
        .route("/catalog/{subject}/{number}", web::get().to(catalog_course_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let catalog = load_catalog_dir(&config.catalog_dir);
    if catalog.is_empty() {
        warn!("⚠️  catálogo vacío en {}: /schedules no encontrará secciones", config.catalog_dir.display());
    }
    info!(
        "📚 catálogo: {} cursos, {} secciones",
        catalog.course_count(),
        catalog.section_count()
    );

    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::new(catalog, config));
    info!("Iniciando servidor en http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
