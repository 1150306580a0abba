use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::Catalog;
use super::raw::RawSection;
use crate::error::{Result, SchedulerError};
use crate::models::Section;

/// Carga el catálogo desde `dir`. Si el directorio no existe o no se puede
/// leer devuelve un catálogo vacío (se registra el error, no se aborta).
pub fn load_catalog_dir(dir: &Path) -> Catalog {
    match try_load_catalog_dir(dir) {
        Ok(cat) => cat,
        Err(e) => {
            warn!("⚠️  {}; usando catálogo vacío", e);
            Catalog::default()
        }
    }
}

/// Igual que `load_catalog_dir` pero distingue el directorio ausente.
/// Archivos ilegibles o registros corruptos se omiten individualmente.
pub fn try_load_catalog_dir(dir: &Path) -> Result<Catalog> {
    if !dir.is_dir() {
        return Err(SchedulerError::CatalogDirMissing(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| SchedulerError::CatalogDirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    // orden determinista de archivos
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().and_then(|x| x.to_str()) == Some("json"))
        .collect();
    files.sort();

    let mut sections: Vec<Section> = Vec::new();
    for path in files.iter() {
        match read_catalog_file(path) {
            Ok(mut secs) => {
                debug!("{}: {} secciones", path.display(), secs.len());
                sections.append(&mut secs);
            }
            Err(e) => warn!("⚠️  omitiendo {}: {}", path.display(), e),
        }
    }

    let catalog = Catalog::from_sections(sections);
    info!(
        "📚 catálogo cargado desde {}: {} archivos, {} cursos, {} secciones",
        dir.display(),
        files.len(),
        catalog.course_count(),
        catalog.section_count()
    );
    Ok(catalog)
}

/// Lee un archivo JSON del catálogo y devuelve sus secciones válidas.
pub fn read_catalog_file(path: &Path) -> Result<Vec<Section>> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    Ok(sections_from_json(&value))
}

/// Extrae las secciones de un documento `{"data": [...]}`. Cualquier otra
/// forma produce una lista vacía; registros que no decodifican o sin
/// subject/course number se descartan.
pub fn sections_from_json(value: &Value) -> Vec<Section> {
    let Some(records) = value.get("data").and_then(Value::as_array) else {
        debug!("documento de catálogo sin arreglo 'data'; ignorado");
        return Vec::new();
    };

    let mut out = Vec::with_capacity(records.len());
    for (idx, rec) in records.iter().enumerate() {
        match serde_json::from_value::<RawSection>(rec.clone()) {
            Ok(raw) => match raw.into_section() {
                Some(s) => out.push(s),
                None => debug!("registro {} sin subject/courseNumber; descartado", idx),
            },
            Err(e) => warn!("⚠️  registro {} corrupto: {}", idx, e),
        }
    }
    out
}
