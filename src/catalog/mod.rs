//! Catálogo de secciones indexado por (subject, course number).
//!
//! Submódulos:
//! - `raw`: decodificación de los registros JSON del sistema de registro
//! - `loader`: lectura del directorio de catálogo (un JSON por archivo)

pub mod raw;
mod loader;

pub use loader::{load_catalog_dir, sections_from_json, try_load_catalog_dir, read_catalog_file};

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::models::{CourseKey, Section};

/// Mapa inmutable (subject, number) -> secciones, en orden de carga.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: HashMap<CourseKey, Vec<Section>>,
    section_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub subjects: Vec<String>,
    pub courses: usize,
    pub sections: usize,
}

impl Catalog {
    /// Construye el índice en una sola pasada (insertar o anexar).
    pub fn from_sections<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        let mut courses: HashMap<CourseKey, Vec<Section>> = HashMap::new();
        let mut section_count = 0usize;
        for s in sections {
            courses.entry(s.key()).or_default().push(s);
            section_count += 1;
        }
        Catalog { courses, section_count }
    }

    /// Secciones de un curso; slice vacío si no existe.
    pub fn sections(&self, key: &CourseKey) -> &[Section] {
        self.courses.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lookup(&self, subject: &str, number: &str) -> &[Section] {
        self.sections(&CourseKey::new(subject, number))
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn subjects(&self) -> BTreeSet<String> {
        self.courses.keys().map(|k| k.subject.clone()).collect()
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            subjects: self.subjects().into_iter().collect(),
            courses: self.course_count(),
            sections: self.section_count(),
        }
    }
}
