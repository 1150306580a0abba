use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::models::{CourseKey, Requirement, Section};

/// Código de requisito con las secciones encontradas en el catálogo.
#[derive(Debug, Clone, Serialize)]
pub struct PoolEntry {
    pub code: String,
    pub key: CourseKey,
    pub sections: Vec<Section>,
}

/// Grupo "elegir N de M" tal como quedó en el pool (sólo códigos válidos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroupLimit {
    pub num_to_pick: u32,
    pub keys: Vec<CourseKey>,
}

/// Pool de candidatos: código -> secciones, en orden de primera inserción.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CandidatePool {
    entries: Vec<PoolEntry>,
    option_groups: Vec<OptionGroupLimit>,
    skipped_codes: Vec<String>,
    advisories: Vec<String>,
}

impl CandidatePool {
    /// Inserta o anexa: un código repetido acumula secciones en la misma entrada.
    fn insert_or_extend(&mut self, code: &str, key: CourseKey, sections: &[Section]) {
        match self.entries.iter_mut().find(|e| e.code == code) {
            Some(entry) => entry.sections.extend_from_slice(sections),
            None => self.entries.push(PoolEntry {
                code: code.to_string(),
                key,
                sections: sections.to_vec(),
            }),
        }
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    pub fn get(&self, code: &str) -> Option<&[Section]> {
        self.entries.iter().find(|e| e.code == code).map(|e| e.sections.as_slice())
    }

    /// Número de códigos en el pool (diagnóstico para la UI).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_sections(&self) -> usize {
        self.entries.iter().map(|e| e.sections.len()).sum()
    }

    /// Todas las secciones aplanadas en orden del pool.
    pub fn all_sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().flat_map(|e| e.sections.iter())
    }

    pub fn option_groups(&self) -> &[OptionGroupLimit] {
        &self.option_groups
    }

    /// Códigos mal formados que no se pudieron buscar.
    pub fn skipped_codes(&self) -> &[String] {
        &self.skipped_codes
    }

    pub fn advisories(&self) -> &[String] {
        &self.advisories
    }
}

/// Busca un código en el catálogo e inserta el resultado en el pool.
/// Devuelve la clave si el código estaba bien formado.
fn resolve_code(pool: &mut CandidatePool, catalog: &Catalog, code: &str, is_option: bool) -> Option<CourseKey> {
    let Some(key) = CourseKey::parse(code) else {
        warn!("⊘ código de curso inválido{}: '{}'", if is_option { " (opción)" } else { "" }, code);
        pool.skipped_codes.push(code.to_string());
        return None;
    };
    let sections = catalog.sections(&key);
    debug!(
        "buscando {}{} {} -> {} secciones",
        if is_option { "opción " } else { "" },
        key.subject,
        key.number,
        sections.len()
    );
    pool.insert_or_extend(code, key.clone(), sections);
    Some(key)
}

/// Construye el pool de candidatos para los requisitos dados.
///
/// Cursos fijos y cada opción de un grupo se insertan de forma independiente;
/// un curso sin secciones queda con lista vacía. Los textos informativos no
/// se planifican.
pub fn resolve_requirements(requirements: &[Requirement], catalog: &Catalog) -> CandidatePool {
    let mut pool = CandidatePool::default();

    for req in requirements {
        match req {
            Requirement::Course { code } => {
                resolve_code(&mut pool, catalog, code, false);
            }
            Requirement::Options { num_to_pick, courses } => {
                let keys: Vec<CourseKey> = courses
                    .iter()
                    .filter_map(|code| resolve_code(&mut pool, catalog, code, true))
                    .collect();
                if *num_to_pick == 0 {
                    warn!("grupo de opciones con num_to_pick = 0; se usa 1");
                }
                if !keys.is_empty() {
                    pool.option_groups.push(OptionGroupLimit { num_to_pick: (*num_to_pick).max(1), keys });
                }
            }
            Requirement::Advisory { text } => {
                debug!("requisito informativo (no planificable): {}", text);
                pool.advisories.push(text.clone());
            }
        }
    }

    info!("🔍 pool de candidatos: {} códigos, {} secciones", pool.len(), pool.total_sections());
    pool
}
