//! Lectura de la auditoría de grado: texto del PDF, líneas "Still needed"
//! y su conversión a `Requirement`.

mod document;
mod parser;

pub use document::{audit_blocks, extract_still_needed, extract_text_from_pdf, parse_degree_audit, DegreeAudit};
pub use parser::parse_still_needed_courses;
