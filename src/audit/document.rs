use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, info};

use super::parser::parse_still_needed_courses;
use crate::error::{Result, SchedulerError};
use crate::models::Requirement;

/// Resultado de leer una auditoría de grado.
#[derive(Debug, Clone, Serialize)]
pub struct DegreeAudit {
    pub text_length: usize,
    pub still_needed: Vec<Requirement>,
    /// requisito (texto tras "Still needed:") -> bloque de la auditoría
    pub blocks: BTreeMap<String, String>,
}

/// Texto completo del PDF, páginas concatenadas en orden de lectura.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| SchedulerError::PdfExtract(e.to_string()))?;
    debug!("PDF: {} caracteres extraídos", text.len());
    Ok(text)
}

fn still_needed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?im)Still needed:\s*(\d+.*?)(?:\n|$)").expect("still needed regex"))
}

fn block_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(General Education|Major.*?|Concentration.*?|Minor.*?) (INCOMPLETE|COMPLETE)")
            .expect("block header regex")
    })
}

fn still_needed_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Still needed:\s*(.*)").expect("still needed line regex"))
}

/// Cuerpos de las líneas "Still needed:" que empiezan con un número
/// (p.ej. "1 Class in ..."), unidos por saltos de línea.
pub fn extract_still_needed(full_text: &str) -> String {
    still_needed_re()
        .captures_iter(full_text)
        .map(|c| c[1].trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Asocia cada requisito pendiente con el bloque (General Education,
/// Major..., Concentration..., Minor...) bajo el que aparece.
pub fn audit_blocks(full_text: &str) -> BTreeMap<String, String> {
    let mut blocks = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in full_text.lines() {
        let line = line.trim();
        if let Some(c) = block_header_re().captures(line) {
            current = Some(c[1].trim().to_string());
        }
        if let (Some(c), Some(block)) = (still_needed_line_re().captures(line), current.as_ref()) {
            blocks.insert(c[1].trim().to_string(), block.clone());
        }
    }
    blocks
}

/// Pipeline completo sobre el texto ya extraído.
pub fn parse_degree_audit(full_text: &str) -> DegreeAudit {
    let still_needed_text = extract_still_needed(full_text);
    let still_needed = if still_needed_text.is_empty() {
        debug!("no se encontraron secciones 'Still needed'");
        Vec::new()
    } else {
        parse_still_needed_courses(&still_needed_text)
    };
    let blocks = audit_blocks(full_text);
    info!(
        "🧾 auditoría: {} caracteres, {} requisitos pendientes, {} bloques",
        full_text.len(),
        still_needed.len(),
        blocks.len()
    );
    DegreeAudit { text_length: full_text.len(), still_needed, blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUDIT: &str = "Degree in Computer Science\n\
Major in Computer Science INCOMPLETE\n\
Still needed: 1 Class in ITSC 3146\n\
Still needed: 2 Classes in ITSC 4155, ITSC 4181 or ITSC 4102\n\
Still needed: See Writing Intensive section\n\
Minor in Mathematics COMPLETE\n\
Still needed: 3 Credits in MATH 2164\n";

    #[test]
    fn test_extract_requires_leading_digit() {
        let body = extract_still_needed(AUDIT);
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1 Class in ITSC 3146");
        assert!(!body.contains("Writing Intensive"));
    }

    #[test]
    fn test_blocks_follow_headers() {
        let blocks = audit_blocks(AUDIT);
        assert_eq!(blocks.get("1 Class in ITSC 3146").map(String::as_str), Some("Major in Computer Science"));
        assert_eq!(blocks.get("3 Credits in MATH 2164").map(String::as_str), Some("Minor in Mathematics"));
    }

    #[test]
    fn test_parse_degree_audit() {
        let audit = parse_degree_audit(AUDIT);
        assert_eq!(audit.still_needed.len(), 3);
        assert_eq!(audit.still_needed[0], Requirement::course("ITSC3146"));
        assert!(matches!(&audit.still_needed[1], Requirement::Options { num_to_pick: 2, courses } if courses.len() == 3));
        assert_eq!(audit.text_length, AUDIT.len());
    }

    #[test]
    fn test_no_still_needed_yields_empty() {
        let audit = parse_degree_audit("Nothing to see here");
        assert!(audit.still_needed.is_empty());
    }
}
