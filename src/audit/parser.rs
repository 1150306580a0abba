use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::models::Requirement;

fn course_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // 4 letras + 4 dígitos, con espacio opcional ("MATH 1001")
    RE.get_or_init(|| Regex::new(r"\b([A-Z]{4}\s*\d{4})\b").expect("course code regex"))
}

fn pick_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*(?:Class|Classes)").expect("pick count regex"))
}

fn compact(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parsea las líneas "still needed" en requisitos, en orden de entrada.
///
/// - más de un código en la línea -> grupo de opciones; la cantidad a elegir
///   sale de "<N> Class/Classes" o es 1
/// - exactamente un código -> curso fijo
/// - ningún código -> texto informativo (la línea completa)
///
/// Líneas vacías se ignoran; no se deduplica entre líneas.
pub fn parse_still_needed_courses(text: &str) -> Vec<Requirement> {
    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let codes: Vec<String> = course_code_re()
            .captures_iter(line)
            .map(|c| compact(&c[1]))
            .collect();

        let req = match codes.len() {
            0 => Requirement::advisory(line),
            1 => Requirement::course(codes[0].clone()),
            _ => {
                let mut num_to_pick = pick_count_re()
                    .captures(line)
                    .and_then(|c| c[1].parse::<u32>().ok())
                    .unwrap_or(1);
                if num_to_pick == 0 {
                    warn!("línea '{}' pide 0 cursos; se usa 1", line);
                    num_to_pick = 1;
                }
                Requirement::options(num_to_pick, codes)
            }
        };
        debug!("línea '{}' -> {:?}", line, req);
        out.push(req);
    }
    out
}
