// Primitiva de solapamiento de horarios entre secciones.
use tracing::warn;

use crate::models::{Section, Weekday};

/// Descriptor de reunión: días + hora de inicio/fin en texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingSlot<'a> {
    pub days: &'a [Weekday],
    pub begin: &'a str,
    pub end: &'a str,
}

fn checked_minutes(h: u32, m: u32) -> Option<u32> {
    h.checked_mul(60).and_then(|x| x.checked_add(m))
}

/// Convierte "HHMM" o "HH:MM" a minutos desde medianoche.
/// Texto vacío, mal formado o con números que desbordan -> 0 (se registra el valor).
pub fn time_to_minutes(t: &str) -> u32 {
    let t = t.trim();
    if t.is_empty() {
        return 0;
    }
    if t.len() == 4 && t.chars().all(|c| c.is_ascii_digit()) {
        let (hh, mm) = t.split_at(2);
        if let (Ok(h), Ok(m)) = (hh.parse::<u32>(), mm.parse::<u32>()) {
            return h * 60 + m;
        }
    }
    let parts: Vec<&str> = t.split(':').collect();
    if parts.len() == 2 {
        if let (Ok(h), Ok(m)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
            if let Some(total) = checked_minutes(h, m) {
                return total;
            }
        }
    }
    warn!("formato de hora inválido: '{}'", t);
    0
}

/// Intervalos semiabiertos [inicio, fin): tocarse en el borde no es conflicto.
pub fn intervals_overlap(a: (u32, u32), b: (u32, u32)) -> bool {
    a.0.max(b.0) < a.1.min(b.1)
}

/// Descriptor de la sección, o `None` si no tiene días u horas, o si
/// inicio >= fin (se trata como sección asíncrona).
pub fn meeting_slot(section: &Section) -> Option<MeetingSlot<'_>> {
    let begin = section.begin_time.as_deref()?;
    let end = section.end_time.as_deref()?;
    if section.days.is_empty() || begin.trim().is_empty() || end.trim().is_empty() {
        return None;
    }
    if time_to_minutes(begin) >= time_to_minutes(end) {
        return None;
    }
    Some(MeetingSlot { days: &section.days, begin, end })
}

/// True si ambos descriptores existen, comparten algún día y sus horas se solapan.
pub fn meetings_overlap(a: Option<MeetingSlot<'_>>, b: Option<MeetingSlot<'_>>) -> bool {
    let (Some(a), Some(b)) = (a, b) else { return false };
    if !a.days.iter().any(|d| b.days.contains(d)) {
        return false;
    }
    let t1 = (time_to_minutes(a.begin), time_to_minutes(a.end));
    let t2 = (time_to_minutes(b.begin), time_to_minutes(b.end));
    intervals_overlap(t1, t2)
}

pub fn sections_overlap(a: &Section, b: &Section) -> bool {
    meetings_overlap(meeting_slot(a), meeting_slot(b))
}

/// Ningún par de secciones se solapa.
pub fn is_conflict_free(sections: &[&Section]) -> bool {
    for (i, s1) in sections.iter().enumerate() {
        for s2 in sections[i + 1..].iter() {
            if sections_overlap(s1, s2) {
                return false;
            }
        }
    }
    true
}
