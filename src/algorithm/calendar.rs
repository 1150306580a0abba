// Proyección de un horario a eventos de calendario semanales.
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Schedule, Section, Weekday};

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionWindow {
    /// Primer día a partir del cual se buscan las reuniones.
    pub today: NaiveDate,
    /// Fin por defecto si la sección no trae su propia fecha de término.
    pub semester_end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: String,
    pub text_color: String,
    pub border_color: String,
    pub credits: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSection {
    pub course: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CalendarProjection {
    pub events: Vec<CalendarEvent>,
    pub skipped: Vec<SkippedSection>,
}

/// Normaliza "1330", "13:30" o "13:30:00" a `NaiveTime`.
pub fn format_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return None;
    }
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        let h = raw[..2].parse::<u32>().ok()?;
        let m = raw[2..].parse::<u32>().ok()?;
        return NaiveTime::from_hms_opt(h, m, 0);
    }
    let parts: Vec<&str> = raw.split(':').collect();
    let nums: Option<Vec<u32>> = parts.iter().map(|p| p.parse::<u32>().ok()).collect();
    match nums?.as_slice() {
        [h, m] => NaiveTime::from_hms_opt(*h, *m, 0),
        [h, m, s] => NaiveTime::from_hms_opt(*h, *m, *s),
        _ => None,
    }
}

/// Fecha de la reunión tal como viene del catálogo ("08/19/2024") o ISO.
pub fn parse_meeting_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Primera fecha >= `from` que cae en `day`; `None` si se sale del rango de fechas.
pub fn next_occurrence(from: NaiveDate, day: Weekday) -> Option<NaiveDate> {
    let target = day.to_chrono().num_days_from_monday() as i64;
    let current = from.weekday().num_days_from_monday() as i64;
    let ahead = (target - current).rem_euclid(7);
    from.checked_add_signed(Duration::days(ahead))
}

fn course_label(s: &Section) -> String {
    format!("{} {}", s.subject, s.course_number)
}

/// Genera un evento por cada reunión semanal de cada sección, desde
/// `window.today` hasta la fecha de término (inclusive). La fecha de término
/// de la sección nunca extiende la ventana más allá de `semester_end`.
pub fn project_schedule(schedule: &Schedule, window: &ProjectionWindow) -> CalendarProjection {
    let mut out = CalendarProjection::default();

    for (i, section) in schedule.sections.iter().enumerate() {
        let label = course_label(section);
        let (Some(begin_raw), Some(end_raw)) = (section.begin_time.as_deref(), section.end_time.as_deref()) else {
            out.skipped.push(SkippedSection {
                course: label,
                reason: "does not have scheduled times and will not appear on the calendar".to_string(),
            });
            continue;
        };
        let (Some(begin), Some(end)) = (format_time(begin_raw), format_time(end_raw)) else {
            warn!("formato de hora inválido para {}: {}-{}", label, begin_raw, end_raw);
            out.skipped.push(SkippedSection { course: label, reason: "invalid time format".to_string() });
            continue;
        };

        let last_day = section
            .end_date
            .as_deref()
            .and_then(parse_meeting_date)
            .map_or(window.semester_end, |end| end.min(window.semester_end));
        let color = PALETTE[i % PALETTE.len()].to_string();
        let description = if section.title.trim().is_empty() {
            "No description available".to_string()
        } else {
            section.title.clone()
        };

        for day in section.days.iter() {
            let Some(mut date) = next_occurrence(window.today, *day) else {
                continue;
            };
            while date <= last_day {
                out.events.push(CalendarEvent {
                    title: label.clone(),
                    start: date.and_time(begin),
                    end: date.and_time(end),
                    color: color.clone(),
                    text_color: "white".to_string(),
                    border_color: "rgba(0,0,0,0.2)".to_string(),
                    credits: section.display_credits(),
                    description: description.clone(),
                });
                match date.checked_add_signed(Duration::days(7)) {
                    Some(next) => date = next,
                    None => break,
                }
            }
        }
    }

    out
}
