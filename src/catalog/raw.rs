//! Decodificación de los registros crudos del catálogo (formato del
//! sistema de registro: `{"data": [ {...sección...}, ... ]}`).

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::models::{Section, Weekday};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSection {
    #[serde(default, deserialize_with = "string_or_number")]
    pub course_reference_number: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub course_number: Option<String>,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub credit_hours: Option<f64>,
    #[serde(default)]
    pub meetings_faculty: Option<Vec<RawMeetingFaculty>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeetingFaculty {
    #[serde(default)]
    pub meeting_time: Option<RawMeetingTime>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeetingTime {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    pub building: Option<String>,
    pub room: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub monday: bool,
    #[serde(default)]
    pub tuesday: bool,
    #[serde(default)]
    pub wednesday: bool,
    #[serde(default)]
    pub thursday: bool,
    #[serde(default)]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub sunday: bool,
}

impl RawMeetingTime {
    fn days(&self) -> Vec<Weekday> {
        let flags = [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ];
        Weekday::ALL
            .iter()
            .zip(flags)
            .filter(|(_, on)| *on)
            .map(|(d, _)| *d)
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Créditos por encima de este valor se consideran un dato corrupto.
pub const MAX_CREDIT_HOURS: f64 = 30.0;

fn credits_from_raw(raw: Option<f64>) -> Option<u32> {
    match raw {
        Some(c) if c.is_finite() && (0.0..=MAX_CREDIT_HOURS).contains(&c) => Some(c.round() as u32),
        Some(c) => {
            warn!("creditHours fuera de rango ({}); se trata como ausente", c);
            None
        }
        None => None,
    }
}

impl RawSection {
    /// Convierte el registro en `Section`. Devuelve `None` si falta subject
    /// o course number (el registro se descarta sin error).
    pub fn into_section(self) -> Option<Section> {
        let subject = non_empty(self.subject)?;
        let course_number = non_empty(self.course_number)?;

        // sólo se consulta la primera reunión
        let meeting = self
            .meetings_faculty
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|m| m.meeting_time)
            .unwrap_or_default();

        let days = meeting.days();
        let mut begin_time = non_empty(meeting.begin_time);
        let mut end_time = non_empty(meeting.end_time);
        if begin_time.is_some() != end_time.is_some() {
            warn!(
                "sección {}{} con sólo una hora ({:?}-{:?}); se trata como sin horario",
                subject, course_number, begin_time, end_time
            );
            begin_time = None;
            end_time = None;
        }

        Some(Section {
            crn: non_empty(self.course_reference_number).unwrap_or_default(),
            subject,
            course_number,
            title: non_empty(self.course_title).unwrap_or_default(),
            credit_hours: credits_from_raw(self.credit_hours),
            days,
            begin_time,
            end_time,
            building: non_empty(meeting.building),
            room: non_empty(meeting.room),
            start_date: non_empty(meeting.start_date),
            end_date: non_empty(meeting.end_date),
        })
    }
}
