// Estructuras de datos principales: secciones del catálogo, requisitos
// pendientes de la auditoría y horarios generados.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Día de la semana en que se reúne una sección.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Letra usada por el sistema de registro (M T W R F S U).
    pub fn letter(self) -> char {
        match self {
            Weekday::Mon => 'M',
            Weekday::Tue => 'T',
            Weekday::Wed => 'W',
            Weekday::Thu => 'R',
            Weekday::Fri => 'F',
            Weekday::Sat => 'S',
            Weekday::Sun => 'U',
        }
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Mon => chrono::Weekday::Mon,
            Weekday::Tue => chrono::Weekday::Tue,
            Weekday::Wed => chrono::Weekday::Wed,
            Weekday::Thu => chrono::Weekday::Thu,
            Weekday::Fri => chrono::Weekday::Fri,
            Weekday::Sat => chrono::Weekday::Sat,
            Weekday::Sun => chrono::Weekday::Sun,
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Clave del catálogo: (subject, course number), p.ej. ("MATH", "1001").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseKey {
    pub subject: String,
    pub number: String,
}

impl CourseKey {
    pub fn new(subject: impl Into<String>, number: impl Into<String>) -> Self {
        CourseKey { subject: subject.into(), number: number.into() }
    }

    /// Decodifica un código tipo "MATH1001" o "MATH 1001".
    /// Subject = 4 letras ASCII, número = al menos 3 dígitos finales.
    /// Devuelve `None` si el código está mal formado.
    pub fn parse(code: &str) -> Option<Self> {
        let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.len() < 7 || !compact.is_ascii() {
            return None;
        }
        let (subject, number) = compact.split_at(4);
        if !subject.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(CourseKey::new(subject, number))
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.subject, self.number)
    }
}

/// Una oferta concreta de un curso (CRN).
///
/// `begin_time`/`end_time` conservan el texto tal cual ("0930" o "09:30");
/// la conversión a minutos se hace en `algorithm::conflict`. Si sólo una de
/// las dos horas viene en el registro, el cargador deja ambas en `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub crn: String,
    pub subject: String,
    pub course_number: String,
    pub title: String,
    pub credit_hours: Option<u32>,
    #[serde(default)]
    pub days: Vec<Weekday>,
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Section {
    pub fn key(&self) -> CourseKey {
        CourseKey::new(self.subject.clone(), self.course_number.clone())
    }

    /// Créditos para sumas: ausente cuenta como 0.
    pub fn credits_or_zero(&self) -> u32 {
        self.credit_hours.unwrap_or(0)
    }

    /// Créditos para visualización: ausente o 0 se muestra como 3.
    pub fn display_credits(&self) -> u32 {
        match self.credit_hours {
            Some(c) if c > 0 => c,
            _ => 3,
        }
    }

    /// Días en notación compacta, p.ej. "MW".
    pub fn days_label(&self) -> String {
        self.days.iter().map(|d| d.letter()).collect()
    }
}

/// Un requisito "still needed" extraído de la auditoría.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// Curso fijo, p.ej. "PHYS2001".
    Course { code: String },
    /// Elegir `num_to_pick` de `courses`.
    Options { num_to_pick: u32, courses: Vec<String> },
    /// Línea sin código reconocible: se muestra pero no se planifica.
    Advisory { text: String },
}

impl Requirement {
    pub fn course(code: impl Into<String>) -> Self {
        Requirement::Course { code: code.into() }
    }

    pub fn options(num_to_pick: u32, courses: Vec<String>) -> Self {
        Requirement::Options { num_to_pick, courses }
    }

    pub fn advisory(text: impl Into<String>) -> Self {
        Requirement::Advisory { text: text.into() }
    }

    /// Texto para la lista de "Remaining Courses".
    pub fn describe(&self) -> String {
        match self {
            Requirement::Course { code } => code.clone(),
            Requirement::Options { num_to_pick, courses } => {
                format!("Choose {} from: {}", num_to_pick, courses.join(", "))
            }
            Requirement::Advisory { text } => text.clone(),
        }
    }
}

/// Horario candidato: secuencia ordenada de secciones (orden de combinación).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub sections: Vec<Section>,
}

impl Schedule {
    pub fn new(sections: Vec<Section>) -> Self {
        Schedule { sections }
    }

    pub fn total_credits(&self) -> u32 {
        self.sections.iter().map(Section::credits_or_zero).fold(0, u32::saturating_add)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn keys(&self) -> Vec<CourseKey> {
        self.sections.iter().map(Section::key).collect()
    }
}
