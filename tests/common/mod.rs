#![allow(dead_code)]

use degreeshift::catalog::Catalog;
use degreeshift::models::{Section, Weekday};

/// Días a partir de letras del registro: "MWF", "TR".
pub fn days(letters: &str) -> Vec<Weekday> {
    letters
        .chars()
        .filter_map(|c| Weekday::ALL.iter().copied().find(|d| d.letter() == c))
        .collect()
}

pub fn section(crn: &str, code: &str, credits: u32, day_letters: &str, begin: &str, end: &str) -> Section {
    let (subject, number) = code.split_at(4);
    Section {
        crn: crn.to_string(),
        subject: subject.to_string(),
        course_number: number.to_string(),
        title: format!("{} title", code),
        credit_hours: Some(credits),
        days: days(day_letters),
        begin_time: if begin.is_empty() { None } else { Some(begin.to_string()) },
        end_time: if end.is_empty() { None } else { Some(end.to_string()) },
        building: None,
        room: None,
        start_date: None,
        end_date: None,
    }
}

/// Catálogo del escenario de referencia: MATH1001 y PHYS2001 sin solape,
/// CHEM3001 choca con MATH1001 el lunes.
pub fn scenario_catalog() -> Catalog {
    Catalog::from_sections(vec![
        section("10001", "MATH1001", 3, "MW", "0900", "1000"),
        section("20001", "PHYS2001", 3, "TR", "0900", "1000"),
        section("30001", "CHEM3001", 4, "M", "0930", "1030"),
    ])
}
