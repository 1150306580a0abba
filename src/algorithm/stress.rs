//! Estimador de "estrés" de un horario: concentración de créditos por día,
//! por franja horaria y carga total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::calendar::format_time;
use crate::models::{Schedule, Weekday};
use chrono::Timelike;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Day,
    #[default]
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBlock {
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeBlock::Morning
        } else if hour < 17 {
            TimeBlock::Afternoon
        } else {
            TimeBlock::Evening
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleAnalysis {
    /// créditos por día de reunión
    pub daily_load: BTreeMap<Weekday, u32>,
    /// horas de clase que caen en cada franja
    pub time_blocks: BTreeMap<TimeBlock, u32>,
    /// horas semanales de contacto (horas enteras × días)
    pub total_hours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StressBand {
    Low,
    Moderate,
    High,
}

impl StressBand {
    pub fn from_level(level: f64) -> Self {
        if level < 33.0 {
            StressBand::Low
        } else if level < 66.0 {
            StressBand::Moderate
        } else {
            StressBand::High
        }
    }

    pub fn assessment(self) -> &'static str {
        match self {
            StressBand::Low => "Low stress level. This schedule appears well-balanced.",
            StressBand::Moderate => "Moderate stress level. Be prepared for some challenging days.",
            StressBand::High => "High stress level. Consider redistributing your course load.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StressReport {
    pub level: f64,
    pub band: StressBand,
    pub assessment: String,
    pub tips: Vec<String>,
    pub analysis: ScheduleAnalysis,
}

fn view_tips(view: CalendarView) -> [&'static str; 2] {
    match view {
        CalendarView::Day => ["Plan breaks between classes", "Consider your energy levels throughout the day"],
        CalendarView::Week => ["Balance study time across the week", "Plan ahead for heavy course load days"],
        CalendarView::Month => ["Consider your semester workload distribution", "Plan for major assignments and exams"],
    }
}

pub fn analyze_distribution(schedule: &Schedule) -> ScheduleAnalysis {
    let mut analysis = ScheduleAnalysis::default();

    for s in schedule.sections.iter() {
        let credits = s.display_credits();
        for day in s.days.iter() {
            let load = analysis.daily_load.entry(*day).or_insert(0);
            *load = load.saturating_add(credits);
        }

        let (Some(begin), Some(end)) = (
            s.begin_time.as_deref().and_then(format_time),
            s.end_time.as_deref().and_then(format_time),
        ) else {
            continue;
        };
        let (begin_hour, end_hour) = (begin.hour(), end.hour());
        let hours = end_hour.saturating_sub(begin_hour).saturating_mul(s.days.len() as u32);
        analysis.total_hours = analysis.total_hours.saturating_add(hours);
        for hour in begin_hour..end_hour {
            *analysis.time_blocks.entry(TimeBlock::for_hour(hour)).or_insert(0) += 1;
        }
    }

    analysis
}

fn level_from(schedule: &Schedule, analysis: &ScheduleAnalysis, view: CalendarView, today: Weekday) -> f64 {
    let total_credits = schedule.sections.iter().map(|s| s.display_credits()).fold(0, u32::saturating_add);
    let credit_stress = total_credits as f64 / 18.0 * 100.0;
    let max_daily = analysis.daily_load.values().copied().max().unwrap_or(0);
    let daily_stress = max_daily as f64 / 9.0 * 100.0;
    let max_block = analysis.time_blocks.values().copied().max().unwrap_or(0);
    let block_stress = max_block as f64 / 3.0 * 100.0;

    let level = match view {
        CalendarView::Day => {
            let today_load = analysis.daily_load.get(&today).copied().unwrap_or(0);
            today_load as f64 / 9.0 * 100.0
        }
        CalendarView::Week => credit_stress * 0.4 + daily_stress * 0.4 + block_stress * 0.2,
        CalendarView::Month => credit_stress * 0.6 + daily_stress * 0.2 + block_stress * 0.2,
    };
    level.min(100.0)
}

/// Nivel de estrés 0-100 según la vista del calendario.
pub fn stress_level(schedule: &Schedule, view: CalendarView, today: Weekday) -> f64 {
    level_from(schedule, &analyze_distribution(schedule), view, today)
}

pub fn stress_report(schedule: &Schedule, view: CalendarView, today: Weekday) -> StressReport {
    let analysis = analyze_distribution(schedule);
    let level = level_from(schedule, &analysis, view, today);
    let band = StressBand::from_level(level);
    StressReport {
        level,
        band,
        assessment: band.assessment().to_string(),
        tips: view_tips(view).iter().map(|t| t.to_string()).collect(),
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn sec(number: &str, credits: u32, days: Vec<Weekday>, begin: &str, end: &str) -> Section {
        Section {
            crn: format!("1{}", number),
            subject: "MATH".to_string(),
            course_number: number.to_string(),
            title: String::new(),
            credit_hours: Some(credits),
            days,
            begin_time: Some(begin.to_string()),
            end_time: Some(end.to_string()),
            building: None,
            room: None,
            start_date: None,
            end_date: None,
        }
    }

    fn sample() -> Schedule {
        use Weekday::*;
        Schedule::new(vec![
            sec("1001", 3, vec![Mon, Wed, Fri], "0900", "1000"),
            sec("1002", 3, vec![Mon, Wed, Fri], "1000", "1100"),
            sec("2001", 4, vec![Tue, Thu], "1300", "1430"),
        ])
    }

    #[test]
    fn test_analyze_distribution() {
        let a = analyze_distribution(&sample());
        assert_eq!(a.daily_load.get(&Weekday::Mon), Some(&6));
        assert_eq!(a.daily_load.get(&Weekday::Tue), Some(&4));
        assert_eq!(a.daily_load.get(&Weekday::Sat), None);
        assert_eq!(a.time_blocks.get(&TimeBlock::Morning), Some(&2));
        assert_eq!(a.time_blocks.get(&TimeBlock::Afternoon), Some(&1));
        // 1h×3 + 1h×3 + 1h×2 (se truncan los minutos)
        assert_eq!(a.total_hours, 8);
    }

    #[test]
    fn test_stress_levels_by_view() {
        let s = sample();
        let week = stress_level(&s, CalendarView::Week, Weekday::Mon);
        let month = stress_level(&s, CalendarView::Month, Weekday::Mon);
        let day_tue = stress_level(&s, CalendarView::Day, Weekday::Tue);
        let day_sat = stress_level(&s, CalendarView::Day, Weekday::Sat);
        assert!((week - 62.222).abs() < 0.01, "week = {}", week);
        assert!((month - 60.0).abs() < 0.01, "month = {}", month);
        assert!((day_tue - 44.444).abs() < 0.01, "day = {}", day_tue);
        assert_eq!(day_sat, 0.0);
    }

    #[test]
    fn test_stress_capped_and_empty() {
        use Weekday::*;
        let heavy = Schedule::new(
            (0..8).map(|i| sec(&format!("30{:02}", i), 4, vec![Mon, Tue, Wed, Thu, Fri], "0800", "1100")).collect(),
        );
        assert_eq!(stress_level(&heavy, CalendarView::Week, Mon), 100.0);
        assert_eq!(stress_report(&heavy, CalendarView::Week, Mon).band, StressBand::High);

        let empty = Schedule::new(Vec::new());
        let report = stress_report(&empty, CalendarView::Month, Mon);
        assert_eq!(report.level, 0.0);
        assert_eq!(report.band, StressBand::Low);
        assert_eq!(report.tips.len(), 2);
    }

    #[test]
    fn test_huge_credits_saturate() {
        let mut a = sec("1001", 3, vec![Weekday::Mon], "0900", "1000");
        a.credit_hours = Some(u32::MAX);
        let mut b = sec("1002", 3, vec![Weekday::Mon], "1000", "1100");
        b.credit_hours = Some(u32::MAX);
        let s = Schedule::new(vec![a, b]);
        assert_eq!(analyze_distribution(&s).daily_load.get(&Weekday::Mon), Some(&u32::MAX));
        assert_eq!(stress_level(&s, CalendarView::Week, Weekday::Mon), 100.0);
    }
}
