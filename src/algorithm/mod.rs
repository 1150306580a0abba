// Módulo de alto nivel del generador de horarios.
pub mod calendar;
pub mod conflict;
pub mod generator;
pub mod planner;
pub mod resolver;
pub mod stress;

pub use calendar::{project_schedule, CalendarEvent, CalendarProjection, ProjectionWindow, SkippedSection};
pub use conflict::{intervals_overlap, meetings_overlap, sections_overlap, time_to_minutes, MeetingSlot};
pub use generator::{
    generate_schedules, generate_schedules_with_stats, unique_slots, GenerationOutcome, GenerationStats,
    GeneratorOptions, OptionGroupPolicy, CREDIT_TOLERANCE, DEFAULT_MAX_SCHEDULES,
};
pub use planner::{plan_schedules, validate_credit_target, PlanResult};
pub use resolver::{resolve_requirements, CandidatePool, OptionGroupLimit, PoolEntry};
pub use stress::{analyze_distribution, stress_level, stress_report, CalendarView, ScheduleAnalysis, StressBand, StressReport};
