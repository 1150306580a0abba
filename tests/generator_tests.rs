mod common;

use common::{scenario_catalog, section};
use degreeshift::algorithm::{
    generate_schedules, generate_schedules_with_stats, plan_schedules, resolve_requirements, unique_slots,
    GeneratorOptions, OptionGroupPolicy,
};
use degreeshift::catalog::Catalog;
use degreeshift::models::{CourseKey, Requirement, Schedule};

fn codes(s: &Schedule) -> Vec<String> {
    s.keys().iter().map(|k| k.to_string()).collect()
}

fn scenario_requirements() -> Vec<Requirement> {
    vec![
        Requirement::course("MATH1001"),
        Requirement::course("PHYS2001"),
        Requirement::course("CHEM3001"),
    ]
}

#[test]
fn test_end_to_end_scenario() {
    let catalog = scenario_catalog();
    let pool = resolve_requirements(&scenario_requirements(), &catalog);
    let opts = GeneratorOptions::new(6).with_max_schedules(10);
    let out = generate_schedules_with_stats(&pool, &opts);

    let all: Vec<Vec<String>> = out.schedules.iter().map(codes).collect();
    eprintln!("horarios: {:?}", all);
    assert!(all.contains(&vec!["MATH1001".to_string(), "PHYS2001".to_string()]), "MATH+PHYS es válido");
    assert!(!all.contains(&vec!["MATH1001".to_string(), "CHEM3001".to_string()]), "MATH+CHEM choca el lunes");
    // r=1: 3 individuales; r=2: MATH+PHYS, PHYS+CHEM; r=3: 10 créditos fuera de ventana
    assert_eq!(all.len(), 5);
    assert_eq!(out.stats.combinations_examined, 7);
    assert_eq!(out.stats.conflict_rejections, 1);
    assert_eq!(out.stats.credit_rejections, 1);
    assert!(!out.stats.truncated);
}

#[test]
fn test_every_schedule_respects_window_and_conflicts() {
    let catalog = Catalog::from_sections(vec![
        section("1", "MATH1001", 3, "MWF", "0800", "0850"),
        section("2", "MATH1002", 4, "MWF", "0830", "0920"),
        section("3", "PHYS2001", 4, "TR", "0930", "1045"),
        section("4", "CHEM3001", 3, "TR", "1000", "1115"),
        section("5", "HIST1001", 3, "MW", "1300", "1415"),
        section("6", "ENGL1001", 3, "F", "1300", "1550"),
        section("7", "ARTS1001", 2, "", "", ""),
    ]);
    let reqs: Vec<Requirement> = ["MATH1001", "MATH1002", "PHYS2001", "CHEM3001", "HIST1001", "ENGL1001", "ARTS1001"]
        .iter()
        .map(|c| Requirement::course(*c))
        .collect();
    let pool = resolve_requirements(&reqs, &catalog);
    let schedules = generate_schedules(&pool, &GeneratorOptions::new(15).with_max_schedules(50));

    assert!(!schedules.is_empty());
    for s in schedules.iter() {
        let total = s.total_credits();
        assert!((12..=18).contains(&total), "créditos fuera de ventana: {}", total);
        let refs: Vec<_> = s.sections.iter().collect();
        assert!(degreeshift::algorithm::conflict::is_conflict_free(&refs), "horario con conflicto: {:?}", codes(s));
        let keys = s.keys();
        let mut dedup = keys.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), keys.len(), "curso repetido en un horario");
    }
}

#[test]
fn test_early_exit_returns_first_in_enumeration_order() {
    let catalog = Catalog::from_sections(
        (0..6).map(|i| section(&format!("{}", i), &format!("MATH10{:02}", i), 3, "", "", "")).collect::<Vec<_>>(),
    );
    let reqs: Vec<Requirement> = (0..6).map(|i| Requirement::course(format!("MATH10{:02}", i))).collect();
    let pool = resolve_requirements(&reqs, &catalog);

    let all = generate_schedules(&pool, &GeneratorOptions::new(6).with_max_schedules(1000));
    let first_three = generate_schedules_with_stats(&pool, &GeneratorOptions::new(6).with_max_schedules(3));

    assert_eq!(first_three.schedules.len(), 3);
    assert_eq!(first_three.schedules, all[..3].to_vec(), "los primeros M en orden de enumeración");
    // r=1: 6 combinaciones de 3 créditos, todas válidas; se corta en la tercera
    assert_eq!(first_three.stats.combinations_examined, 3);
}

#[test]
fn test_generation_is_deterministic() {
    let catalog = scenario_catalog();
    let pool = resolve_requirements(&scenario_requirements(), &catalog);
    let opts = GeneratorOptions::new(9).with_max_schedules(10);
    let a = generate_schedules(&pool, &opts);
    let b = generate_schedules(&pool, &opts);
    assert_eq!(a, b);
}

#[test]
fn test_slot_dedup_keeps_first_section() {
    let catalog = Catalog::from_sections(vec![
        section("111", "MATH1001", 3, "MW", "0900", "1000"),
        section("112", "MATH1001", 3, "TR", "0900", "1000"),
        section("201", "PHYS2001", 3, "F", "0900", "1000"),
    ]);
    let pool = resolve_requirements(&[Requirement::course("MATH1001"), Requirement::course("PHYS2001")], &catalog);
    assert_eq!(pool.total_sections(), 3);
    let slots = unique_slots(&pool);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].crn, "111");
    assert_eq!(slots[1].key(), CourseKey::new("PHYS", "2001"));
}

#[test]
fn test_empty_pool_yields_no_schedules() {
    let catalog = Catalog::default();
    let pool = resolve_requirements(&[Requirement::course("MATH1001")], &catalog);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.total_sections(), 0);
    let out = generate_schedules_with_stats(&pool, &GeneratorOptions::new(12));
    assert!(out.schedules.is_empty());
    assert_eq!(out.stats.slots, 0);
    assert_eq!(out.stats.combinations_examined, 0);
}

#[test]
fn test_zero_max_schedules() {
    let catalog = scenario_catalog();
    let pool = resolve_requirements(&scenario_requirements(), &catalog);
    assert!(generate_schedules(&pool, &GeneratorOptions::new(6).with_max_schedules(0)).is_empty());
    assert!(plan_schedules(&catalog, &scenario_requirements(), &GeneratorOptions::new(6).with_max_schedules(0)).is_err());
}

#[test]
fn test_low_target_saturates_window() {
    // objetivo 2 -> ventana [0, 5]
    let catalog = scenario_catalog();
    let pool = resolve_requirements(&scenario_requirements(), &catalog);
    let schedules = generate_schedules(&pool, &GeneratorOptions::new(2).with_max_schedules(10));
    assert_eq!(schedules.len(), 3, "sólo los cursos individuales caben");
}

#[test]
fn test_option_group_policy() {
    let catalog = Catalog::from_sections(vec![
        section("1", "CHEM3001", 3, "M", "0800", "0900"),
        section("2", "CHEM3002", 3, "T", "0800", "0900"),
        section("3", "CHEM3003", 3, "W", "0800", "0900"),
    ]);
    let reqs = vec![Requirement::options(
        1,
        vec!["CHEM3001".to_string(), "CHEM3002".to_string(), "CHEM3003".to_string()],
    )];
    let pool = resolve_requirements(&reqs, &catalog);
    assert_eq!(pool.option_groups().len(), 1);

    let flat = generate_schedules(&pool, &GeneratorOptions::new(6).with_max_schedules(10));
    assert!(flat.iter().any(|s| s.len() > 1), "modo plano admite varias opciones del grupo");

    let capped = generate_schedules_with_stats(
        &pool,
        &GeneratorOptions::new(6).with_max_schedules(10).with_option_groups(OptionGroupPolicy::AtMostPick),
    );
    assert_eq!(capped.schedules.len(), 3);
    assert!(capped.schedules.iter().all(|s| s.len() == 1));
    assert!(capped.stats.option_group_rejections > 0);
}

#[test]
fn test_combination_ceiling_truncates() {
    let catalog = scenario_catalog();
    let pool = resolve_requirements(&scenario_requirements(), &catalog);
    let out = generate_schedules_with_stats(
        &pool,
        &GeneratorOptions::new(6).with_max_schedules(10).with_max_combinations(Some(2)),
    );
    assert!(out.stats.truncated);
    assert_eq!(out.stats.combinations_examined, 2);
    assert_eq!(out.schedules.len(), 2);
}

#[test]
fn test_huge_credit_values_do_not_abort_search() {
    // créditos enormes (p.ej. sección armada a mano para /calendar) no deben desbordar la suma
    let mut big_a = section("1", "MATH1001", 0, "M", "0800", "0900");
    big_a.credit_hours = Some(u32::MAX);
    let mut big_b = section("2", "PHYS2001", 0, "T", "0800", "0900");
    big_b.credit_hours = Some(u32::MAX);
    let normal = section("3", "CHEM3001", 3, "W", "0800", "0900");
    let catalog = Catalog::from_sections(vec![big_a, big_b, normal]);
    let reqs = vec![Requirement::course("MATH1001"), Requirement::course("PHYS2001"), Requirement::course("CHEM3001")];
    let pool = resolve_requirements(&reqs, &catalog);

    let out = generate_schedules_with_stats(&pool, &GeneratorOptions::new(15).with_max_schedules(10));
    assert!(out.schedules.is_empty(), "ninguna combinación cae en [12, 18]");
    assert_eq!(out.stats.combinations_examined, 7);

    let out = generate_schedules(&pool, &GeneratorOptions::new(3).with_max_schedules(10));
    assert_eq!(out.len(), 1);
    assert_eq!(codes(&out[0]), vec!["CHEM3001".to_string()]);
    let saturated = Schedule::new(pool.all_sections().cloned().collect());
    assert_eq!(saturated.total_credits(), u32::MAX);
}

#[test]
fn test_zero_pick_group_behaves_as_one() {
    let catalog = Catalog::from_sections(vec![
        section("1", "CHEM3001", 3, "M", "0800", "0900"),
        section("2", "CHEM3002", 3, "T", "0800", "0900"),
    ]);
    let reqs = vec![Requirement::options(0, vec!["CHEM3001".to_string(), "CHEM3002".to_string()])];
    let pool = resolve_requirements(&reqs, &catalog);
    assert_eq!(pool.option_groups()[0].num_to_pick, 1);

    let schedules = generate_schedules(
        &pool,
        &GeneratorOptions::new(3).with_max_schedules(10).with_option_groups(OptionGroupPolicy::AtMostPick),
    );
    assert_eq!(schedules.len(), 2, "cada opción por separado sigue siendo válida");
}
