use degreeshift::audit::{audit_blocks, parse_degree_audit, parse_still_needed_courses};
use degreeshift::models::Requirement;

const AUDIT_TEXT: &str = "Ellucian Degree Works\n\
General Education INCOMPLETE\n\
Still needed: 1 Class in ENGL 2116\n\
Major in Computer Science INCOMPLETE\n\
Still needed: 1 Class in ITSC 3146\n\
Still needed: 2 Classes in ITSC 4155, ITSC 4181 or ITSC 4102\n\
Still needed: 120 credit hours are required. You currently have 96\n\
Still needed: See Writing Intensive section\n";

#[test]
fn test_parse_degree_audit_pipeline() {
    let audit = parse_degree_audit(AUDIT_TEXT);
    assert_eq!(audit.text_length, AUDIT_TEXT.len());
    assert_eq!(
        audit.still_needed,
        vec![
            Requirement::course("ENGL2116"),
            Requirement::course("ITSC3146"),
            Requirement::options(2, vec!["ITSC4155".to_string(), "ITSC4181".to_string(), "ITSC4102".to_string()]),
            Requirement::advisory("120 credit hours are required. You currently have 96"),
        ]
    );
    assert_eq!(audit.blocks.get("1 Class in ENGL 2116").map(String::as_str), Some("General Education"));
    assert_eq!(audit.blocks.get("1 Class in ITSC 3146").map(String::as_str), Some("Major in Computer Science"));
}

#[test]
fn test_blocks_ignore_lines_before_first_header() {
    let text = "Still needed: 1 Class in MATH 1120\nMinor in Physics INCOMPLETE\nStill needed: 1 Class in PHYS 2101\n";
    let blocks = audit_blocks(text);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks.get("1 Class in PHYS 2101").map(String::as_str), Some("Minor in Physics"));
}

#[test]
fn test_parser_pick_count_defaults_to_one() {
    let reqs = parse_still_needed_courses("MATH 1241 or MATH 1120\n\n   \nSTAT 1220");
    assert_eq!(
        reqs,
        vec![
            Requirement::options(1, vec!["MATH1241".to_string(), "MATH1120".to_string()]),
            Requirement::course("STAT1220"),
        ]
    );
}

#[test]
fn test_no_still_needed_lines() {
    let audit = parse_degree_audit("Degree complete\nAll requirements satisfied");
    assert!(audit.still_needed.is_empty());
    assert!(audit.blocks.is_empty());
}
