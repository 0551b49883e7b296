use shared::domain::Region;

use super::*;
use crate::test_support::employer;

fn sample() -> Vec<EmployerRecord> {
    vec![
        employer("n1", Region::Nsw, "Hospitality"),
        employer("v1", Region::Vic, "Agriculture"),
        employer("q1", Region::Qld, "Mining"),
        employer("v2", Region::Vic, "Mining"),
        employer("w1", Region::Wa, "Agriculture"),
    ]
}

fn ids(records: &[&EmployerRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.to_string()).collect()
}

#[test]
fn region_filter_keeps_matching_records_in_dataset_order() {
    let records = sample();
    let selection = FilterSelection::new(Some("VIC"), Some(""));
    assert_eq!(ids(&apply_filter(&records, &selection)), vec!["v1", "v2"]);
}

#[test]
fn empty_selection_returns_full_dataset() {
    let records = sample();
    let all = apply_filter(&records, &FilterSelection::new(Some(""), Some("")));
    assert_eq!(all.len(), records.len());
    assert!(all.iter().zip(records.iter()).all(|(a, b)| *a == b));
    assert!(FilterSelection::all().is_empty());
}

#[test]
fn both_axes_must_match() {
    let records = sample();
    let selection = FilterSelection::all()
        .with_region(Region::Vic)
        .with_industry("Mining");
    assert_eq!(ids(&apply_filter(&records, &selection)), vec!["v2"]);
}

#[test]
fn industry_filter_alone() {
    let records = sample();
    let selection = FilterSelection::new(None, Some("Agriculture"));
    assert_eq!(ids(&apply_filter(&records, &selection)), vec!["v1", "w1"]);
}

#[test]
fn unmatched_values_yield_no_records() {
    let records = sample();
    assert!(apply_filter(&records, &FilterSelection::new(Some("ZZ"), None)).is_empty());
    assert!(apply_filter(&records, &FilterSelection::new(None, Some("Fishing"))).is_empty());
}

#[test]
fn sentinel_choices_clear_the_axis() {
    let selection = FilterSelection::from_choices("all-states", "all-industries");
    assert_eq!(selection, FilterSelection::all());
    assert_eq!(selection.region_choice(), "all-states");
    assert_eq!(selection.industry_choice(), "all-industries");

    let selection = FilterSelection::from_choices("QLD", "all-industries");
    assert_eq!(selection.region.as_deref(), Some("QLD"));
    assert_eq!(selection.industry, None);
}

#[test]
fn filtering_does_not_mutate_input() {
    let records = sample();
    let before = records.clone();
    let selection = FilterSelection::new(Some("WA"), None);
    let first = ids(&apply_filter(&records, &selection));
    let second = ids(&apply_filter(&records, &selection));
    assert_eq!(first, second);
    assert_eq!(records, before);
}

#[test]
fn blank_and_sentinel_fields_are_unconstrained_however_built() {
    let records = sample();

    let literal = FilterSelection {
        region: Some(String::new()),
        industry: Some(String::new()),
    };
    assert!(literal.is_empty());
    assert_eq!(apply_filter(&records, &literal).len(), records.len());

    let sentinel = FilterSelection {
        region: Some("all-states".to_string()),
        industry: Some("all-industries".to_string()),
    };
    assert_eq!(apply_filter(&records, &sentinel).len(), records.len());
    assert_eq!(sentinel.region_choice(), "all-states");

    let decoded: FilterSelection =
        serde_json::from_str(r#"{"region":"","industry":""}"#).expect("filter json");
    assert_eq!(decoded, FilterSelection::all());
    assert_eq!(apply_filter(&records, &decoded).len(), records.len());

    let decoded: FilterSelection =
        serde_json::from_str(r#"{"region":" VIC "}"#).expect("filter json");
    assert_eq!(decoded.region.as_deref(), Some("VIC"));
    assert_eq!(ids(&apply_filter(&records, &decoded)), vec!["v1", "v2"]);
}
