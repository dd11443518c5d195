use super::*;
use crate::test_helpers::record;

fn sample_set() -> ResultSet {
    ResultSet::new(vec![
        record("a", "Pending"),
        record("b", "Done"),
        record("c", "In Progress"),
        record("d", "Done"),
        record("e", "pending"),
    ])
}

fn titles(records: &[&RequirementRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn parse_all_and_status() {
    assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
    assert_eq!(StatusFilter::parse("Done"), StatusFilter::Status("Done".to_owned()));
    assert_eq!(StatusFilter::parse("Done").key(), "Done");
    assert_eq!(StatusFilter::All.key(), "all");
}

#[test]
fn filter_all_returns_full_set_in_order() {
    let set = sample_set();
    assert_eq!(titles(&set.filter(&StatusFilter::All)), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn filter_by_status_is_exact_and_order_preserving() {
    let set = sample_set();
    assert_eq!(titles(&set.filter(&StatusFilter::parse("Done"))), vec!["b", "d"]);
    assert_eq!(titles(&set.filter(&StatusFilter::parse("Pending"))), vec!["a"]);
    assert_eq!(titles(&set.filter(&StatusFilter::parse("In Progress"))), vec!["c"]);
}

#[test]
fn filter_by_unknown_status_is_empty() {
    let set = sample_set();
    assert!(set.filter(&StatusFilter::parse("Archived")).is_empty());
}

#[test]
fn all_after_any_filter_sequence_restores_full_set() {
    let set = sample_set();
    for key in ["Done", "Archived", "Pending", "In Progress"] {
        let _ = set.filter(&StatusFilter::parse(key));
    }
    assert_eq!(set.filter(&StatusFilter::All).len(), set.len());
    assert_eq!(titles(&set.filter(&StatusFilter::All)), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn replace_swaps_whole_set() {
    let mut set = sample_set();
    set.replace(vec![record("z", "Done")]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.records()[0].title, "z");
}

#[test]
fn choices_start_with_all() {
    let choices = StatusFilter::choices();
    assert_eq!(choices.len(), 4);
    assert_eq!(choices[0], StatusFilter::All);
    assert_eq!(choices[0].label(), "All");
    assert_eq!(choices[2].label(), "In Progress");
}
