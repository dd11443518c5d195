use super::*;

#[test]
fn status_badge_class_for_known_statuses() {
    assert_eq!(status_badge_class(StatusBadge::for_status("Done")), "badge badge-done");
    assert_eq!(status_badge_class(StatusBadge::for_status("In Progress")), "badge badge-progress");
}

#[test]
fn unknown_status_gets_pending_styling() {
    assert_eq!(status_badge_class(StatusBadge::for_status("Archived")), "badge badge-pending");
}
