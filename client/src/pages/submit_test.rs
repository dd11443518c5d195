use super::*;

#[test]
fn success_banner_hides_after_five_seconds() {
    assert_eq!(success_hide_millis(), 5_000);
}
