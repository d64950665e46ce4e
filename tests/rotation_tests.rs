#![allow(clippy::unwrap_used)]

use study_scheduler_bot::planner::TopicRotation;

fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_full_cycle_returns_topics_in_order() {
    let mut rotation = TopicRotation::new(topics(&["alpha", "beta", "gamma"])).unwrap();

    assert_eq!(rotation.advance(), "alpha");
    assert_eq!(rotation.advance(), "beta");
    assert_eq!(rotation.advance(), "gamma");
}

#[test]
fn test_rotation_wraps_after_last_topic() {
    let names = ["alpha", "beta", "gamma"];
    let mut rotation = TopicRotation::new(topics(&names)).unwrap();

    for name in names {
        assert_eq!(rotation.advance(), name);
    }
    // Call N+1 starts the cycle over
    assert_eq!(rotation.advance(), "alpha");
    assert_eq!(rotation.cursor(), 1);
}

#[test]
fn test_cursor_stays_within_bounds() {
    let mut rotation = TopicRotation::new(topics(&["a", "b"])).unwrap();

    for _ in 0..7 {
        rotation.advance();
        assert!(rotation.cursor() < rotation.len());
    }
    assert_eq!(rotation.cursor(), 1);
}

#[test]
fn test_single_topic_repeats_forever() {
    let mut rotation = TopicRotation::new(topics(&["only"])).unwrap();

    assert_eq!(rotation.advance(), "only");
    assert_eq!(rotation.advance(), "only");
    assert_eq!(rotation.cursor(), 0);
}

#[test]
fn test_empty_topic_list_is_a_construction_error() {
    let result = TopicRotation::new(Vec::new());
    assert!(result.is_err());
    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("empty"));
}
