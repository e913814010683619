use super::*;

fn run(mut anim: CounterAnimation) -> Vec<i64> {
    let mut out = Vec::new();
    while let Some(v) = anim.tick() {
        out.push(v);
        assert!(out.len() < 10_000, "animation never finished");
    }
    out
}

#[test]
fn counts_up_and_lands_on_target() {
    let frames = run(CounterAnimation::new(0, 100, 1000, 16));
    assert_eq!(frames.last(), Some(&100));
    assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    assert!(frames.iter().all(|v| *v <= 100));
}

#[test]
fn counts_down_without_undershooting() {
    let frames = run(CounterAnimation::new(50, 10, 1000, 16));
    assert_eq!(frames.last(), Some(&10));
    assert!(frames.windows(2).all(|w| w[0] >= w[1]));
    assert!(frames.iter().all(|v| *v >= 10));
}

#[test]
fn frame_count_follows_duration() {
    let frames = run(CounterAnimation::new(0, 625, 1000, 16));
    // 1000 / 16 = 62.5 frames, so the target is reached on frame 63.
    assert_eq!(frames.len(), 63);
}

#[test]
fn equal_endpoints_finish_immediately() {
    let mut anim = CounterAnimation::new(7, 7, 1000, 16);
    assert_eq!(anim.tick(), Some(7));
    assert!(anim.is_done());
    assert_eq!(anim.tick(), None);
}

#[test]
fn zero_duration_is_a_single_frame() {
    let frames = run(CounterAnimation::new(0, 40, 0, 16));
    assert_eq!(frames, vec![40]);
}

#[test]
fn parse_metric_reads_leading_integer() {
    assert_eq!(parse_metric("142"), 142);
    assert_eq!(parse_metric(" 15 abiertas"), 15);
    assert_eq!(parse_metric("-3"), -3);
    assert_eq!(parse_metric("+8"), 8);
}

#[test]
fn parse_metric_defaults_to_zero() {
    assert_eq!(parse_metric(""), 0);
    assert_eq!(parse_metric("—"), 0);
    assert_eq!(parse_metric("-"), 0);
}

#[test]
fn metric_targets_keep_numeric_entries() {
    let targets = parse_metric_targets(r#"{"abiertas": 16, "cerradas": 150.7, "nota": "x"}"#).expect("object");
    assert_eq!(targets, vec![("abiertas".to_owned(), 16), ("cerradas".to_owned(), 150)]);
}

#[test]
fn metric_targets_reject_non_objects() {
    assert!(parse_metric_targets("[1, 2]").is_err());
}
