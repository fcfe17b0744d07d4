pub(crate) use super::*;
use crate::error::SugerirError;

#[test]
fn test_aggregate_counts_occurrences() {
    let events = vec![
        InteractionEvent::new(1, 10),
        InteractionEvent::new(1, 10),
        InteractionEvent::new(1, 20),
        InteractionEvent::new(2, 10),
    ];

    let aggregated = InteractionAggregator::new()
        .aggregate(&events)
        .expect("well-formed events");

    assert_eq!(aggregated.counts.len(), 3);
    assert_eq!(aggregated.skipped, 0);

    let first = &aggregated.counts[0];
    assert_eq!((first.user_id, first.item_id), (1, 10));
    assert!((first.count - 2.0).abs() < 1e-6);
}

#[test]
fn test_aggregate_sums_weights() {
    let events = vec![
        InteractionEvent::weighted(1, 10, 3.5),
        InteractionEvent::weighted(1, 10, 4.0),
        InteractionEvent::new(1, 10),
    ];

    let aggregated = InteractionAggregator::new()
        .aggregate(&events)
        .expect("well-formed events");

    assert_eq!(aggregated.counts.len(), 1);
    assert!((aggregated.counts[0].count - 8.5).abs() < 1e-6);
}

#[test]
fn test_aggregate_order_invariant() {
    let forward = vec![
        InteractionEvent::new(1, 10),
        InteractionEvent::new(2, 20),
        InteractionEvent::new(1, 10),
        InteractionEvent::weighted(3, 30, 2.0),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let agg = InteractionAggregator::new();
    let a = agg.aggregate(&forward).expect("well-formed events");
    let b = agg.aggregate(&reversed).expect("well-formed events");
    assert_eq!(a, b);
}

#[test]
fn test_aggregate_output_sorted() {
    let events = vec![
        InteractionEvent::new(9, 1),
        InteractionEvent::new(1, 9),
        InteractionEvent::new(5, 5),
        InteractionEvent::new(1, 1),
    ];

    let aggregated = InteractionAggregator::new()
        .aggregate(&events)
        .expect("well-formed events");

    let keys: Vec<(i64, i64)> = aggregated
        .counts
        .iter()
        .map(|c| (c.user_id, c.item_id))
        .collect();
    assert_eq!(keys, vec![(1, 1), (1, 9), (5, 5), (9, 1)]);
}

#[test]
fn test_aggregate_empty_input() {
    let aggregated = InteractionAggregator::new()
        .aggregate(&[])
        .expect("empty input is not an aggregation error");
    assert!(aggregated.counts.is_empty());
}

#[test]
fn test_abort_on_invalid_user() {
    let events = vec![InteractionEvent::new(1, 10), InteractionEvent::new(0, 10)];
    let result = InteractionAggregator::new().aggregate(&events);
    assert!(matches!(
        result,
        Err(SugerirError::InvalidEvent { user_id: 0, .. })
    ));
}

#[test]
fn test_abort_on_invalid_item() {
    let events = vec![InteractionEvent::new(1, -3)];
    let result = InteractionAggregator::new().aggregate(&events);
    assert!(matches!(
        result,
        Err(SugerirError::InvalidEvent { item_id: -3, .. })
    ));
}

#[test]
fn test_abort_on_bad_weight() {
    for w in [-1.0, f32::NAN, f32::INFINITY] {
        let events = vec![InteractionEvent::weighted(1, 1, w)];
        assert!(InteractionAggregator::new().aggregate(&events).is_err());
    }
}

#[test]
fn test_skip_policy_counts_dropped() {
    let events = vec![
        InteractionEvent::new(1, 10),
        InteractionEvent::new(-1, 10),
        InteractionEvent::weighted(2, 20, f32::NAN),
        InteractionEvent::new(2, 20),
    ];

    let aggregated = InteractionAggregator::new()
        .with_policy(ValidationPolicy::Skip)
        .aggregate(&events)
        .expect("skip policy never fails on malformed events");

    assert_eq!(aggregated.skipped, 2);
    assert_eq!(aggregated.counts.len(), 2);
}

#[test]
fn test_default_policy_is_abort() {
    assert_eq!(
        InteractionAggregator::new().policy(),
        ValidationPolicy::Abort
    );
}
