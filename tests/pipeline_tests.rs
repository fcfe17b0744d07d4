//! End-to-end pipeline tests: events in, ranked item ids out.

use sugerir::prelude::*;

#[test]
fn full_pipeline_stage_by_stage() {
    let events = vec![
        InteractionEvent::new(1, 1),
        InteractionEvent::new(1, 2),
        InteractionEvent::new(2, 1),
        InteractionEvent::new(2, 2),
        InteractionEvent::new(2, 3),
        InteractionEvent::new(3, 3),
    ];

    let aggregated = InteractionAggregator::new()
        .aggregate(&events)
        .expect("well-formed events");
    assert_eq!(aggregated.counts.len(), 6);

    let matrix = InteractionMatrix::from_counts(&aggregated.counts).expect("non-empty counts");
    assert_eq!(matrix.shape(), (3, 3));

    let similarity = UserSimilarity::from_interactions(&matrix);
    // User 1 is closer to user 2 (shared items 1, 2) than to user 3.
    let row = similarity.user_row(1).expect("user 1 exists");
    assert!(row.get(1) > row.get(2));

    let recommender = UserBasedRecommender::from_counts(&aggregated.counts)
        .expect("non-empty counts");
    assert_eq!(recommender.recommend(1, 2, 2).expect("known user"), vec![3]);
}

#[test]
fn scale_run_over_synthetic_purchases() {
    let events = PurchaseSimulator::new(200, 50)
        .with_seed(7)
        .with_weight_range(3.0, 5.0)
        .generate(8_000);

    let recommender = UserBasedRecommender::fit(&events).expect("valid events");
    let (n_users, n_items) = recommender.shape();
    assert!(n_users <= 200 && n_items <= 50);

    for &user in recommender.interactions().user_ids().iter().take(25) {
        let picks = recommender.recommend_default(user).expect("known user");
        assert!(picks.len() <= 5);
        for item in picks {
            let owned = recommender
                .interactions()
                .get(user, item)
                .expect("recommended ids come from the item axis");
            assert_eq!(owned, 0.0, "user {user} already owns item {item}");
        }
    }
}

#[test]
fn fitted_model_survives_serde_round_trip() {
    let events = vec![
        InteractionEvent::new(1, 10),
        InteractionEvent::new(2, 10),
        InteractionEvent::new(2, 20),
    ];
    let recommender = UserBasedRecommender::fit(&events).expect("valid events");

    let json = serde_json::to_string(&recommender).expect("serializes");
    let restored: UserBasedRecommender = serde_json::from_str(&json).expect("deserializes");

    assert_eq!(recommender, restored);
    assert_eq!(
        restored.recommend(1, 5, 10).expect("known user"),
        vec![20]
    );
}

#[test]
fn skip_policy_end_to_end() {
    let mut events = PurchaseSimulator::new(30, 10).with_seed(9).generate(300);
    events.push(InteractionEvent::new(-1, 5));
    events.push(InteractionEvent::weighted(4, 5, f32::NAN));

    let recommender =
        UserBasedRecommender::fit_with_policy(&events, ValidationPolicy::Skip)
            .expect("skip policy drops the bad events");
    assert_eq!(recommender.n_skipped(), 2);
}
