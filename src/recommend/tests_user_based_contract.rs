// End-to-end ranking contracts: owned-item exclusion, length bound,
// determinism, and a worked three-user scenario.

use super::*;

#[test]
fn contract_three_user_scenario() {
    // A (1) buys items 1 and 2; B (2) buys 1, 2, 3; C (3) buys only 3.
    // B is the neighbor closest to A and contributes item 3; A's items 1
    // and 2 are excluded as owned.
    let events = vec![
        InteractionEvent::new(1, 1),
        InteractionEvent::new(1, 2),
        InteractionEvent::new(2, 1),
        InteractionEvent::new(2, 2),
        InteractionEvent::new(2, 3),
        InteractionEvent::new(3, 3),
    ];

    let recommender = UserBasedRecommender::fit(&events).expect("valid events");
    assert_eq!(recommender.recommend(1, 2, 2).expect("known user"), vec![3]);
}

#[test]
fn contract_unknown_user_is_an_error() {
    let recommender =
        UserBasedRecommender::fit(&[InteractionEvent::new(1, 1)]).expect("valid events");
    assert!(matches!(
        recommender.recommend(42, 2, 2),
        Err(SugerirError::UnknownUser { user_id: 42 })
    ));
}

#[test]
fn contract_empty_interactions_fail_at_build() {
    assert!(matches!(
        UserBasedRecommender::fit(&[]),
        Err(SugerirError::EmptyInput { .. })
    ));
}

#[test]
fn contract_identical_runs_identical_output() {
    let events = vec![
        InteractionEvent::weighted(1, 10, 4.0),
        InteractionEvent::new(2, 10),
        InteractionEvent::new(2, 20),
        InteractionEvent::weighted(3, 20, 2.5),
        InteractionEvent::new(3, 30),
    ];

    let a = UserBasedRecommender::fit(&events).expect("valid events");
    let b = UserBasedRecommender::fit(&events).expect("valid events");
    for user in [1, 2, 3] {
        assert_eq!(
            a.recommend(user, 5, 10).expect("known user"),
            b.recommend(user, 5, 10).expect("known user")
        );
    }
}

mod generated {
    use super::*;
    use proptest::prelude::*;

    fn arb_events() -> impl Strategy<Value = Vec<InteractionEvent>> {
        prop::collection::vec(
            (1_i64..12, 1_i64..10).prop_map(|(u, i)| InteractionEvent::new(u, i)),
            1..80,
        )
    }

    proptest! {
        #[test]
        fn generated_output_never_contains_owned_items(
            events in arb_events(),
            top_n in 0_usize..8,
            neighborhood in 0_usize..8,
        ) {
            let recommender = UserBasedRecommender::fit(&events).expect("valid events");

            for &user in recommender.interactions().user_ids() {
                let picks = recommender
                    .recommend(user, top_n, neighborhood)
                    .expect("every listed user is known");

                prop_assert!(picks.len() <= top_n);
                for item in picks {
                    let value = recommender
                        .interactions()
                        .get(user, item)
                        .expect("recommended ids come from the item axis");
                    prop_assert!(value == 0.0, "user {user} already owns item {item}");
                }
            }
        }

        #[test]
        fn generated_input_order_never_matters(events in arb_events()) {
            let mut reversed = events.clone();
            reversed.reverse();

            let forward = UserBasedRecommender::fit(&events).expect("valid events");
            let backward = UserBasedRecommender::fit(&reversed).expect("valid events");

            for &user in forward.interactions().user_ids() {
                prop_assert_eq!(
                    forward.recommend(user, 5, 10).expect("known user"),
                    backward.recommend(user, 5, 10).expect("known user")
                );
            }
        }
    }
}
