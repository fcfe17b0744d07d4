// Metric-space properties of the similarity table: symmetry, unit
// diagonal, bounded range, and the zero-row convention. Checked over
// hand-picked and generated interaction sets.

use super::*;
use crate::interaction::{InteractionAggregator, InteractionCount, InteractionEvent};

fn table_from(events: &[InteractionEvent]) -> UserSimilarity {
    let aggregated = InteractionAggregator::new()
        .aggregate(events)
        .expect("well-formed events");
    let matrix = InteractionMatrix::from_counts(&aggregated.counts).expect("non-empty counts");
    UserSimilarity::from_interactions(&matrix)
}

fn sample_tables() -> Vec<UserSimilarity> {
    vec![
        table_from(&[InteractionEvent::new(1, 1)]),
        table_from(&[
            InteractionEvent::new(1, 1),
            InteractionEvent::new(2, 1),
            InteractionEvent::new(2, 2),
        ]),
        table_from(&[
            InteractionEvent::weighted(1, 10, 4.5),
            InteractionEvent::weighted(2, 10, 3.0),
            InteractionEvent::weighted(2, 20, 5.0),
            InteractionEvent::weighted(3, 30, 3.5),
            InteractionEvent::new(4, 10),
            InteractionEvent::new(4, 30),
        ]),
    ]
}

#[test]
fn contract_symmetric() {
    for (t, sim) in sample_tables().iter().enumerate() {
        let n = sim.n_users();
        for i in 0..n {
            for j in 0..n {
                assert!(
                    (sim.get(i, j) - sim.get(j, i)).abs() < 1e-6,
                    "table {t}: sim({i},{j}) != sim({j},{i})"
                );
            }
        }
    }
}

#[test]
fn contract_unit_diagonal_for_active_users() {
    // Every aggregated user has at least one interaction, so each
    // self-similarity must be exactly 1.0.
    for (t, sim) in sample_tables().iter().enumerate() {
        for i in 0..sim.n_users() {
            assert!(
                (sim.get(i, i) - 1.0).abs() < 1e-6,
                "table {t}: diagonal at {i} is {}",
                sim.get(i, i)
            );
        }
    }
}

#[test]
fn contract_range_bounded() {
    // Non-negative interaction vectors put every entry in [0, 1].
    for (t, sim) in sample_tables().iter().enumerate() {
        let n = sim.n_users();
        for i in 0..n {
            for j in 0..n {
                let s = sim.get(i, j);
                assert!(s.is_finite(), "table {t}: sim({i},{j}) is not finite");
                assert!(
                    (-1e-6..=1.0 + 1e-6).contains(&s),
                    "table {t}: sim({i},{j}) = {s} out of range"
                );
            }
        }
    }
}

#[test]
fn contract_zero_row_similarity_is_zero() {
    // A zero interaction row cannot come out of aggregation, but the
    // engine must still map it to 0.0 everywhere, self included.
    let counts = vec![
        InteractionCount {
            user_id: 1,
            item_id: 1,
            count: 0.0,
        },
        InteractionCount {
            user_id: 2,
            item_id: 1,
            count: 3.0,
        },
    ];
    let matrix = InteractionMatrix::from_counts(&counts).expect("non-empty counts");
    let sim = UserSimilarity::from_interactions(&matrix);

    assert_eq!(sim.get(0, 0), 0.0);
    assert_eq!(sim.get(0, 1), 0.0);
    assert_eq!(sim.get(1, 0), 0.0);
    assert!((sim.get(1, 1) - 1.0).abs() < 1e-6);
}

mod generated {
    use super::*;
    use proptest::prelude::*;

    fn arb_events() -> impl Strategy<Value = Vec<InteractionEvent>> {
        prop::collection::vec(
            (1_i64..20, 1_i64..15, 0.5_f32..5.0)
                .prop_map(|(u, i, w)| InteractionEvent::weighted(u, i, w)),
            1..60,
        )
    }

    proptest! {
        #[test]
        fn generated_tables_symmetric_and_bounded(events in arb_events()) {
            let sim = table_from(&events);
            let n = sim.n_users();
            for i in 0..n {
                for j in 0..n {
                    let s = sim.get(i, j);
                    prop_assert!((s - sim.get(j, i)).abs() < 1e-5);
                    prop_assert!(s.is_finite());
                    prop_assert!((-1e-5..=1.0 + 1e-5).contains(&s));
                }
                prop_assert!((sim.get(i, i) - 1.0).abs() < 1e-5);
            }
        }
    }
}
