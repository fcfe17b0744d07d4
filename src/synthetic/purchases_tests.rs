pub(crate) use super::*;

#[test]
fn test_generate_count_and_ranges() {
    let events = PurchaseSimulator::new(20, 5).with_seed(1).generate(200);
    assert_eq!(events.len(), 200);
    for e in &events {
        assert!((1..=20).contains(&e.user_id));
        assert!((1..=5).contains(&e.item_id));
        assert!(e.weight.is_none());
        assert!(e.validate().is_ok());
    }
}

#[test]
fn test_seed_reproducibility() {
    let a = PurchaseSimulator::new(100, 30).with_seed(42).generate(500);
    let b = PurchaseSimulator::new(100, 30).with_seed(42).generate(500);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_diverge() {
    let a = PurchaseSimulator::new(100, 30).with_seed(1).generate(500);
    let b = PurchaseSimulator::new(100, 30).with_seed(2).generate(500);
    assert_ne!(a, b);
}

#[test]
fn test_weighted_events() {
    let events = PurchaseSimulator::new(10, 10)
        .with_seed(3)
        .with_weight_range(3.0, 5.0)
        .generate(100);

    for e in &events {
        let w = e.weight.expect("weighted simulator sets a weight");
        assert!((3.0..=5.0).contains(&w));
        // One-decimal rounding.
        assert!(((w * 10.0).round() - w * 10.0).abs() < 1e-4);
    }
}

#[test]
fn test_generate_zero_events() {
    let events = PurchaseSimulator::new(5, 5).with_seed(0).generate(0);
    assert!(events.is_empty());
}
