use integration_tests::{new_demo_buffer, DEMO_CAPACITY};

// Mirrors the demonstration driver: fill a capacity-5 buffer, overflow it
// once, drain it dry, then read once more.
#[test]
fn test_demo_scenario_end_to_end() {
    let mut buffer = new_demo_buffer();

    for value in 1..=DEMO_CAPACITY as u64 {
        assert!(buffer.try_push(value).is_ok(), "write {} should succeed", value);
    }
    assert!(buffer.is_full());

    // Sixth write is rejected and the occupancy is untouched.
    assert_eq!(buffer.try_push(6), Err(6));
    assert_eq!(buffer.len(), DEMO_CAPACITY);

    for expected in 1..=DEMO_CAPACITY as u64 {
        assert_eq!(buffer.try_pop(), Some(expected));
    }

    // Sixth read is rejected on the now-empty buffer.
    assert_eq!(buffer.try_pop(), None);
    assert!(buffer.is_empty());
}

#[test]
fn test_demo_buffer_reusable_after_drain() {
    let mut buffer = new_demo_buffer();

    for round in 0..3u64 {
        let base = round * 10;
        for value in 1..=DEMO_CAPACITY as u64 {
            assert!(buffer.try_push(base + value).is_ok());
        }
        for value in 1..=DEMO_CAPACITY as u64 {
            assert_eq!(buffer.try_pop(), Some(base + value));
        }
        assert!(buffer.is_empty());
    }
}
