//! Property-based tests for the key sequence matcher

use folio::scheduler::Scheduler;
use folio::terminal::input::{KeySequence, KONAMI_SEQUENCE};
use proptest::prelude::*;
use std::time::{Duration, Instant};

fn key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "ArrowUp",
        "ArrowDown",
        "ArrowLeft",
        "ArrowRight",
        "KeyA",
        "KeyB",
        "Enter",
        "Space",
    ])
}

proptest! {
    #[test]
    fn test_sequence_after_any_noise_matches(noise in prop::collection::vec(key(), 0..40)) {
        let mut matcher = KeySequence::konami();
        for k in &noise {
            matcher.push(k);
        }

        let mut fired_at_end = false;
        for (i, k) in KONAMI_SEQUENCE.iter().enumerate() {
            let fired = matcher.push(k);
            if i == KONAMI_SEQUENCE.len() - 1 {
                fired_at_end = fired;
            }
        }
        prop_assert!(fired_at_end);
    }

    #[test]
    fn test_fires_exactly_when_window_matches(keys in prop::collection::vec(key(), 0..60)) {
        let mut matcher = KeySequence::konami();
        let mut window: Vec<&str> = Vec::new();

        for k in &keys {
            window.push(k);
            if window.len() > KONAMI_SEQUENCE.len() {
                window.remove(0);
            }
            let expected = window == KONAMI_SEQUENCE;
            prop_assert_eq!(matcher.push(k), expected);
            if expected {
                window.clear();
            }
            prop_assert!(matcher.buffered() <= KONAMI_SEQUENCE.len());
        }
    }

    #[test]
    fn test_rescheduling_never_stacks(offsets in prop::collection::vec(0u64..5_000, 1..30)) {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        for offset in &offsets {
            scheduler.schedule(0u8, start + Duration::from_millis(*offset), *offset);
        }

        let fired = scheduler.poll(start + Duration::from_secs(10));
        prop_assert_eq!(fired, vec![*offsets.last().unwrap()]);
    }
}
