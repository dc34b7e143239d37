//! Property-based tests for the debounce gate and debounced relay output.
//!
//! Drives `DebouncedOutput` with a hand-set clock and a recording sink and
//! checks the gating rules hold for arbitrary timestamps and periods.

use std::cell::Cell;

use detent_core::{Clock, DebounceGate, DebouncedOutput, Millis, OutputSink, PinId};
use proptest::prelude::*;

struct FakeClock {
    now: Cell<Millis>,
}

impl FakeClock {
    fn at(ms: Millis) -> Self {
        Self { now: Cell::new(ms) }
    }

    fn set(&self, ms: Millis) {
        self.now.set(ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

#[derive(Default)]
struct RecordingSink {
    writes: Vec<(PinId, bool)>,
}

impl OutputSink for RecordingSink {
    fn write(&mut self, pin: PinId, high: bool) {
        self.writes.push((pin, high));
    }
}

const PIN: PinId = PinId(15);

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Nothing inside `(last, last + period]` passes the gate on a non-wrapping clock.
    #[test]
    fn prop_gate_rejects_inside_window(
        last in 0u32..=u32::MAX / 2,
        period in 0u32..=u32::MAX / 2,
        offset in 0u32..=u32::MAX / 2,
    ) {
        let gate = DebounceGate::new(period);
        let now = last + offset.min(period);
        prop_assert!(!gate.can_apply(last, now),
            "gate opened at {now} (last {last}, period {period})");
    }

    /// Anything strictly past the window passes the gate on a non-wrapping clock.
    #[test]
    fn prop_gate_accepts_after_window(
        last in 0u32..=u32::MAX / 4,
        period in 0u32..=u32::MAX / 4,
        extra in 1u32..=u32::MAX / 4,
    ) {
        let gate = DebounceGate::new(period);
        prop_assert!(gate.can_apply(last, last + period + extra));
    }

    /// Before the clock wraps, a deadline past `u32::MAX` is never reached.
    #[test]
    fn prop_gate_holds_until_wrap(
        period in 1u32..=10_000,
        back in 0u32..10_000,
        ahead in 0u32..10_000,
    ) {
        let gate = DebounceGate::new(period);
        let last = u32::MAX - back.min(period - 1);
        let now = last.saturating_add(ahead);
        prop_assert!(!gate.can_apply(last, now));
    }

    /// Requesting the current state never touches the clock bookkeeping or the sink.
    #[test]
    fn prop_redundant_set_is_idempotent(start in any::<u32>(), later in any::<u32>()) {
        let clock = FakeClock::at(start);
        let mut relay = DebouncedOutput::new(PIN, &clock, RecordingSink::default());

        clock.set(later);
        prop_assert!(!relay.set_state(false));
        prop_assert_eq!(relay.last_change_ms(), start);
        prop_assert_eq!(relay.sink().writes.len(), 1);
    }

    /// A change inside the window is dropped without a write.
    #[test]
    fn prop_change_suppressed_inside_window(
        start in 0u32..=u32::MAX / 2,
        period in 1u32..=100_000,
        offset in 1u32..=100_000,
    ) {
        let clock = FakeClock::at(start);
        let mut relay = DebouncedOutput::with_period(PIN, period, &clock, RecordingSink::default());

        clock.set(start + offset.min(period));
        prop_assert!(!relay.set_state(true));
        prop_assert!(!relay.get_state());
        prop_assert_eq!(relay.sink().writes.len(), 1);
    }

    /// A change past the window is applied, timestamped and written exactly once.
    #[test]
    fn prop_change_accepted_after_window(
        start in 0u32..=u32::MAX / 2,
        period in 0u32..=100_000,
        extra in 1u32..=100_000,
    ) {
        let clock = FakeClock::at(start);
        let mut relay = DebouncedOutput::with_period(PIN, period, &clock, RecordingSink::default());

        let now = start + period + extra;
        clock.set(now);
        prop_assert!(relay.set_state(true));
        prop_assert_eq!(relay.last_change_ms(), now);
        prop_assert_eq!(relay.sink().writes.as_slice(), &[(PIN, false), (PIN, true)]);
    }

    /// Two toggles at the same instant yield at most one transition.
    #[test]
    fn prop_double_toggle_single_transition(start in any::<u32>(), now in any::<u32>()) {
        let clock = FakeClock::at(start);
        let mut relay = DebouncedOutput::new(PIN, &clock, RecordingSink::default());

        clock.set(now);
        let first = relay.toggle_state();
        let second = relay.toggle_state();

        prop_assert_eq!(first, second);
        prop_assert!(relay.sink().writes.len() <= 2);
    }

    /// The logical state always equals the level last written to the sink.
    #[test]
    fn prop_state_matches_last_write(
        steps in proptest::collection::vec((0u32..3_000, any::<bool>()), 1..64),
    ) {
        let clock = FakeClock::at(0);
        let mut relay = DebouncedOutput::new(PIN, &clock, RecordingSink::default());
        let mut now: Millis = 0;

        for (delta, toggle) in steps {
            now = now.wrapping_add(delta);
            clock.set(now);
            if toggle {
                relay.toggle_state();
            } else {
                relay.set_state(true);
            }
            let last = relay.sink().writes.last().copied();
            prop_assert_eq!(last, Some((PIN, relay.get_state())));
        }
    }
}
