// ============================================================================
// COOLDOWN - Countdown between OTP requests
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use gloo_timers::callback::{Interval, Timeout};
use crate::services::CooldownRejection;
use crate::state::ReactiveState;
use crate::utils::constants::REQUEST_BUTTON_TEXT;

/// What the request button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CooldownDisplay {
    #[default]
    Ready,
    Waiting(i64),
}

impl CooldownDisplay {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Waiting(_))
    }

    pub fn button_label(self) -> String {
        match self {
            Self::Ready => REQUEST_BUTTON_TEXT.to_string(),
            Self::Waiting(n) => format!("Please wait {}s", n),
        }
    }

    /// State after one second
    pub fn tick(self) -> Self {
        match self {
            Self::Waiting(n) if n > 1 => Self::Waiting(n - 1),
            _ => Self::Ready,
        }
    }

    pub fn for_seconds(seconds: i64) -> Self {
        if seconds > 0 {
            Self::Waiting(seconds)
        } else {
            Self::Ready
        }
    }
}

/// `cooldown - elapsed` in whole seconds, never negative; 0 when nothing was requested
pub fn remaining_cooldown_secs(requested_at_ms: i64, now_ms: i64, cooldown_secs: i64) -> i64 {
    if requested_at_ms <= 0 {
        return 0;
    }
    let elapsed = (now_ms - requested_at_ms).max(0) / 1000;
    (cooldown_secs - elapsed).max(0)
}

/// Client cooldown after the service refused a request for being too early
pub fn cooldown_after_rejection(
    rejection: CooldownRejection,
    requested_at_ms: i64,
    now_ms: i64,
    cooldown_secs: i64,
    min_secs: i64,
) -> i64 {
    match rejection.retry_after {
        Some(secs) if secs > 0 => secs,
        _ => remaining_cooldown_secs(requested_at_ms, now_ms, cooldown_secs).max(min_secs),
    }
}

/// Which countdown owns the timer. Each start or cancel retires the previous one.
#[derive(Clone, Debug, Default)]
pub struct TimerGeneration(Rc<Cell<u64>>);

impl TimerGeneration {
    /// Retire whatever ran before; returns the new owner's generation
    pub fn advance(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.get() == generation
    }
}

/// One-second ticker driving a `CooldownDisplay`. At most one interval runs.
#[derive(Clone)]
pub struct CooldownTimer {
    display: ReactiveState<CooldownDisplay>,
    interval: Rc<RefCell<Option<Interval>>>,
    generation: TimerGeneration,
}

impl CooldownTimer {
    pub fn new(display: ReactiveState<CooldownDisplay>) -> Self {
        Self {
            display,
            interval: Rc::new(RefCell::new(None)),
            generation: TimerGeneration::default(),
        }
    }

    /// Start (or replace) the countdown
    pub fn start(&self, seconds: i64) {
        self.cancel();
        let start = CooldownDisplay::for_seconds(seconds);
        self.display.set(start);
        if !start.is_active() {
            return;
        }
        log::info!("⏳ [COOLDOWN] {}s before the next OTP request", seconds);

        let owner = self.generation.advance();
        let display = self.display.clone();
        let interval_slot = self.interval.clone();
        let generations = self.generation.clone();
        let interval = Interval::new(1_000, move || {
            if !generations.is_current(owner) {
                return;
            }
            let next = display.get().tick();
            display.set(next);
            if !next.is_active() {
                // Can't drop the interval from inside its own callback
                let interval_slot = interval_slot.clone();
                let generations = generations.clone();
                Timeout::new(0, move || {
                    if generations.is_current(owner) {
                        interval_slot.borrow_mut().take();
                    }
                })
                .forget();
            }
        });
        *self.interval.borrow_mut() = Some(interval);
    }

    /// Stop ticking without touching the display
    pub fn cancel(&self) {
        self.generation.advance();
        self.interval.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: i64 = 60;

    #[test]
    fn resumes_partially_elapsed_cooldown() {
        let requested = 1_700_000_000_000;
        assert_eq!(remaining_cooldown_secs(requested, requested, COOLDOWN), 60);
        assert_eq!(remaining_cooldown_secs(requested, requested + 20_000, COOLDOWN), 40);
        assert_eq!(remaining_cooldown_secs(requested, requested + 20_999, COOLDOWN), 40);
        assert_eq!(remaining_cooldown_secs(requested, requested + 60_000, COOLDOWN), 0);
        assert_eq!(remaining_cooldown_secs(requested, requested + 3_600_000, COOLDOWN), 0);
    }

    #[test]
    fn nothing_requested_means_no_cooldown() {
        assert_eq!(remaining_cooldown_secs(0, 1_700_000_000_000, COOLDOWN), 0);
    }

    #[test]
    fn clock_skew_never_extends_cooldown() {
        let requested = 1_700_000_000_000;
        assert_eq!(remaining_cooldown_secs(requested, requested - 5_000, COOLDOWN), 60);
    }

    #[test]
    fn remaining_is_deterministic_and_non_increasing() {
        let requested = 1_700_000_000_000;
        let mut last = i64::MAX;
        for offset in (0..90_000).step_by(250) {
            let now = requested + offset;
            let remaining = remaining_cooldown_secs(requested, now, COOLDOWN);
            assert_eq!(remaining, remaining_cooldown_secs(requested, now, COOLDOWN));
            assert!(remaining <= last);
            last = remaining;
        }
    }

    #[test]
    fn rejection_cooldown() {
        let requested = 1_700_000_000_000;
        let exact = CooldownRejection { retry_after: Some(23) };
        assert_eq!(cooldown_after_rejection(exact, requested, requested + 1_000, COOLDOWN, 5), 23);

        let vague = CooldownRejection { retry_after: None };
        assert_eq!(cooldown_after_rejection(vague, requested, requested + 10_000, COOLDOWN, 5), 50);
        assert_eq!(cooldown_after_rejection(vague, requested, requested + 58_000, COOLDOWN, 5), 5);
        // Request made from another tab: no local timestamp
        assert_eq!(cooldown_after_rejection(vague, 0, requested, COOLDOWN, 5), 5);
    }

    #[test]
    fn display_counts_down_to_ready() {
        let mut display = CooldownDisplay::for_seconds(3);
        assert_eq!(display.button_label(), "Please wait 3s");
        display = display.tick();
        assert_eq!(display, CooldownDisplay::Waiting(2));
        display = display.tick().tick();
        assert_eq!(display, CooldownDisplay::Ready);
        assert_eq!(display.button_label(), "Request OTP");
        assert_eq!(CooldownDisplay::for_seconds(0), CooldownDisplay::Ready);
        assert_eq!(CooldownDisplay::for_seconds(-4), CooldownDisplay::Ready);
    }

    #[test]
    fn restart_retires_the_previous_countdown() {
        let generations = TimerGeneration::default();
        let first = generations.advance();
        assert!(generations.is_current(first));

        // A new start hands the timer to a new owner
        let second = generations.advance();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));

        // Cancel leaves no owner, so a late clean-up from `second` is a no-op
        generations.advance();
        assert!(!generations.is_current(second));
    }

    #[test]
    fn clones_share_the_generation() {
        let generations = TimerGeneration::default();
        let in_callback = generations.clone();
        let owner = generations.advance();
        assert!(in_callback.is_current(owner));
        generations.advance();
        assert!(!in_callback.is_current(owner));
    }
}
