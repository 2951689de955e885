//! Countdown timer model
//!
//! Holds the remaining booking time and formats it for display.
//! Ticked once per second by the app's timer subscription; extended in
//! whole minutes when a wheel payment succeeds.

/// Remaining booking time in seconds
///
/// The stored value may briefly go negative after a negative extension;
/// the next tick and the display both floor it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: i64,
}

impl Countdown {
    pub fn new(seconds: i64) -> Self {
        Self { remaining: seconds }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self::new(minutes * 60)
    }

    /// Remaining seconds, floored at zero
    pub fn remaining_seconds(&self) -> i64 {
        self.remaining.max(0)
    }

    /// One-second tick; never goes below zero
    pub fn tick(&mut self) {
        self.remaining = if self.remaining > 0 {
            self.remaining - 1
        } else {
            0
        };
    }

    /// Add (possibly negative) seconds, effective immediately
    pub fn extend(&mut self, delta_seconds: i64) {
        self.remaining += delta_seconds;
    }

    /// Minutes-based adapter used by the wheel's success path
    pub fn extend_minutes(&mut self, minutes: i32) {
        self.extend(minutes as i64 * 60);
    }

    /// `MM:SS`, both fields zero-padded
    pub fn display(&self) -> String {
        let total = self.remaining_seconds();
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_down_one_second_at_a_time() {
        let mut countdown = Countdown::new(120);
        for _ in 0..3 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining_seconds(), 117);
    }

    #[test]
    fn extend_applies_immediately() {
        let mut countdown = Countdown::new(120);
        for _ in 0..3 {
            countdown.tick();
        }
        countdown.extend(-30);
        assert_eq!(countdown.remaining_seconds(), 87);
        assert_eq!(countdown.display(), "01:27");
    }

    #[test]
    fn floors_at_zero() {
        let mut countdown = Countdown::new(1);
        countdown.tick();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 0);
        assert_eq!(countdown.display(), "00:00");
    }

    #[test]
    fn negative_extension_past_zero_recovers_on_tick() {
        let mut countdown = Countdown::new(10);
        countdown.extend(-30);
        assert_eq!(countdown.remaining_seconds(), 0, "display floors at zero");
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn extend_minutes_converts_to_seconds() {
        let mut countdown = Countdown::from_minutes(30);
        countdown.extend_minutes(5);
        assert_eq!(countdown.remaining_seconds(), 35 * 60);
        countdown.extend_minutes(-2);
        assert_eq!(countdown.remaining_seconds(), 33 * 60);
    }

    #[test]
    fn display_zero_pads_both_fields() {
        assert_eq!(Countdown::new(9).display(), "00:09");
        assert_eq!(Countdown::new(65).display(), "01:05");
        assert_eq!(Countdown::from_minutes(30).display(), "30:00");
        assert_eq!(Countdown::new(3600).display(), "60:00");
    }
}
