//! Gesture-to-minutes engine
//!
//! Translates pointer drags on the dial into a snapped, clamped minute
//! delta and runs the confirm/cancel sequence that ends in a payment
//! request. The engine is a plain state machine: it knows nothing about
//! the display surface, receives pointer angles in degrees and explicit
//! `Instant`s, and reads the current `DialConfig` on every event.
//!
//! Phases: `Idle → Dragging → (Idle | Confirming) → AwaitingPayment →
//! (Celebrating → Idle | Idle)`. A new drag can only start from `Idle`;
//! everything else ignores pointer-down. The payment request is emitted
//! at most once per confirm sequence and never after a cancel.

use std::time::{Duration, Instant};

use crate::config::DialConfig;

/// Hold-to-confirm window between release and the payment request
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(2);

/// How long the success acknowledgment is shown before resetting
pub const CELEBRATION_HOLD: Duration = Duration::from_millis(600);

/// Smallest signed angle from `b` to `a`, in `(-180, 180]` degrees
pub fn shortest_delta_deg(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging,
    Confirming { since: Instant },
    AwaitingPayment,
    Celebrating { since: Instant, minutes: i32 },
}

/// Snapshot handed to the presentation layer
///
/// Copied out of the engine at a bounded rate (once per frame); the
/// view never reads engine internals directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Published {
    /// Dial rotation shown on screen, clamped/snapped
    pub rotation_deg: f32,
    /// Current signed minute delta
    pub delta_minutes: i32,
    /// Confirm-sequence progress, 0 to 1
    pub confirm_progress: f32,
    /// Overlay (delta, cost, progress bar) should be shown
    pub overlay_visible: bool,
    /// Success acknowledgment is running
    pub celebrating: bool,
}

/// Events surfaced by [`Engine::advance`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// The confirm window elapsed without a cancel; request payment.
    /// Emitted exactly once per confirm sequence.
    PaymentDue { minutes: i32, cost: f64 },
    /// The success acknowledgment finished; the countdown should be
    /// extended by `minutes` now.
    CelebrationOver { minutes: i32 },
}

/// The gesture state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    phase: Phase,
    /// Last recorded pointer angle, degrees
    last_angle_deg: f32,
    /// Continuous unwrapped rotation accumulated over the drag
    total_rotation_deg: f32,
    /// Snapped step index of the previous move; None until the first
    /// move after pointer-down establishes the baseline
    last_snapped_step: Option<i32>,
    /// Current (or frozen, once confirming) minute delta
    delta_minutes: i32,
    /// Rotation shown to the presentation layer
    visual_rotation_deg: f32,
    confirm_progress: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            last_angle_deg: 0.0,
            total_rotation_deg: 0.0,
            last_snapped_step: None,
            delta_minutes: 0,
            visual_rotation_deg: 0.0,
            confirm_progress: 0.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Whether the engine needs `advance` calls to make progress
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Start a drag. Ignored unless idle: no new gesture may begin
    /// while a previous one is confirming, settling or celebrating.
    pub fn pointer_down(&mut self, angle_deg: f32) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Dragging;
        self.last_angle_deg = angle_deg;
        self.last_snapped_step = None;
    }

    /// Track a pointer move. Returns true when a discrete tick fired
    /// (the snapped step index changed); the first move after
    /// pointer-down only establishes the baseline and never ticks.
    pub fn pointer_move(&mut self, angle_deg: f32, config: &DialConfig) -> bool {
        if self.phase != Phase::Dragging {
            return false;
        }

        // Accumulate the shortest signed delta so the rotation stays
        // continuous across the ±180° wraparound.
        let delta = shortest_delta_deg(angle_deg, self.last_angle_deg);
        self.last_angle_deg = angle_deg;
        self.total_rotation_deg += delta;

        let raw_minutes =
            (self.total_rotation_deg / config.snap_degree).round() as i32 * config.minute_step;
        let minutes = config.clamp_minutes(raw_minutes);
        let snapped_rotation = config.snapped_rotation(minutes);

        // Once clamped, the dial stops following the cursor and pins to
        // the snapped angle of the bound.
        let clamped = raw_minutes != minutes;
        self.visual_rotation_deg = if clamped {
            snapped_rotation
        } else {
            self.total_rotation_deg
        };
        self.delta_minutes = minutes;

        let snapped_step = (snapped_rotation / config.snap_degree).round() as i32;
        match self.last_snapped_step {
            None => {
                self.last_snapped_step = Some(snapped_step);
                false
            }
            Some(previous) if previous != snapped_step => {
                self.last_snapped_step = Some(snapped_step);
                true
            }
            Some(_) => false,
        }
    }

    /// End the drag: a zero delta resets outright, anything else
    /// freezes the delta, snaps the dial back and starts the confirm
    /// window.
    pub fn pointer_up(&mut self, now: Instant) {
        if self.phase != Phase::Dragging {
            return;
        }
        if self.delta_minutes == 0 {
            self.reset();
            return;
        }
        self.total_rotation_deg = 0.0;
        self.visual_rotation_deg = 0.0;
        self.confirm_progress = 0.0;
        self.phase = Phase::Confirming { since: now };
    }

    /// Cancel the confirm sequence (overlay hub tap). Returns whether
    /// a sequence was actually cancelled. The payment request can never
    /// fire afterwards.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.phase, Phase::Confirming { .. }) {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Drive time-based transitions. Called once per frame while the
    /// engine is animating.
    pub fn advance(&mut self, now: Instant, config: &DialConfig) -> Option<EngineEvent> {
        match self.phase {
            Phase::Confirming { since } => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed >= CONFIRM_WINDOW {
                    self.confirm_progress = 1.0;
                    self.phase = Phase::AwaitingPayment;
                    Some(EngineEvent::PaymentDue {
                        minutes: self.delta_minutes,
                        cost: config.cost_of(self.delta_minutes),
                    })
                } else {
                    self.confirm_progress =
                        elapsed.as_secs_f32() / CONFIRM_WINDOW.as_secs_f32();
                    None
                }
            }
            Phase::Celebrating { since, minutes } => {
                if now.saturating_duration_since(since) >= CELEBRATION_HOLD {
                    self.reset();
                    Some(EngineEvent::CelebrationOver { minutes })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Feed back the payment result. Only accepted while a settlement
    /// is outstanding, so a stray or duplicate result is a no-op.
    /// Returns whether the result was accepted.
    pub fn payment_settled(&mut self, success: bool, now: Instant) -> bool {
        if self.phase != Phase::AwaitingPayment {
            return false;
        }
        if success {
            self.phase = Phase::Celebrating {
                since: now,
                minutes: self.delta_minutes,
            };
        } else {
            self.reset();
        }
        true
    }

    /// Current presentation snapshot
    pub fn published(&self) -> Published {
        Published {
            rotation_deg: self.visual_rotation_deg,
            delta_minutes: self.delta_minutes,
            confirm_progress: self.confirm_progress,
            overlay_visible: matches!(
                self.phase,
                Phase::Dragging | Phase::Confirming { .. } | Phase::AwaitingPayment
            ),
            celebrating: matches!(self.phase, Phase::Celebrating { .. }),
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.total_rotation_deg = 0.0;
        self.visual_rotation_deg = 0.0;
        self.delta_minutes = 0;
        self.last_snapped_step = None;
        self.confirm_progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::Countdown;

    fn config() -> DialConfig {
        DialConfig::default()
    }

    /// Drag through a list of absolute pointer angles, returning the
    /// number of ticks fired.
    fn drag(engine: &mut Engine, config: &DialConfig, angles: &[f32]) -> usize {
        angles
            .iter()
            .filter(|&&a| engine.pointer_move(a, config))
            .count()
    }

    mod shortest_delta {
        use super::*;

        #[test]
        fn always_within_half_turn() {
            let mut a = -720.0;
            while a <= 720.0 {
                let mut b = -720.0;
                while b <= 720.0 {
                    let d = shortest_delta_deg(a, b);
                    assert!(
                        d > -180.0 && d <= 180.0,
                        "shortest_delta_deg({a}, {b}) = {d} out of (-180, 180]"
                    );
                    b += 37.5;
                }
                a += 37.5;
            }
        }

        #[test]
        fn zero_for_equal_angles() {
            for a in [-180.0, -90.0, 0.0, 45.0, 179.5, 180.0, 359.0] {
                assert_eq!(shortest_delta_deg(a, a), 0.0);
            }
        }

        #[test]
        fn crosses_the_wraparound_without_flipping() {
            // 179° -> -179° is a +2° step, not a -358° one
            assert_eq!(shortest_delta_deg(-179.0, 179.0), 2.0);
            assert_eq!(shortest_delta_deg(179.0, -179.0), -2.0);
        }
    }

    mod dragging {
        use super::*;

        #[test]
        fn rotation_unwraps_across_the_seam() {
            let config = config();
            let mut engine = Engine::new();
            engine.pointer_down(170.0);
            // Sweep clockwise through the ±180° discontinuity
            drag(&mut engine, &config, &[175.0, 180.0, -175.0, -170.0]);
            let published = engine.published();
            assert_eq!(published.rotation_deg, 20.0);
            assert_eq!(published.delta_minutes, 1);
        }

        #[test]
        fn minutes_are_snapped_multiples_of_the_step() {
            let config = DialConfig {
                minute_step: 5,
                ..config()
            };
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            drag(&mut engine, &config, &[10.0, 20.0, 31.0]);
            // 31° / 15° rounds to 2 steps of 5 minutes
            assert_eq!(engine.published().delta_minutes, 10);
            assert_eq!(engine.published().delta_minutes % config.minute_step, 0);
        }

        #[test]
        fn monotone_drag_never_decreases_minutes() {
            let config = config();
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            let mut previous = 0;
            let mut angle = 0.0_f32;
            for _ in 0..100 {
                angle += 4.0;
                // absolute pointer angles wrap; the engine unwraps them
                let wrapped = shortest_delta_deg(angle, 0.0);
                engine.pointer_move(wrapped, &config);
                let minutes = engine.published().delta_minutes;
                assert!(minutes >= previous, "delta went backwards: {minutes}");
                previous = minutes;
            }
        }

        #[test]
        fn negative_motion_blocked_when_not_allowed() {
            let config = DialConfig {
                allows_negative: false,
                ..config()
            };
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            drag(&mut engine, &config, &[-20.0, -45.0, -80.0]);
            let published = engine.published();
            assert_eq!(published.delta_minutes, 0);
            assert_eq!(published.rotation_deg, 0.0, "dial pinned at zero");
        }

        #[test]
        fn clamp_is_idempotent_and_pins_the_dial() {
            let config = DialConfig {
                max_minutes: 2,
                ..config()
            };
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            drag(&mut engine, &config, &[30.0, 60.0, 90.0]);
            let at_bound = engine.published();
            assert_eq!(at_bound.delta_minutes, 2);
            assert_eq!(at_bound.rotation_deg, 30.0, "pinned to snapped bound");

            // Further motion in the same direction changes nothing
            drag(&mut engine, &config, &[120.0, 150.0]);
            assert_eq!(engine.published(), at_bound);

            // Backing off releases the clamp
            drag(&mut engine, &config, &[120.0, 90.0, 60.0, 30.0, 15.0]);
            assert_eq!(engine.published().delta_minutes, 1);
        }

        #[test]
        fn first_move_establishes_baseline_without_a_tick() {
            let config = config();
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            assert!(!engine.pointer_move(1.0, &config), "baseline move");
            assert!(!engine.pointer_move(2.0, &config), "same step, no tick");
            assert!(engine.pointer_move(15.0, &config), "step change ticks");
        }

        #[test]
        fn exactly_k_ticks_for_k_increments() {
            let config = config();
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            // Baseline at step 0, then cross 3 full snap increments
            let ticks = drag(&mut engine, &config, &[1.0, 15.0, 30.0, 45.0]);
            assert_eq!(ticks, 3);
            assert_eq!(engine.published().delta_minutes, 3);
        }

        #[test]
        fn no_ticks_while_pinned_at_the_clamp() {
            let config = DialConfig {
                max_minutes: 1,
                ..config()
            };
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            drag(&mut engine, &config, &[1.0, 15.0]);
            let ticks = drag(&mut engine, &config, &[30.0, 45.0, 60.0]);
            assert_eq!(ticks, 0, "snapped step is pinned with the clamp");
        }
    }

    mod confirm_sequence {
        use super::*;

        fn dragged_engine(config: &DialConfig, steps: i32) -> Engine {
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            for i in 1..=steps {
                let wrapped = shortest_delta_deg(i as f32 * config.snap_degree, 0.0);
                engine.pointer_move(wrapped, config);
            }
            assert_eq!(engine.published().delta_minutes, steps * config.minute_step);
            engine
        }

        #[test]
        fn zero_delta_release_resets_outright() {
            let config = config();
            let mut engine = Engine::new();
            engine.pointer_down(0.0);
            engine.pointer_move(3.0, &config);
            engine.pointer_up(Instant::now());
            assert!(engine.is_idle());
            assert_eq!(engine.published(), Published::default());
        }

        #[test]
        fn release_snaps_back_and_freezes_the_delta() {
            let config = config();
            let mut engine = dragged_engine(&config, 5);
            engine.pointer_up(Instant::now());
            let published = engine.published();
            assert_eq!(published.rotation_deg, 0.0, "dial snaps back to rest");
            assert_eq!(published.delta_minutes, 5, "delta stays frozen");
            assert!(published.overlay_visible);
        }

        #[test]
        fn pointer_events_ignored_while_confirming() {
            let config = config();
            let mut engine = dragged_engine(&config, 5);
            engine.pointer_up(Instant::now());
            engine.pointer_down(90.0);
            engine.pointer_move(120.0, &config);
            assert_eq!(engine.published().delta_minutes, 5);
            assert_eq!(engine.published().rotation_deg, 0.0);
        }

        #[test]
        fn progress_runs_zero_to_one_over_the_window() {
            let config = config();
            let t0 = Instant::now();
            let mut engine = dragged_engine(&config, 2);
            engine.pointer_up(t0);
            assert_eq!(engine.advance(t0, &config), None);
            assert_eq!(engine.published().confirm_progress, 0.0);
            assert_eq!(engine.advance(t0 + CONFIRM_WINDOW / 2, &config), None);
            assert!((engine.published().confirm_progress - 0.5).abs() < 1e-3);
        }

        #[test]
        fn window_elapse_emits_payment_due_once() {
            let config = config();
            let t0 = Instant::now();
            let mut engine = dragged_engine(&config, 5);
            engine.pointer_up(t0);
            let event = engine.advance(t0 + CONFIRM_WINDOW, &config);
            assert_eq!(
                event,
                Some(EngineEvent::PaymentDue {
                    minutes: 5,
                    cost: 1.75
                })
            );
            // Waiting on the host now; no second request, ever
            assert_eq!(engine.advance(t0 + CONFIRM_WINDOW * 10, &config), None);
        }

        #[test]
        fn cancel_prevents_the_payment_request() {
            let config = config();
            let t0 = Instant::now();
            let mut engine = dragged_engine(&config, 3);
            engine.pointer_up(t0);
            engine.advance(t0 + CONFIRM_WINDOW / 4, &config);
            assert!(engine.cancel());
            assert!(engine.is_idle());
            assert_eq!(engine.advance(t0 + CONFIRM_WINDOW * 2, &config), None);
            assert_eq!(engine.published(), Published::default());
        }

        #[test]
        fn cancel_is_only_valid_while_confirming() {
            let config = config();
            let mut engine = Engine::new();
            assert!(!engine.cancel());
            engine.pointer_down(0.0);
            assert!(!engine.cancel());
            engine.pointer_move(40.0, &config);
            let t0 = Instant::now();
            engine.pointer_up(t0);
            engine.advance(t0 + CONFIRM_WINDOW, &config);
            assert!(!engine.cancel(), "settlement already requested");
        }

        #[test]
        fn failed_payment_resets_without_celebration() {
            let config = config();
            let t0 = Instant::now();
            let mut engine = dragged_engine(&config, 4);
            engine.pointer_up(t0);
            engine.advance(t0 + CONFIRM_WINDOW, &config);
            assert!(engine.payment_settled(false, t0 + CONFIRM_WINDOW));
            assert!(engine.is_idle());
            assert_eq!(engine.published(), Published::default());
        }

        #[test]
        fn stray_settlements_are_ignored() {
            let config = config();
            let t0 = Instant::now();
            let mut engine = Engine::new();
            assert!(!engine.payment_settled(true, t0));
            let mut engine = dragged_engine(&config, 4);
            engine.pointer_up(t0);
            assert!(
                !engine.payment_settled(true, t0),
                "no settlement before the window elapses"
            );
            engine.advance(t0 + CONFIRM_WINDOW, &config);
            assert!(engine.payment_settled(true, t0 + CONFIRM_WINDOW));
            assert!(
                !engine.payment_settled(true, t0 + CONFIRM_WINDOW),
                "completion is single-use"
            );
        }
    }

    mod round_trip {
        use super::*;

        #[test]
        fn five_minute_extension_end_to_end() {
            let config = config();
            let mut countdown = Countdown::from_minutes(30);
            let mut engine = Engine::new();
            let t0 = Instant::now();

            engine.pointer_down(0.0);
            for i in 1..=5 {
                engine.pointer_move(i as f32 * config.snap_degree, &config);
            }
            engine.pointer_up(t0);

            let due = engine.advance(t0 + CONFIRM_WINDOW, &config);
            let Some(EngineEvent::PaymentDue { minutes, cost }) = due else {
                panic!("expected a payment request, got {due:?}");
            };
            assert_eq!((minutes, cost), (5, 1.75));

            let t1 = t0 + CONFIRM_WINDOW;
            assert!(engine.payment_settled(true, t1));
            assert!(engine.published().celebrating);

            let over = engine.advance(t1 + CELEBRATION_HOLD, &config);
            assert_eq!(over, Some(EngineEvent::CelebrationOver { minutes: 5 }));
            countdown.extend_minutes(5);

            assert!(engine.is_idle());
            assert_eq!(engine.published().delta_minutes, 0);
            assert_eq!(countdown.remaining_seconds(), 35 * 60);
        }
    }
}
