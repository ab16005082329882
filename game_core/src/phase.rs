//! Session phase machine
//!
//! Governs waiting-for-start, countdown and playing. The countdown runs off
//! a single per-frame time accumulator rather than a side timer, so there is
//! nothing extra to cancel on reset or teardown.

use crate::params::Params;

/// Coarse mode of the session. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForStart,
    Countdown(u8),
    Playing,
}

/// Owns the phase and its countdown clock
#[derive(Debug, Clone, Copy)]
pub struct PhaseController {
    phase: Phase,
    elapsed_ms: f32,
}

impl PhaseController {
    pub fn new(auto_start: bool) -> Self {
        let phase = if auto_start {
            Phase::Countdown(Params::COUNTDOWN_START)
        } else {
            Phase::WaitingForStart
        };
        Self {
            phase,
            elapsed_ms: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Whether the start control should be shown
    pub fn start_visible(&self) -> bool {
        self.phase == Phase::WaitingForStart
    }

    /// Countdown digit to display, if any
    pub fn countdown(&self) -> Option<u8> {
        match self.phase {
            Phase::Countdown(n) if n > 0 => Some(n),
            _ => None,
        }
    }

    /// Start-control activation. Ignored outside `WaitingForStart`.
    pub fn activate_start(&mut self) {
        if self.phase == Phase::WaitingForStart {
            self.enter_countdown();
        }
    }

    /// Advance the countdown clock by one frame's elapsed time
    pub fn tick(&mut self, dt_ms: f32) {
        match self.phase {
            Phase::Countdown(0) => {
                self.phase = Phase::Playing;
                self.elapsed_ms = 0.0;
            }
            Phase::Countdown(_) => {
                self.elapsed_ms += dt_ms.max(0.0);
                while self.elapsed_ms >= Params::COUNTDOWN_TICK_MS {
                    self.elapsed_ms -= Params::COUNTDOWN_TICK_MS;
                    if let Phase::Countdown(n) = self.phase {
                        if n > 1 {
                            self.phase = Phase::Countdown(n - 1);
                        } else {
                            // Reached zero; Playing begins on the next tick
                            self.phase = Phase::Countdown(0);
                            self.elapsed_ms = 0.0;
                            break;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Post-score transition: back through the countdown if auto-start is
    /// on, otherwise wait for a manual start.
    pub fn on_score(&mut self, auto_start: bool) {
        if auto_start {
            self.enter_countdown();
        } else {
            self.phase = Phase::WaitingForStart;
            self.elapsed_ms = 0.0;
        }
    }

    fn enter_countdown(&mut self) {
        self.phase = Phase::Countdown(Params::COUNTDOWN_START);
        self.elapsed_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_follows_auto_start() {
        assert_eq!(PhaseController::new(true).phase(), Phase::Countdown(3));
        assert_eq!(PhaseController::new(false).phase(), Phase::WaitingForStart);
    }

    #[test]
    fn test_start_activation_enters_countdown() {
        let mut ctl = PhaseController::new(false);
        assert!(ctl.start_visible());
        ctl.activate_start();
        assert_eq!(ctl.phase(), Phase::Countdown(3));
        assert!(!ctl.start_visible());
    }

    #[test]
    fn test_start_activation_ignored_while_playing() {
        let mut ctl = PhaseController::new(true);
        for _ in 0..5 {
            ctl.tick(1000.0);
        }
        assert!(ctl.is_playing());
        ctl.activate_start();
        assert!(ctl.is_playing());
    }

    #[test]
    fn test_countdown_decrements_once_per_second() {
        let mut ctl = PhaseController::new(true);
        // 60 frames at ~16.7ms is just over one second
        for _ in 0..60 {
            ctl.tick(16.7);
        }
        assert_eq!(ctl.phase(), Phase::Countdown(2));
    }

    #[test]
    fn test_countdown_zero_transitions_to_playing_on_next_tick() {
        let mut ctl = PhaseController::new(true);
        ctl.tick(1000.0);
        ctl.tick(1000.0);
        ctl.tick(1000.0);
        assert_eq!(ctl.phase(), Phase::Countdown(0));
        ctl.tick(0.0);
        assert!(ctl.is_playing());
    }

    #[test]
    fn test_score_with_auto_start_restarts_countdown() {
        let mut ctl = PhaseController::new(true);
        for _ in 0..5 {
            ctl.tick(1000.0);
        }
        assert!(ctl.is_playing());
        ctl.on_score(true);
        assert_eq!(ctl.phase(), Phase::Countdown(3));
    }

    #[test]
    fn test_score_without_auto_start_waits() {
        let mut ctl = PhaseController::new(true);
        for _ in 0..5 {
            ctl.tick(1000.0);
        }
        ctl.on_score(false);
        assert_eq!(ctl.phase(), Phase::WaitingForStart);
    }

    #[test]
    fn test_countdown_clock_resets_on_reentry() {
        let mut ctl = PhaseController::new(true);
        ctl.tick(900.0); // almost one tick accumulated
        ctl.on_score(true);
        ctl.tick(900.0); // fresh clock, still 3
        assert_eq!(ctl.phase(), Phase::Countdown(3));
    }

    #[test]
    fn test_countdown_digit_visibility() {
        let mut ctl = PhaseController::new(true);
        assert_eq!(ctl.countdown(), Some(3));
        ctl.tick(1000.0);
        assert_eq!(ctl.countdown(), Some(2));
        ctl.tick(1000.0);
        ctl.tick(1000.0);
        // Countdown(0) shows no digit
        assert_eq!(ctl.countdown(), None);
    }
}
