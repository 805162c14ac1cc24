// One-shot countdown timers for transient visual state

use crate::core::math::{clamp01, sanitize_dt};

/// Errors raised by effect timers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EffectError {
    #[error("Invalid argument: effect duration must be a positive number of seconds, got {0}")]
    InvalidArgument(f32),
}

/// A reusable countdown, e.g. the flash shown after an attack.
///
/// Inactive until triggered; re-triggering restarts the countdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimedEffect {
    duration: f32,
    remaining: f32,
}

impl TimedEffect {
    /// Create an inactive effect
    pub fn new() -> Self {
        Self {
            duration: 0.0,
            remaining: 0.0,
        }
    }

    /// Start (or restart) the countdown
    pub fn trigger(&mut self, duration: f32) -> Result<(), EffectError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(EffectError::InvalidArgument(duration));
        }
        self.duration = duration;
        self.remaining = duration;
        Ok(())
    }

    /// Count down by `dt` seconds, stopping at zero
    pub fn advance(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Fraction of the countdown elapsed: 0 at trigger, 1 once expired.
    /// An effect that was never triggered reports 0.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        clamp01(1.0 - self.remaining / self.duration)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_is_inactive() {
        let effect = TimedEffect::new();
        assert!(!effect.is_active());
        assert_eq!(effect.progress(), 0.0);
    }

    #[test]
    fn test_trigger_then_zero_step() {
        let mut effect = TimedEffect::new();
        effect.trigger(0.15).unwrap();
        effect.advance(0.0);
        assert!(effect.is_active());
        assert_eq!(effect.progress(), 0.0);
    }

    #[test]
    fn test_full_duration_expires() {
        let mut effect = TimedEffect::new();
        effect.trigger(0.15).unwrap();
        effect.advance(0.15);
        assert!(!effect.is_active());
        assert_eq!(effect.remaining(), 0.0);
    }

    #[test]
    fn test_attack_flash_scenario() {
        let mut effect = TimedEffect::new();
        effect.trigger(0.12).unwrap();

        effect.advance(0.06);
        assert!(effect.is_active());
        assert_relative_eq!(effect.progress(), 0.5, epsilon = 1e-5);

        effect.advance(0.06);
        assert!(!effect.is_active());
        assert_eq!(effect.progress(), 1.0);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let mut effect = TimedEffect::new();
        effect.trigger(0.1).unwrap();
        effect.advance(5.0);
        assert_eq!(effect.remaining(), 0.0);
        effect.advance(1.0);
        assert_eq!(effect.remaining(), 0.0);
    }

    #[test]
    fn test_negative_dt_is_noop() {
        let mut effect = TimedEffect::new();
        effect.trigger(1.0).unwrap();
        effect.advance(-0.5);
        assert_eq!(effect.remaining(), 1.0);
    }

    #[test]
    fn test_invalid_duration_leaves_state() {
        let mut effect = TimedEffect::new();
        effect.trigger(1.0).unwrap();
        effect.advance(0.25);
        let before = effect.clone();

        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                effect.trigger(duration),
                Err(EffectError::InvalidArgument(_))
            ));
            assert_eq!(effect, before);
        }
    }

    #[test]
    fn test_retrigger_restarts() {
        let mut effect = TimedEffect::new();
        effect.trigger(1.0).unwrap();
        effect.advance(0.75);
        effect.trigger(0.5).unwrap();
        assert_eq!(effect.duration(), 0.5);
        assert_eq!(effect.remaining(), 0.5);
        assert_eq!(effect.progress(), 0.0);
    }

    #[test]
    fn test_error_display() {
        let err = EffectError::InvalidArgument(-1.0);
        assert_eq!(
            err.to_string(),
            "Invalid argument: effect duration must be a positive number of seconds, got -1"
        );
    }
}
