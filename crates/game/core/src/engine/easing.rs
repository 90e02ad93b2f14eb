//! Motion curves for the spin animation.

use crate::types::Millis;

/// `1 - (1 - t)^3`: fast start, slow settle. Monotonic on `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Normalized progress of an animation, clamped to `[0, 1]`.
///
/// Timestamps earlier than `start` count as zero progress; a zero duration is
/// complete immediately.
pub fn progress(now: Millis, start: Millis, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_since(start) as f64;
    (elapsed / duration_ms as f64).clamp(0.0, 1.0)
}

/// Linear interpolation between `from` and `to`.
#[inline]
pub fn lerp(from: f64, to: f64, weight: f64) -> f64 {
    from + (to - from) * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn ease_out_cubic_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=1_000 {
            let value = ease_out_cubic(f64::from(step) / 1_000.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn progress_clamps() {
        let start = Millis(1_000);
        assert_eq!(progress(Millis(500), start, 6_000), 0.0);
        assert_eq!(progress(Millis(4_000), start, 6_000), 0.5);
        assert_eq!(progress(Millis(99_000), start, 6_000), 1.0);
        assert_eq!(progress(start, start, 0), 1.0);
    }
}
