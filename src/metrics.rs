//! Pure typing-speed formulas shared by the live readout and the final result.
//! Every output is clamped so degenerate input (no keystrokes, zero elapsed
//! time, more errors than characters) maps to a defined value.

use std::time::Duration;

/// Standard characters-per-word normalization
pub const CHARS_PER_WORD: f64 = 5.0;

/// Correct characters, floored at zero
pub fn correct_characters(total: usize, errors: usize) -> usize {
    total.saturating_sub(errors)
}

/// Whole seconds spent, rounded and floored at one so rates stay finite
pub fn time_spent_seconds(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64().round() as u64).max(1)
}

/// Rounded accuracy in `[0, 100]`; zero when nothing was typed
pub fn accuracy_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = 100.0 * correct as f64 / total as f64;
    pct.round().clamp(0.0, 100.0) as u32
}

/// Rounded net words per minute; zero when nothing was typed or no time passed
pub fn words_per_minute(correct: usize, total: usize, seconds: f64) -> u32 {
    if total == 0 || seconds <= 0.0 {
        return 0;
    }
    let wpm = (correct as f64 / CHARS_PER_WORD) / (seconds / 60.0);
    if wpm.is_finite() {
        wpm.round().max(0.0) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_one_minute() {
        assert_eq!(words_per_minute(200, 200, 60.0), 40);
    }

    #[test]
    fn test_wpm_short_passage() {
        // (11 / 5) / (12 / 60) = 11
        assert_eq!(words_per_minute(11, 12, 12.0), 11);
    }

    #[test]
    fn test_wpm_zero_cases() {
        assert_eq!(words_per_minute(0, 0, 30.0), 0);
        assert_eq!(words_per_minute(10, 10, 0.0), 0);
        assert_eq!(words_per_minute(0, 10, 30.0), 0);
    }

    #[test]
    fn test_correct_characters_clamps() {
        assert_eq!(correct_characters(10, 12), 0);
        assert_eq!(correct_characters(12, 1), 11);
    }

    #[test]
    fn test_accuracy_clamp_on_pathological_errors() {
        let correct = correct_characters(10, 12);
        assert_eq!(accuracy_percent(correct, 10), 0);
    }

    #[test]
    fn test_accuracy_rounding() {
        assert_eq!(accuracy_percent(11, 12), 92);
        assert_eq!(accuracy_percent(12, 12), 100);
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(1, 8), 13);
    }

    #[test]
    fn test_time_spent_floor_and_rounding() {
        assert_eq!(time_spent_seconds(Duration::ZERO), 1);
        assert_eq!(time_spent_seconds(Duration::from_millis(400)), 1);
        assert_eq!(time_spent_seconds(Duration::from_millis(1500)), 2);
        assert_eq!(time_spent_seconds(Duration::from_millis(12_400)), 12);
        assert_eq!(time_spent_seconds(Duration::from_secs(60)), 60);
    }
}
