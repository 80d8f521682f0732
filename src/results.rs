use crate::language::{Difficulty, TimeLimit};

/// Speed the results bars are measured against
pub const BASELINE_WPM: u32 = 40;

/// Final, immutable outcome of one typing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestResults {
    pub wpm: u32,
    pub accuracy: u32,
    pub total_characters: usize,
    pub correct_characters: usize,
    pub incorrect_characters: usize,
    pub time_spent_secs: u64,
    pub difficulty: Difficulty,
    pub time_limit: TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum WpmRating {
    Excellent,
    Great,
    Good,
    #[strum(serialize = "Keep Practicing")]
    KeepPracticing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum AccuracyRating {
    Perfect,
    Excellent,
    Good,
    #[strum(serialize = "Needs Work")]
    NeedsWork,
}

impl TestResults {
    pub fn wpm_rating(&self) -> WpmRating {
        match self.wpm {
            70.. => WpmRating::Excellent,
            50.. => WpmRating::Great,
            30.. => WpmRating::Good,
            _ => WpmRating::KeepPracticing,
        }
    }

    pub fn accuracy_rating(&self) -> AccuracyRating {
        match self.accuracy {
            95.. => AccuracyRating::Perfect,
            85.. => AccuracyRating::Excellent,
            75.. => AccuracyRating::Good,
            _ => AccuracyRating::NeedsWork,
        }
    }

    pub fn tip(&self) -> &'static str {
        if self.wpm < 30 {
            "Practice typing without looking at the keyboard to improve your speed!"
        } else if self.accuracy < 85 {
            "Focus on accuracy first - speed will naturally follow!"
        } else {
            "Great job! Try the harder difficulty level for a new challenge!"
        }
    }

    /// Share of typed characters that were correct, in `[0, 1]`
    pub fn accuracy_ratio(&self) -> f64 {
        if self.total_characters == 0 {
            0.0
        } else {
            self.correct_characters as f64 / self.total_characters as f64
        }
    }

    /// Speed relative to the baseline, capped at 200%
    pub fn speed_ratio(&self) -> f64 {
        (self.wpm as f64 / BASELINE_WPM as f64).min(2.0)
    }

    pub fn share_text(&self) -> String {
        format!(
            "I just scored {} WPM with {}% accuracy on Typer!",
            self.wpm, self.accuracy
        )
    }

    pub fn share_url(&self) -> String {
        let text = self
            .share_text()
            .replace('%', "%25")
            .replace(' ', "%20")
            .replace('!', "%21");
        format!("https://twitter.com/intent/tweet?text={text}")
    }
}
