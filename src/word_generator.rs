use crate::error::Result;
use crate::language::{Difficulty, Language, PunctuationFormatter, TextFormatter, TimeLimit};
use rand::seq::SliceRandom;
use rand::RngCore;

/// Typing speed the passage length is sized for
const BASELINE_WPM: f64 = 40.0;
/// Extra words so fast typists rarely run out before the deadline
const LENGTH_BUFFER: f64 = 1.2;

/// Configuration for passage generation
#[derive(Debug, Clone)]
pub struct WordGenConfig {
    pub difficulty: Difficulty,
    pub time_limit: TimeLimit,
    pub custom_prompt: Option<String>,
}

/// Number of words a passage for `time_limit` should hold
pub fn estimated_word_count(time_limit: TimeLimit) -> usize {
    ((time_limit.secs() as f64 / 60.0) * BASELINE_WPM * LENGTH_BUFFER).round() as usize
}

/// Handles all passage generation logic
pub struct WordGenerator {
    config: WordGenConfig,
    language: Language,
}

impl WordGenerator {
    pub fn new(config: WordGenConfig) -> Result<Self> {
        Ok(Self {
            config,
            language: Language::english()?,
        })
    }

    pub fn with_language(config: WordGenConfig, language: Language) -> Self {
        Self { config, language }
    }

    /// Generate a passage using the thread-local rng
    pub fn generate_prompt(&self) -> String {
        self.generate_prompt_with(&mut rand::thread_rng())
    }

    /// Generate a passage from an explicit random source
    pub fn generate_prompt_with(&self, rng: &mut dyn RngCore) -> String {
        if let Some(ref custom_prompt) = self.config.custom_prompt {
            return custom_prompt.clone();
        }

        let words = self.select_words(rng);
        let formatter = PunctuationFormatter {
            chance: self.config.difficulty.punctuation_chance(),
        };
        formatter.format(words, rng)
    }

    fn select_words(&self, rng: &mut dyn RngCore) -> Vec<String> {
        let pool = self.language.pool(self.config.difficulty);
        (0..estimated_word_count(self.config.time_limit))
            .filter_map(|_| pool.choose(&mut *rng).cloned())
            .collect()
    }
}
