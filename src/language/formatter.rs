use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Marks that may trail a word inside a passage
pub const PUNCTUATION: [&str; 5] = [".", ",", "?", "!", ";"];

/// Trait for text formatting strategies
pub trait TextFormatter {
    /// Format a list of words into a final string
    fn format(&self, words: Vec<String>, rng: &mut dyn RngCore) -> String;
}

/// Appends a random mark to interior words with a fixed probability.
/// The first and last word are never marked.
pub struct PunctuationFormatter {
    pub chance: f64,
}

impl TextFormatter for PunctuationFormatter {
    fn format(&self, mut words: Vec<String>, rng: &mut dyn RngCore) -> String {
        let last = words.len().saturating_sub(1);
        for (i, word) in words.iter_mut().enumerate() {
            if rng.gen_bool(self.chance) && i > 0 && i < last {
                if let Some(mark) = PUNCTUATION.choose(&mut *rng) {
                    word.push_str(mark);
                }
            }
        }
        words.join(" ")
    }
}
