pub mod core;
pub mod difficulty;
pub mod formatter;

// Re-export the main types for convenience
pub use core::Language;
pub use difficulty::{Difficulty, TimeLimit};
pub use formatter::{PunctuationFormatter, TextFormatter, PUNCTUATION};
