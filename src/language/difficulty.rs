use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Difficulty tier chosen on the setup screen
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of leading words of the list this tier draws from, `None` for the whole list
    pub fn pool_size(&self) -> Option<usize> {
        match self {
            Difficulty::Easy => Some(100),
            Difficulty::Medium => Some(200),
            Difficulty::Hard => None,
        }
    }

    /// Chance that a word gets a trailing punctuation mark
    pub fn punctuation_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.1,
            Difficulty::Medium => 0.15,
            Difficulty::Hard => 0.2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Common words, minimal punctuation",
            Difficulty::Medium => "Mixed vocabulary, some punctuation",
            Difficulty::Hard => "Complex words, frequent punctuation",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

/// Session length; serialized as whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(try_from = "u64", into = "u64")]
pub enum TimeLimit {
    #[value(name = "30")]
    Thirty,
    #[default]
    #[value(name = "60")]
    Sixty,
    #[value(name = "120")]
    OneTwenty,
}

impl TimeLimit {
    pub const ALL: [TimeLimit; 3] = [TimeLimit::Thirty, TimeLimit::Sixty, TimeLimit::OneTwenty];

    pub fn secs(&self) -> u64 {
        match self {
            TimeLimit::Thirty => 30,
            TimeLimit::Sixty => 60,
            TimeLimit::OneTwenty => 120,
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.secs())
    }

    /// Short label: `30s`, `1m`, `2m`
    pub fn label(&self) -> String {
        let secs = self.secs();
        if secs < 60 {
            format!("{secs}s")
        } else {
            format!("{}m", secs / 60)
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TimeLimit::Thirty => "Quick sprint",
            TimeLimit::Sixty => "Standard test",
            TimeLimit::OneTwenty => "Endurance challenge",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TimeLimit::Thirty => TimeLimit::Sixty,
            TimeLimit::Sixty => TimeLimit::OneTwenty,
            TimeLimit::OneTwenty => TimeLimit::Thirty,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            TimeLimit::Thirty => TimeLimit::OneTwenty,
            TimeLimit::Sixty => TimeLimit::Thirty,
            TimeLimit::OneTwenty => TimeLimit::Sixty,
        }
    }
}

impl std::fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.secs())
    }
}

impl From<TimeLimit> for u64 {
    fn from(t: TimeLimit) -> Self {
        t.secs()
    }
}

impl TryFrom<u64> for TimeLimit {
    type Error = String;

    fn try_from(secs: u64) -> Result<Self, Self::Error> {
        TimeLimit::ALL
            .into_iter()
            .find(|t| t.secs() == secs)
            .ok_or_else(|| format!("unsupported time limit: {secs}s (expected 30, 60 or 120)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_display_is_lowercase() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_difficulty_cycle() {
        for d in Difficulty::ALL {
            assert_eq!(d.next().prev(), d);
        }
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_pool_sizes_grow_with_difficulty() {
        assert_eq!(Difficulty::Easy.pool_size(), Some(100));
        assert_eq!(Difficulty::Medium.pool_size(), Some(200));
        assert_eq!(Difficulty::Hard.pool_size(), None);
        assert!(Difficulty::Easy.punctuation_chance() < Difficulty::Hard.punctuation_chance());
    }

    #[test]
    fn test_time_limit_labels() {
        assert_eq!(TimeLimit::Thirty.label(), "30s");
        assert_eq!(TimeLimit::Sixty.label(), "1m");
        assert_eq!(TimeLimit::OneTwenty.label(), "2m");
        assert_eq!(TimeLimit::Sixty.to_string(), "60s");
    }

    #[test]
    fn test_time_limit_try_from() {
        assert_eq!(TimeLimit::try_from(30), Ok(TimeLimit::Thirty));
        assert_eq!(TimeLimit::try_from(120), Ok(TimeLimit::OneTwenty));
        assert!(TimeLimit::try_from(45).is_err());
    }

    #[test]
    fn test_serde_forms() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        assert_eq!(serde_json::to_string(&TimeLimit::Thirty).unwrap(), "30");
        let t: TimeLimit = serde_json::from_str("120").unwrap();
        assert_eq!(t, TimeLimit::OneTwenty);
        assert!(serde_json::from_str::<TimeLimit>("15").is_err());
    }

    #[test]
    fn test_clap_value_names() {
        assert_eq!(
            TimeLimit::from_str("60", false).unwrap(),
            TimeLimit::Sixty
        );
        assert_eq!(
            Difficulty::from_str("hard", false).unwrap(),
            Difficulty::Hard
        );
    }
}
