//! The typing-session engine.
//!
//! A [`Session`] turns the text typed so far and periodic timer readings into
//! live metrics and, exactly once, a [`TestResults`]. Two independent events
//! can end a session: the passage being fully typed (from
//! [`Session::ingest_input`]) and the deadline passing (from [`Session::tick`]).
//! Both go through [`Session::finalize`], which checks the terminal status
//! before touching any state, so whichever fires second observes the cached
//! result and changes nothing.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::language::{Difficulty, TimeLimit};
use crate::metrics;
use crate::results::TestResults;
use crate::runtime::{Clock, SystemClock};
use crate::time_series::TimeSeriesPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub time_limit: TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    Running,
    Completed,
}

/// What ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FinishTrigger {
    PassageTyped,
    Deadline,
    Explicit,
}

/// How a passage character should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Correct,
    Incorrect,
    Current,
    Untyped,
}

/// Immutable target text, indexed by character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    text: String,
    chars: Vec<char>,
}

impl Passage {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    config: SessionConfig,
    passage: Passage,
    cursor: usize,
    errors: BTreeSet<usize>,
    started_at: Option<Instant>,
    deadline: Duration,
    remaining: Duration,
    status: SessionStatus,
    result: Option<TestResults>,
    finished_by: Option<FinishTrigger>,
    wpm_samples: Vec<TimeSeriesPoint>,
    clock: C,
}

impl Session<SystemClock> {
    pub fn new(passage: Passage, config: SessionConfig) -> Self {
        Self::with_clock(passage, config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(passage: Passage, config: SessionConfig, clock: C) -> Self {
        let deadline = config.time_limit.as_duration();
        Self {
            config,
            passage,
            cursor: 0,
            errors: BTreeSet::new(),
            started_at: None,
            deadline,
            remaining: deadline,
            status: SessionStatus::NotStarted,
            result: None,
            finished_by: None,
            wpm_samples: Vec::new(),
            clock,
        }
    }

    /// Feed the full text typed so far.
    ///
    /// The first call starts the timer; calls after completion are ignored.
    /// Returns the result when this call typed the last character.
    pub fn ingest_input(&mut self, typed: &str) -> Option<TestResults> {
        if self.status == SessionStatus::Completed {
            return None;
        }
        if self.status == SessionStatus::NotStarted {
            self.status = SessionStatus::Running;
            self.started_at = Some(self.clock.now());
            tracing::debug!(
                difficulty = %self.config.difficulty,
                time_limit = %self.config.time_limit,
                "session started"
            );
        }

        let target = self.passage.chars();
        let mut cursor = 0;
        for (idx, (typed_char, expected)) in typed.chars().zip(target).enumerate() {
            if typed_char == *expected {
                self.errors.remove(&idx);
            } else {
                self.errors.insert(idx);
            }
            cursor = idx + 1;
        }
        self.cursor = cursor;
        // Positions beyond a shrunk cursor are no longer typed
        self.errors.split_off(&cursor);

        if self.cursor == self.passage.len() {
            return Some(self.finalize_at(self.clock.now(), FinishTrigger::PassageTyped));
        }
        None
    }

    /// Periodic timer callback. Ignored unless the session is running.
    /// Returns the result when this tick hit the deadline.
    pub fn tick(&mut self, now: Instant) -> Option<TestResults> {
        if self.status != SessionStatus::Running {
            return None;
        }
        let started_at = self.started_at?;

        let elapsed = now.saturating_duration_since(started_at);
        self.remaining = self.deadline.saturating_sub(elapsed);
        self.wpm_samples.push(TimeSeriesPoint::new(
            elapsed.as_secs_f64(),
            self.wpm_over(elapsed) as f64,
        ));

        if elapsed >= self.deadline {
            return Some(self.finalize_at(now, FinishTrigger::Deadline));
        }
        None
    }

    /// Close the session and compute its result. Idempotent: every call after
    /// the first returns the same cached result.
    pub fn finalize(&mut self) -> TestResults {
        let now = self.clock.now();
        self.finalize_at(now, FinishTrigger::Explicit)
    }

    fn finalize_at(&mut self, end: Instant, trigger: FinishTrigger) -> TestResults {
        if let Some(result) = self.result {
            return result;
        }
        self.status = SessionStatus::Completed;

        // Never typed: charge the full deadline
        let elapsed = match self.started_at {
            Some(start) => end.saturating_duration_since(start),
            None => self.deadline,
        };
        let time_spent_secs = metrics::time_spent_seconds(elapsed);
        let total = self.cursor;
        let correct = metrics::correct_characters(total, self.errors.len());

        let result = TestResults {
            wpm: metrics::words_per_minute(correct, total, time_spent_secs as f64),
            accuracy: metrics::accuracy_percent(correct, total),
            total_characters: total,
            correct_characters: correct,
            incorrect_characters: self.errors.len(),
            time_spent_secs,
            difficulty: self.config.difficulty,
            time_limit: self.config.time_limit,
        };
        self.result = Some(result);
        self.finished_by = Some(trigger);

        tracing::info!(
            %trigger,
            wpm = result.wpm,
            accuracy = result.accuracy,
            time_spent_secs = result.time_spent_secs,
            "session finalized"
        );
        result
    }

    /// Live words per minute as of `now`; zero before the first keystroke
    pub fn current_wpm(&self, now: Instant) -> u32 {
        match self.started_at {
            Some(start) => self.wpm_over(now.saturating_duration_since(start)),
            None => 0,
        }
    }

    /// Live accuracy; 100 before anything is typed
    pub fn current_accuracy(&self) -> u32 {
        if self.cursor == 0 {
            return 100;
        }
        metrics::accuracy_percent(self.correct_characters(), self.cursor)
    }

    // Elapsed is floored at one second so the first keystroke does not spike
    fn wpm_over(&self, elapsed: Duration) -> u32 {
        let secs = elapsed.as_secs_f64().max(1.0);
        metrics::words_per_minute(self.correct_characters(), self.cursor, secs)
    }

    pub fn correct_characters(&self) -> usize {
        metrics::correct_characters(self.cursor, self.errors.len())
    }

    pub fn classify(&self, idx: usize) -> CharClass {
        if idx < self.cursor {
            if self.errors.contains(&idx) {
                CharClass::Incorrect
            } else {
                CharClass::Correct
            }
        } else if idx == self.cursor {
            CharClass::Current
        } else {
            CharClass::Untyped
        }
    }

    /// Every passage character paired with its classification
    pub fn char_classes(&self) -> impl Iterator<Item = (char, CharClass)> + '_ {
        self.passage
            .chars()
            .iter()
            .enumerate()
            .map(|(idx, c)| (*c, self.classify(idx)))
    }

    /// Typed share of the passage in percent
    pub fn progress(&self) -> f64 {
        if self.passage.is_empty() {
            return 100.0;
        }
        self.cursor as f64 / self.passage.len() as f64 * 100.0
    }

    /// Remaining time as of the latest tick, rounded up to whole seconds so
    /// the countdown reads zero only once the deadline has passed
    pub fn seconds_remaining(&self) -> u64 {
        self.remaining.as_secs() + u64::from(self.remaining.subsec_nanos() > 0)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn errors(&self) -> &BTreeSet<usize> {
        &self.errors
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn result(&self) -> Option<TestResults> {
        self.result
    }

    /// Which event closed the session, once it is completed
    pub fn finished_by(&self) -> Option<FinishTrigger> {
        self.finished_by
    }

    pub fn wpm_samples(&self) -> &[TimeSeriesPoint] {
        &self.wpm_samples
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
