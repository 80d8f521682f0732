use std::collections::BTreeSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use typer::language::{Difficulty, TimeLimit};
use typer::runtime::{Clock, ManualClock};
use typer::session::{Passage, Session, SessionConfig, SessionStatus};
use typer::word_generator::{WordGenConfig, WordGenerator};

fn new_session(text: &str, clock: &ManualClock) -> Session<ManualClock> {
    let config = SessionConfig {
        difficulty: Difficulty::Medium,
        time_limit: TimeLimit::Thirty,
    };
    Session::with_clock(Passage::new(text), config, clock.clone())
}

fn mismatches(typed: &[char], target: &[char]) -> BTreeSet<usize> {
    typed
        .iter()
        .zip(target)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect()
}

// Random edit scripts: appends (right or wrong) and backspaces in any order
#[test]
fn error_set_matches_recomputation_under_random_edits() {
    let mut rng = StdRng::seed_from_u64(7);
    let target: Vec<char> = "the quick brown fox jumps over the lazy dog."
        .chars()
        .collect();
    let text: String = target.iter().collect();

    for _ in 0..50 {
        let clock = ManualClock::new();
        let mut session = new_session(&text, &clock);
        let mut typed: Vec<char> = Vec::new();

        for _ in 0..200 {
            match rng.gen_range(0..10) {
                0..=2 => {
                    typed.pop();
                }
                3 => typed.push('#'),
                _ => {
                    let next = target.get(typed.len()).copied().unwrap_or('x');
                    typed.push(next);
                }
            }

            let input: String = typed.iter().collect();
            let finished = session.ingest_input(&input);
            if session.is_completed() {
                assert!(finished.is_some() || session.result().is_some());
                break;
            }

            let cursor = typed.len().min(target.len());
            assert_eq!(session.cursor(), cursor);
            assert_eq!(*session.errors(), mismatches(&typed, &target));
            assert!(session.correct_characters() + session.errors().len() == cursor);
            assert!(session.current_accuracy() <= 100);
        }
    }
}

#[test]
fn status_only_moves_forward() {
    let clock = ManualClock::new();
    let mut session = new_session("abc", &clock);
    let mut seen = vec![session.status()];

    session.ingest_input("a");
    seen.push(session.status());
    clock.advance(Duration::from_secs(1));
    session.tick(clock.now());
    seen.push(session.status());
    session.ingest_input("abc");
    seen.push(session.status());
    session.ingest_input("");
    clock.advance(Duration::from_secs(60));
    session.tick(clock.now());
    seen.push(session.status());

    let rank = |s: &SessionStatus| match s {
        SessionStatus::NotStarted => 0,
        SessionStatus::Running => 1,
        SessionStatus::Completed => 2,
    };
    assert!(seen.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
    assert_eq!(session.status(), SessionStatus::Completed);
    assert_eq!(session.cursor(), 3);
}

#[test]
fn generated_passage_runs_to_deadline() {
    let generator = WordGenerator::new(WordGenConfig {
        difficulty: Difficulty::Hard,
        time_limit: TimeLimit::Sixty,
        custom_prompt: None,
    })
    .unwrap();
    let text = generator.generate_prompt_with(&mut StdRng::seed_from_u64(1));

    let clock = ManualClock::new();
    let mut session = new_session(&text, &clock);
    let prefix: String = text.chars().take(100).collect();
    session.ingest_input(&prefix);

    let mut result = None;
    for _ in 0..30 {
        clock.advance(Duration::from_secs(1));
        if let Some(r) = session.tick(clock.now()) {
            result = Some(r);
        }
    }

    let result = result.expect("deadline reached");
    assert_eq!(result.total_characters, 100);
    assert_eq!(result.accuracy, 100);
    assert_eq!(result.time_spent_secs, 30);
    // 100 chars = 20 words in half a minute
    assert_eq!(result.wpm, 40);
    assert_eq!(session.finalize(), result);
}
