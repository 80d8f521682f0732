use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use webbrowser::Browser;

use crate::config::{Config, ConfigStore};
use crate::error::Result;
use crate::language::{Difficulty, Language, TimeLimit};
use crate::results::TestResults;
use crate::runtime::{Clock, SystemClock};
use crate::session::{Passage, Session, SessionConfig};
use crate::time_series::TimeSeriesPoint;
use crate::word_generator::{WordGenConfig, WordGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Setup,
    Session,
    Results,
}

/// What the event loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Startup choices, typically from the command line
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub difficulty: Option<Difficulty>,
    pub time_limit: Option<TimeLimit>,
    pub prompt: Option<String>,
    pub skip_intro: bool,
}

/// A finished test as shown on the results screen
#[derive(Debug, Clone)]
pub struct FinishedTest {
    pub results: TestResults,
    pub wpm_samples: Vec<TimeSeriesPoint>,
}

pub struct App<C: Clock + Clone = SystemClock> {
    screen: Screen,
    /// Selection on the setup screen
    pub setup: Config,
    test_config: Option<SessionConfig>,
    session: Option<Session<C>>,
    typed: String,
    finished: Option<FinishedTest>,
    custom_prompt: Option<String>,
    language: Language,
    store: Box<dyn ConfigStore>,
    clock: C,
}

impl<C: Clock + Clone> App<C> {
    pub fn new(options: AppOptions, store: Box<dyn ConfigStore>, clock: C) -> Result<Self> {
        let saved = store.load();
        let setup = Config {
            difficulty: options.difficulty.unwrap_or(saved.difficulty),
            time_limit: options.time_limit.unwrap_or(saved.time_limit),
        };
        let screen = if options.skip_intro {
            Screen::Setup
        } else {
            Screen::Landing
        };

        Ok(Self {
            screen,
            setup,
            test_config: None,
            session: None,
            typed: String::new(),
            finished: None,
            custom_prompt: options.prompt,
            language: Language::english()?,
            store,
            clock,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session<C>> {
        self.session.as_ref()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn finished(&self) -> Option<&FinishedTest> {
        self.finished.as_ref()
    }

    pub fn test_config(&self) -> Option<SessionConfig> {
        self.test_config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// True while the session timer must keep ticking
    pub fn wants_ticks(&self) -> bool {
        self.screen == Screen::Session && self.session.as_ref().is_some_and(|s| s.is_running())
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "screen change");
            self.screen = screen;
        }
    }

    pub fn get_started(&mut self) {
        if self.screen == Screen::Landing {
            self.set_screen(Screen::Setup);
        }
    }

    /// Confirm the setup selection and begin a session with it
    pub fn start_test(&mut self) {
        if self.screen != Screen::Setup {
            return;
        }
        if let Err(err) = self.store.save(&self.setup) {
            tracing::warn!(error = %err, "could not persist setup");
        }
        self.test_config = Some(SessionConfig {
            difficulty: self.setup.difficulty,
            time_limit: self.setup.time_limit,
        });
        self.begin_session();
    }

    fn begin_session(&mut self) {
        let Some(config) = self.test_config else {
            return;
        };
        let generator = WordGenerator::with_language(
            WordGenConfig {
                difficulty: config.difficulty,
                time_limit: config.time_limit,
                custom_prompt: self.custom_prompt.clone(),
            },
            self.language.clone(),
        );
        let passage = Passage::new(generator.generate_prompt());
        tracing::info!(
            difficulty = %config.difficulty,
            time_limit = %config.time_limit,
            chars = passage.len(),
            "new session"
        );

        self.session = Some(Session::with_clock(passage, config, self.clock.clone()));
        self.typed.clear();
        self.finished = None;
        self.set_screen(Screen::Session);
    }

    pub fn type_char(&mut self, c: char) {
        if self.screen != Screen::Session {
            return;
        }
        self.typed.push(c);
        self.sync_input();
    }

    pub fn backspace(&mut self) {
        if self.screen != Screen::Session || self.typed.pop().is_none() {
            return;
        }
        self.sync_input();
    }

    fn sync_input(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(results) = session.ingest_input(&self.typed) {
            let samples = session.wpm_samples().to_vec();
            self.finish(results, samples);
        }
    }

    /// Forward a timer tick to the running session, if any
    pub fn on_tick(&mut self) {
        if !self.wants_ticks() {
            return;
        }
        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(results) = session.tick(now) {
            let samples = session.wpm_samples().to_vec();
            self.finish(results, samples);
        }
    }

    fn finish(&mut self, results: TestResults, wpm_samples: Vec<TimeSeriesPoint>) {
        // Dropping the session stops its ticks
        self.session = None;
        self.finished = Some(FinishedTest {
            results,
            wpm_samples,
        });
        self.set_screen(Screen::Results);
    }

    /// Back navigation. Refused while a session is running.
    pub fn back(&mut self) -> bool {
        match self.screen {
            Screen::Setup => {
                self.set_screen(Screen::Landing);
                true
            }
            Screen::Session => {
                if self.session.as_ref().is_some_and(|s| s.has_started()) {
                    return false;
                }
                self.session = None;
                self.typed.clear();
                self.set_screen(Screen::Setup);
                true
            }
            Screen::Landing | Screen::Results => false,
        }
    }

    /// Same configuration, fresh passage
    pub fn retry(&mut self) {
        if self.screen == Screen::Results && self.test_config.is_some() {
            self.begin_session();
        }
    }

    pub fn new_test(&mut self) {
        if self.screen != Screen::Results {
            return;
        }
        self.test_config = None;
        self.finished = None;
        self.set_screen(Screen::Setup);
    }

    pub fn share(&self) {
        let Some(finished) = self.finished.as_ref() else {
            return;
        };
        if Browser::is_available() {
            if let Err(err) = webbrowser::open(&finished.results.share_url()) {
                tracing::warn!(error = %err, "could not open share link");
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        match self.screen {
            Screen::Landing => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.get_started(),
                KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
                _ => {}
            },
            Screen::Setup => match key.code {
                KeyCode::Left => self.setup.difficulty = self.setup.difficulty.prev(),
                KeyCode::Right => self.setup.difficulty = self.setup.difficulty.next(),
                KeyCode::Up => self.setup.time_limit = self.setup.time_limit.prev(),
                KeyCode::Down => self.setup.time_limit = self.setup.time_limit.next(),
                KeyCode::Char('e') => self.setup.difficulty = Difficulty::Easy,
                KeyCode::Char('m') => self.setup.difficulty = Difficulty::Medium,
                KeyCode::Char('h') => self.setup.difficulty = Difficulty::Hard,
                KeyCode::Char('1') => self.setup.time_limit = TimeLimit::Thirty,
                KeyCode::Char('2') => self.setup.time_limit = TimeLimit::Sixty,
                KeyCode::Char('3') => self.setup.time_limit = TimeLimit::OneTwenty,
                KeyCode::Enter => self.start_test(),
                KeyCode::Esc => {
                    self.back();
                }
                _ => {}
            },
            Screen::Session => match key.code {
                KeyCode::Esc => {
                    self.back();
                }
                KeyCode::Backspace => self.backspace(),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.type_char(c)
                }
                _ => {}
            },
            Screen::Results => match key.code {
                KeyCode::Char('r') => self.retry(),
                KeyCode::Char('n') => self.new_test(),
                KeyCode::Char('s') => self.share(),
                KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
                _ => {}
            },
        }
        Flow::Continue
    }
}
