use ratatui::{buffer::Buffer, layout::Rect};

use crate::app::{App, Screen};
use crate::runtime::Clock;
use crate::ui::{landing, results, session, setup};

/// A UI screen boundary: renders one navigation state of the app
pub trait ScreenView<C: Clock + Clone> {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer);
}

pub struct LandingScreen;

impl<C: Clock + Clone> ScreenView<C> for LandingScreen {
    fn render(&self, _app: &App<C>, area: Rect, buf: &mut Buffer) {
        landing::render(area, buf);
    }
}

pub struct SetupScreen;

impl<C: Clock + Clone> ScreenView<C> for SetupScreen {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer) {
        setup::render(&app.setup, area, buf);
    }
}

pub struct SessionScreen;

impl<C: Clock + Clone> ScreenView<C> for SessionScreen {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer) {
        if let Some(s) = app.session() {
            session::render(s, app.typed(), area, buf);
        }
    }
}

pub struct ResultsScreen;

impl<C: Clock + Clone> ScreenView<C> for ResultsScreen {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer) {
        if let Some(finished) = app.finished() {
            results::render(finished, area, buf);
        }
    }
}

/// Helper to construct the view for the current screen
pub fn current_screen<C: Clock + Clone + 'static>(screen: Screen) -> Box<dyn ScreenView<C>> {
    match screen {
        Screen::Landing => Box::new(LandingScreen),
        Screen::Setup => Box::new(SetupScreen),
        Screen::Session => Box::new(SessionScreen),
        Screen::Results => Box::new(ResultsScreen),
    }
}
