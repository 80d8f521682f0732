pub mod charting;
pub mod landing;
pub mod results;
pub mod screen;
pub mod session;
pub mod setup;

use ratatui::Frame;

use crate::app::App;
use crate::runtime::Clock;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

/// Draw whichever screen the app is on
pub fn draw<C: Clock + Clone + 'static>(app: &App<C>, f: &mut Frame) {
    let area = f.area();
    screen::current_screen::<C>(app.screen()).render(app, area, f.buffer_mut());
}

/// `m:ss`, as shown by the session timer
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppOptions, Screen};
    use crate::config::MemoryConfigStore;
    use crate::runtime::ManualClock;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn app(prompt: &str) -> App<ManualClock> {
        let options = AppOptions {
            prompt: Some(prompt.to_string()),
            ..AppOptions::default()
        };
        App::new(options, Box::new(MemoryConfigStore::default()), ManualClock::new()).unwrap()
    }

    fn rendered(app: &App<ManualClock>) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn press(app: &mut App<ManualClock>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(120), "2:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(0), "0:00");
    }

    #[test]
    fn test_draw_landing() {
        let app = app("hi");
        let screen = rendered(&app);
        assert!(screen.contains("TYPER"));
        assert!(screen.contains("Precision Tracking"));
        assert!(screen.contains("(enter) get started"));
    }

    #[test]
    fn test_draw_setup_marks_selection() {
        let mut app = app("hi");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('3'));

        let screen = rendered(&app);
        assert!(screen.contains("Test Setup"));
        assert!(screen.contains("> (h) Hard"));
        assert!(screen.contains("  (e) Easy"));
        assert!(screen.contains("> (3) 2m"));
        assert!(screen.contains("Endurance challenge"));
    }

    #[test]
    fn test_draw_session_before_typing() {
        let mut app = app("hello world");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Session);

        let screen = rendered(&app);
        assert!(screen.contains("1:00"));
        assert!(screen.contains("0 wpm"));
        assert!(screen.contains("hello world"));
        assert!(screen.contains("The timer will start when you begin typing"));
        assert!(screen.contains("(esc) back"));
    }

    #[test]
    fn test_draw_results_after_typing() {
        let mut app = app("hi");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('h'));
        app.clock().advance(Duration::from_secs(2));
        press(&mut app, KeyCode::Char('i'));

        let screen = rendered(&app);
        assert!(screen.contains("Test Complete!"));
        assert!(screen.contains("100% acc (Perfect)"));
        assert!(screen.contains("typed in 2s"));
    }
}
