use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::mouse_click::handle_click;
use super::state::App;
use crate::layout::region_at;
use crate::suggest::{NavKey, SearchEvent};

impl App {
    /// Wait up to `timeout` for a terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            let event = event::read()?;
            self.handle_event(event, Instant::now());
        }
        Ok(())
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let region = region_at(&self.regions, mouse.column, mouse.row);
                handle_click(self, region, now);
            }
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(nav) = nav_key(key.code) {
            self.handle_nav_key(nav, now);
            return;
        }

        // Everything else edits the search input
        let before = self.query().to_string();
        self.textarea.input(key);
        self.keep_single_line();
        if self.query() != before {
            let value = self.query().to_string();
            self.dispatch(SearchEvent::Input(value), now);
        }
    }

    fn handle_nav_key(&mut self, nav: NavKey, now: Instant) {
        // Esc with nothing to dismiss leaves the page
        if nav == NavKey::Escape && !self.controller.is_visible() {
            self.should_quit = true;
            return;
        }

        let prevented = self.dispatch(SearchEvent::KeyDown(nav), now);
        if nav == NavKey::Enter && !prevented && !self.should_quit {
            self.submit_form(now);
        }
    }
}

fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Esc => Some(NavKey::Escape),
        _ => None,
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
