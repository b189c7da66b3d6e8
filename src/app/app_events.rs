use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;

use super::app_state::App;
use super::mouse_events;

mod global;

impl App {
    /// Wait for the next terminal event (up to the poll timeout) and handle it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout())? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse) => {
                mouse_events::handle_mouse_event(self, mouse);
            }
            Event::Resize(columns, rows) => {
                self.resize(columns, rows);
            }
            Event::FocusLost => {
                self.pointer_leave();
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        global::handle_global_keys(self, key);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
