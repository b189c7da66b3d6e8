//! Shared test utilities for coinflip
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::viewport::{CellMetrics, ViewportSource};
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use std::io;

    /// Helper to create App with default config and 8x16px cells
    pub fn test_app() -> App {
        App::new(&Config::default(), CellMetrics::new(8, 16))
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn mouse_moved(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Moved, column, row)
    }

    pub fn mouse_drag(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
    }

    /// Terminal with a fixed size in cells
    pub struct FixedViewport(pub u16, pub u16);

    impl ViewportSource for FixedViewport {
        fn size_in_cells(&self) -> io::Result<(u16, u16)> {
            Ok((self.0, self.1))
        }
    }

    /// Terminal whose size cannot be read
    pub struct FailingViewport;

    impl ViewportSource for FailingViewport {
        fn size_in_cells(&self) -> io::Result<(u16, u16)> {
            Err(io::Error::other("no tty"))
        }
    }
}
