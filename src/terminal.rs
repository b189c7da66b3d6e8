//! Terminal session lifetime
//!
//! Raw mode, the alternate screen, mouse capture and focus reporting are
//! switched on together and switched off again when the session is dropped,
//! including when the program panics.

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use crate::error::CoinflipError;

pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Initialize terminal with raw mode, alternate screen, mouse capture and focus events
    pub fn start() -> Result<Self, CoinflipError> {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            hook(info);
        }));

        enable_raw_mode()?;

        // If any subsequent operations fail, ensure raw mode is disabled
        if let Err(e) = execute!(
            stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        ) {
            restore();
            return Err(e.into());
        }

        match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
            Ok(terminal) => {
                #[cfg(debug_assertions)]
                log::debug!("Terminal session started");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore();
                Err(e.into())
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore();

        #[cfg(debug_assertions)]
        log::debug!("Terminal session restored");
    }
}

/// Restore terminal to normal state
fn restore() {
    let _ = execute!(
        stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}
