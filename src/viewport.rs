//! Terminal viewport measured in pixels
//!
//! The grid engine works in pixels while the terminal reports character cells.
//! `CellMetrics` bridges the two, and `ViewportSource` is where the size comes
//! from (the real terminal, or a fixed size in tests).

use ratatui::crossterm::terminal;
use ratatui::layout::Rect;
use std::io;
use std::str::FromStr;

use crate::config::TerminalConfig;
use crate::error::CoinflipError;
use crate::grid::PixelRect;

/// Pixel size of one terminal cell when the terminal does not report it
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;
pub const DEFAULT_CELL_HEIGHT_PX: u16 = 16;

/// Pixel dimensions of a single terminal character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width_px: u16,
    pub height_px: u16,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_CELL_WIDTH_PX,
            height_px: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

impl CellMetrics {
    pub fn new(width_px: u16, height_px: u16) -> Self {
        Self {
            width_px: width_px.max(1),
            height_px: height_px.max(1),
        }
    }

    /// Resolve metrics from config, then the terminal, then defaults
    pub fn resolve(config: &TerminalConfig) -> Self {
        let detected = Self::detect();
        let width = config
            .cell_width_px
            .or(detected.map(|m| m.width_px))
            .unwrap_or(DEFAULT_CELL_WIDTH_PX);
        let height = config
            .cell_height_px
            .or(detected.map(|m| m.height_px))
            .unwrap_or(DEFAULT_CELL_HEIGHT_PX);
        Self::new(width, height)
    }

    /// Ask the terminal for its pixel size; many terminals report zero
    fn detect() -> Option<Self> {
        let size = terminal::window_size().ok()?;
        Self::from_window(size.columns, size.rows, size.width, size.height)
    }

    fn from_window(columns: u16, rows: u16, width_px: u16, height_px: u16) -> Option<Self> {
        if columns == 0 || rows == 0 || width_px == 0 || height_px == 0 {
            return None;
        }
        Some(Self::new(width_px / columns, height_px / rows))
    }

    /// Map a pixel rectangle onto terminal cells, offset by `origin`
    ///
    /// Edges round to the nearest cell boundary; a non-empty rectangle always
    /// covers at least one cell.
    pub fn to_cells(&self, rect: PixelRect, origin: Rect) -> Rect {
        let cw = f64::from(self.width_px);
        let ch = f64::from(self.height_px);

        let left = (rect.x / cw).round().max(0.0);
        let top = (rect.y / ch).round().max(0.0);
        let right = (rect.right() / cw).round().max(left);
        let bottom = (rect.bottom() / ch).round().max(top);

        let mut width = (right - left) as u16;
        let mut height = (bottom - top) as u16;
        if rect.width > 0.0 {
            width = width.max(1);
        }
        if rect.height > 0.0 {
            height = height.max(1);
        }

        Rect::new(
            origin.x.saturating_add(left as u16),
            origin.y.saturating_add(top as u16),
            width,
            height,
        )
        .intersection(origin)
    }
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i64,
    pub height: i64,
}

impl Viewport {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Pixel size of an area measured in terminal cells
    pub fn from_cells(columns: u16, rows: u16, metrics: CellMetrics) -> Self {
        Self {
            width: i64::from(columns) * i64::from(metrics.width_px),
            height: i64::from(rows) * i64::from(metrics.height_px),
        }
    }
}

impl FromStr for Viewport {
    type Err = CoinflipError;

    /// Parses `WIDTHxHEIGHT`, e.g. `1024x768`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoinflipError::InvalidViewport(s.to_string());
        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(width, height))
    }
}

/// Something that can report the current terminal size in cells
pub trait ViewportSource {
    fn size_in_cells(&self) -> io::Result<(u16, u16)>;
}

/// The real terminal, queried through crossterm
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalViewport;

impl ViewportSource for TerminalViewport {
    fn size_in_cells(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}
