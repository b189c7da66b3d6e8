use std::time::{Duration, Instant};

use crate::coin::{Cell, CoinField, HoverMap};
use crate::config::{AnimationConfig, Config};
use crate::grid::GridConfig;
use crate::layout::Scene;
use crate::traversal::PointerTraversal;
use crate::viewport::{CellMetrics, Viewport, ViewportSource};

/// Rows reserved at the bottom of the terminal for the status line
pub const STATUS_LINE_HEIGHT: u16 = 1;

const ANIMATION_POLL_TIMEOUT: Duration = Duration::from_millis(16);
const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct App {
    pub grid: GridConfig,
    /// Pixel size of the area the grid is laid out in
    pub viewport: Viewport,
    pub metrics: CellMetrics,
    pub traversal: PointerTraversal,
    pub hover: HoverMap,
    pub coins: CoinField,
    /// Elements drawn by the last render, used for hit testing
    pub scene: Scene,
    pub animation: AnimationConfig,
    pub warning: Option<String>,
    pub should_quit: bool,
    dirty: bool,
    last_tick: Option<Instant>,
}

impl App {
    pub fn new(config: &Config, metrics: CellMetrics) -> Self {
        Self {
            grid: GridConfig::default(),
            viewport: Viewport::default(),
            metrics,
            traversal: PointerTraversal::new(),
            hover: HoverMap::new(),
            coins: CoinField::new(),
            scene: Scene::new(),
            animation: config.animation,
            warning: None,
            should_quit: false,
            dirty: true,
            last_tick: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn show_warning(&mut self, warning: &str) {
        self.warning = Some(warning.to_string());
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn should_render(&self) -> bool {
        self.dirty || self.coins.is_animating()
    }

    /// Shorter poll while coins are moving so the animation stays smooth
    pub fn poll_timeout(&self) -> Duration {
        if self.coins.is_animating() {
            ANIMATION_POLL_TIMEOUT
        } else {
            IDLE_POLL_TIMEOUT
        }
    }

    /// The terminal is now `columns` x `rows` cells
    pub fn resize(&mut self, columns: u16, rows: u16) {
        let grid_rows = rows.saturating_sub(STATUS_LINE_HEIGHT);
        self.apply_viewport(Viewport::from_cells(columns, grid_rows, self.metrics));
        self.mark_dirty();
    }

    /// Re-measure the terminal; on failure the last grid stays in place
    pub fn refresh_viewport<S: ViewportSource>(&mut self, source: &S) {
        match source.size_in_cells() {
            Ok((columns, rows)) => self.resize(columns, rows),
            Err(_e) => {
                #[cfg(debug_assertions)]
                log::warn!("Failed to read terminal size, keeping {}: {}", self.grid, _e);
            }
        }
    }

    /// Recompute the grid for a new viewport and drop state for removed cells
    pub fn apply_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let grid = GridConfig::compute(viewport.width, viewport.height);

        #[cfg(debug_assertions)]
        log::debug!(
            "Viewport {}x{}px -> {}",
            viewport.width,
            viewport.height,
            grid
        );

        if grid == self.grid {
            return;
        }
        self.grid = grid;

        let total = grid.total_cells();
        self.coins.resize(total);
        self.hover.retain_below(total);
        self.traversal.revalidate(total);
        self.sync_flips();
        self.mark_dirty();
    }

    pub fn cell(&self, index: usize) -> Cell {
        Cell::new(index, self.hover.is_hovered(index), self.traversal.active())
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.grid.total_cells()).map(|index| self.cell(index))
    }

    /// Point every coin spring at the face its cell should show
    pub fn sync_flips(&mut self) {
        // Coins at rest start their flip from the next tick, not the last one
        if !self.coins.is_animating() {
            self.last_tick = None;
        }
        let hover = &self.hover;
        let active = self.traversal.active();
        self.coins.apply(
            (0..self.grid.total_cells()).map(|index| Cell::new(index, hover.is_hovered(index), active)),
        );
    }

    /// Pointer left the grid: nothing is active or hovered any more
    pub fn pointer_leave(&mut self) {
        let left = self.traversal.pointer_leave() | self.hover.clear();
        if left {
            #[cfg(debug_assertions)]
            log::debug!("Pointer left the grid");

            self.sync_flips();
            self.mark_dirty();
        }
    }

    /// Advance coin animations to `now`
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);
        self.coins.tick(&self.animation, elapsed)
    }
}
