//! Coin widget
//!
//! Draws a coin as a filled ellipse inside its slot. The horizontal radius is
//! scaled by `|cos(angle)|` to fake the rotation around the vertical axis.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::theme;

/// Below this horizontal scale only the rim is visible
const EDGE_ON_SCALE: f64 = 0.2;

/// Which side of the coin faces the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    fn color(self) -> Color {
        match self {
            Face::Front => theme::coin::FRONT,
            Face::Back => theme::coin::BACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    angle: f64,
}

impl Coin {
    /// Coin rotated `angle` degrees around its vertical axis
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    pub fn face(&self) -> Face {
        if self.angle.to_radians().cos() >= 0.0 {
            Face::Front
        } else {
            Face::Back
        }
    }

    /// Horizontal squash factor in `[0, 1]`
    pub fn scale(&self) -> f64 {
        self.angle.to_radians().cos().abs()
    }

    fn half_width(&self, area: Rect) -> f64 {
        (f64::from(area.width) / 2.0 * self.scale()).max(1.0)
    }

    /// Columns actually painted inside `area`, measured along the widest row
    pub fn face_area(&self, area: Rect) -> Rect {
        if area.is_empty() {
            return area;
        }
        let middle = i32::from(area.height / 2);
        let mut painted = (0..i32::from(area.width)).filter(|&c| self.contains(area, c, middle));

        match painted.next() {
            Some(first) => {
                let last = painted.last().unwrap_or(first);
                Rect::new(
                    area.x + first as u16,
                    area.y,
                    (last - first + 1) as u16,
                    area.height,
                )
            }
            None => Rect::new(area.x + area.width / 2, area.y, 1, area.height),
        }
    }

    fn contains(&self, area: Rect, column: i32, row: i32) -> bool {
        if column < 0 || row < 0 || column >= i32::from(area.width) || row >= i32::from(area.height)
        {
            return false;
        }
        let half_w = self.half_width(area);
        let half_h = f64::from(area.height) / 2.0;
        let nx = (f64::from(column) + 0.5 - f64::from(area.width) / 2.0) / half_w;
        let ny = (f64::from(row) + 0.5 - half_h) / half_h;
        nx * nx + ny * ny <= 1.0
    }

    fn is_rim(&self, area: Rect, column: i32, row: i32) -> bool {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .any(|(dx, dy)| !self.contains(area, column + dx, row + dy))
    }
}

impl Widget for Coin {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let edge_on = self.scale() < EDGE_ON_SCALE;
        let face_color = self.face().color();

        for row in 0..area.height {
            for column in 0..area.width {
                let (c, r) = (i32::from(column), i32::from(row));
                if !self.contains(area, c, r) {
                    continue;
                }
                let color = if edge_on || self.is_rim(area, c, r) {
                    theme::coin::RIM
                } else {
                    face_color
                };
                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }
    }
}
