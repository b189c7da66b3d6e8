use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use super::app_state::{App, STATUS_LINE_HEIGHT};
use super::status_line_render;
use crate::coin::Coin;
use crate::grid::GridPlacement;
use crate::layout::ElementKind;
use crate::theme;
use crate::viewport::Viewport;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.scene.clear();

        let [grid_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_LINE_HEIGHT)])
                .areas(frame.area());

        // The frame is the authoritative size; catches resizes we never saw
        let measured = Viewport::from_cells(grid_area.width, grid_area.height, self.metrics);
        if measured != self.viewport {
            self.apply_viewport(measured);
        }

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::page::BACKGROUND)),
            grid_area,
        );
        let container = self.scene.push_container(grid_area);

        let placement = GridPlacement::new(
            self.grid,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
        for (index, rect) in placement.slots() {
            let slot_area = self.metrics.to_cells(rect, grid_area);
            if slot_area.is_empty() {
                continue;
            }
            let slot = self.scene.push_slot(container, slot_area, index);

            let angle = self.coins.get(index).map_or(0.0, |spring| spring.angle());
            let coin = Coin::new(angle);
            self.scene.push_face(slot, coin.face_area(slot_area));
            frame.render_widget(coin, slot_area);
        }

        let status_rect = status_line_render::render_line(self, frame, status_area);
        self.scene
            .push(ElementKind::StatusLine, status_rect, None, None);
    }
}
