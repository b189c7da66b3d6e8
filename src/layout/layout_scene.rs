//! Element tree recorded during each render pass

use ratatui::layout::{Position, Rect};

use super::layout_hit_test::SpatialQuery;

/// Index of an element within a `Scene`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// What a recorded element is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Area the grid is centered in; pointer-leave is measured against it
    Container,
    /// Full-size coin slot, tagged with its cell index
    Slot,
    /// Painted part of a coin, narrower than its slot while flipping
    CoinFace,
    StatusLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub area: Rect,
    pub parent: Option<ElementId>,
    pub cell_index: Option<usize>,
}

/// Painted elements in paint order (later elements are on top)
///
/// Cleared at the start of each render pass and rebuilt as widgets draw.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    elements: Vec<Element>,
    container: Option<ElementId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all elements before a new render pass
    pub fn clear(&mut self) {
        self.elements.clear();
        self.container = None;
    }

    pub fn push(
        &mut self,
        kind: ElementKind,
        area: Rect,
        parent: Option<ElementId>,
        cell_index: Option<usize>,
    ) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            kind,
            area,
            parent,
            cell_index,
        });
        if kind == ElementKind::Container {
            self.container = Some(id);
        }
        id
    }

    pub fn push_container(&mut self, area: Rect) -> ElementId {
        self.push(ElementKind::Container, area, None, None)
    }

    pub fn push_slot(&mut self, container: ElementId, area: Rect, index: usize) -> ElementId {
        self.push(ElementKind::Slot, area, Some(container), Some(index))
    }

    pub fn push_face(&mut self, slot: ElementId, area: Rect) -> ElementId {
        self.push(ElementKind::CoinFace, area, Some(slot), None)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Area of the grid container from the last render, if one was drawn
    pub fn container_area(&self) -> Option<Rect> {
        self.container
            .and_then(|id| self.get(id))
            .map(|element| element.area)
    }

    /// Whether the point lies inside the grid container
    pub fn in_container(&self, x: u16, y: u16) -> bool {
        self.container_area()
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }
}

impl SpatialQuery for Scene {
    type Handle = ElementId;

    fn topmost_element_at(&self, x: u16, y: u16) -> Option<ElementId> {
        let point = Position::new(x, y);
        self.elements
            .iter()
            .rposition(|element| element.area.contains(point))
            .map(ElementId)
    }

    fn parent_of(&self, handle: ElementId) -> Option<ElementId> {
        self.get(handle).and_then(|element| element.parent)
    }

    fn cell_tag(&self, handle: ElementId) -> Option<usize> {
        self.get(handle).and_then(|element| element.cell_index)
    }
}
