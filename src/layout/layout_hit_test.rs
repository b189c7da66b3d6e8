//! Hit testing against rendered elements
//!
//! Resolution goes through whatever was actually painted at the pointer
//! position, so coins mid-flip resolve the same way they look.

/// Spatial queries a render layer answers about what it last drew
pub trait SpatialQuery {
    type Handle: Copy;

    /// Front-most element covering the terminal cell at (`x`, `y`)
    fn topmost_element_at(&self, x: u16, y: u16) -> Option<Self::Handle>;

    fn parent_of(&self, handle: Self::Handle) -> Option<Self::Handle>;

    /// Cell index carried by this element, if it is a coin slot
    fn cell_tag(&self, handle: Self::Handle) -> Option<usize>;

    /// Walks up from `handle` (inclusive) and returns the first cell tag found
    fn find_tagged_ancestor(&self, handle: Self::Handle) -> Option<usize> {
        let mut current = Some(handle);
        while let Some(element) = current {
            if let Some(index) = self.cell_tag(element) {
                return Some(index);
            }
            current = self.parent_of(element);
        }
        None
    }
}

/// Returns the index of the coin under the pointer
///
/// `None` when the pointer is over the gap, the padding, or anything that is
/// not inside a coin slot.
pub fn resolve_cell<Q: SpatialQuery>(query: &Q, x: u16, y: u16) -> Option<usize> {
    let element = query.topmost_element_at(x, y)?;
    query.find_tagged_ancestor(element)
}
