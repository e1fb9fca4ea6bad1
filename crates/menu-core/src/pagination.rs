//! Page arithmetic shared by the renderer and the paging keys.
//!
//! A list of `len` entries shown `height` rows at a time is cut into fixed
//! pages `[0, h)`, `[h, 2h)`, ... and the page holding the selection is the one
//! drawn. Paging moves relative to the start of that same page, so what the
//! user sees and where PageUp/PageDown land never disagree.

use std::ops::Range;

/// First index of the page containing `selected`. `None` when there is no room
/// to draw anything.
pub fn page_start(selected: usize, height: usize) -> Option<usize> {
    if height == 0 {
        return None;
    }
    Some((selected / height) * height)
}

/// Entries to draw for the current selection.
pub fn visible_window(len: usize, selected: usize, height: usize) -> Range<usize> {
    let Some(start) = page_start(selected, height) else {
        return 0..0;
    };
    let start = start.min(len);
    let end = len.min(start + height);
    start..end
}
