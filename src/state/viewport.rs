/// Viewport geometry and sentinel visibility
///
/// The sentinel is the trailing row at the very bottom of the scrollable
/// content. It counts as visible when it intersects the viewport grown by
/// a forward margin, so loading starts just before the user reaches it.
///
/// iced only reports a viewport while its content overflows, so for
/// content that fits the gallery estimates the grid height from the same
/// layout constants the grid view uses.

use super::columns::GridColumns;

/// Height of the trailing "More image ..." row
pub const SENTINEL_HEIGHT: f32 = 40.0;

/// Gap between tiles, rows, and the grid and sentinel
pub const GRID_SPACING: f32 = 8.0;

/// Padding around the whole grid
pub const GRID_PADDING: f32 = 20.0;

/// Height of the scrollable content for `items` tiles in `columns` tracks
pub fn content_height(items: usize, columns: GridColumns) -> f32 {
    let rows = items.div_ceil(columns.count());
    let grid = rows as f32 * columns.tile_height()
        + rows.saturating_sub(1) as f32 * GRID_SPACING;
    2.0 * GRID_PADDING + grid + GRID_SPACING + SENTINEL_HEIGHT
}

/// Plain copy of what the scrollable reports on every scroll
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ViewportMetrics {
    /// Whether a sentinel of `sentinel_height` at the end of the content
    /// touches the viewport extended by `margin` below its bottom edge
    pub fn sentinel_in_view(&self, sentinel_height: f32, margin: f32) -> bool {
        let sentinel_top = (self.content_height - sentinel_height).max(0.0);
        let viewport_bottom = self.offset_y + self.viewport_height + margin;
        sentinel_top <= viewport_bottom
    }
}

impl From<iced::widget::scrollable::Viewport> for ViewportMetrics {
    fn from(viewport: iced::widget::scrollable::Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }
}
