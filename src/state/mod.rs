/// State management module
///
/// This module owns everything the gallery mutates:
/// - The candidate id sequence (candidates.rs)
/// - The incrementally realized list (loader.rs)
/// - Column choice, lightbox selection and scroll affordance
/// - Per-image load status (thumbnails.rs)
///
/// Event handlers read this bundle through `&mut self` when they run,
/// never through state captured when a subscription was created.

pub mod candidates;
pub mod columns;
pub mod lightbox;
pub mod loader;
pub mod scroll;
pub mod thumbnails;
pub mod viewport;

use iced::widget::image::Handle;

use crate::config::GalleryConfig;
use candidates::{CandidateSequence, ImageId};
use columns::GridColumns;
use lightbox::{Lightbox, NavKey};
use loader::{GrowthOutcome, IncrementalLoader, PendingGrowth};
use scroll::{ScrollTopAffordance, SmoothScroll};
use thumbnails::Thumbnails;
use viewport::{ViewportMetrics, SENTINEL_HEIGHT};

/// Window height above the gallery viewport (header row), until a
/// scroll report measures it. Kept low so short content errs toward loading.
const DEFAULT_CHROME_HEIGHT: f32 = 72.0;

#[derive(Debug)]
pub struct GalleryState {
    pub loader: IncrementalLoader,
    pub columns: GridColumns,
    pub lightbox: Lightbox,
    pub scroll_top: ScrollTopAffordance,
    pub smooth_scroll: SmoothScroll,
    pub thumbnails: Thumbnails,
    viewport: ViewportMetrics,
    window_height: f32,
    /// Window height not taken by the gallery viewport
    chrome_height: f32,
    sentinel_margin: f32,
}

impl GalleryState {
    pub fn new(config: &GalleryConfig) -> Self {
        let candidates = CandidateSequence::new(config.base_offset, config.candidate_count);
        Self {
            loader: IncrementalLoader::new(candidates, config.initial_count, config.batch_size),
            columns: config.default_columns,
            lightbox: Lightbox::default(),
            scroll_top: ScrollTopAffordance::new(config.scroll_top_threshold),
            smooth_scroll: SmoothScroll::default(),
            thumbnails: Thumbnails::default(),
            viewport: ViewportMetrics::default(),
            window_height: 0.0,
            chrome_height: DEFAULT_CHROME_HEIGHT,
            sentinel_margin: config.sentinel_margin,
        }
    }

    /// Record a scroll event. Returns a growth to schedule if the sentinel just came into view.
    pub fn observe_viewport(&mut self, metrics: ViewportMetrics) -> Option<PendingGrowth> {
        self.viewport = metrics;
        if self.window_height > 0.0 {
            self.chrome_height = (self.window_height - metrics.viewport_height).max(0.0);
        }
        self.scroll_top.observe(metrics.offset_y);
        self.smooth_scroll.observe(metrics.offset_y);
        let visible = metrics.sentinel_in_view(SENTINEL_HEIGHT, self.sentinel_margin);
        self.loader.grow_if_triggered(visible)
    }

    pub fn complete_growth(&mut self, growth: PendingGrowth) -> GrowthOutcome {
        self.loader.complete_growth(growth)
    }

    /// Re-check the sentinel when content fits in the viewport.
    ///
    /// The scrollable reports nothing while its content fits, so a short
    /// grid is measured from the layout instead. Overflowing content is
    /// left to the scroll reports.
    pub fn refresh_sentinel(&mut self) -> Option<PendingGrowth> {
        if self.window_height <= 0.0 {
            return None;
        }

        let metrics = ViewportMetrics {
            offset_y: 0.0,
            viewport_height: (self.window_height - self.chrome_height).max(0.0),
            content_height: viewport::content_height(self.loader.len(), self.columns),
        };
        if metrics.content_height > metrics.viewport_height {
            return None;
        }

        self.viewport = metrics;
        self.scroll_top.observe(0.0);
        let visible = metrics.sentinel_in_view(SENTINEL_HEIGHT, self.sentinel_margin);
        self.loader.grow_if_triggered(visible)
    }

    /// Window opened or resized
    pub fn resize_window(&mut self, height: f32) -> Option<PendingGrowth> {
        self.window_height = height;
        self.refresh_sentinel()
    }

    pub fn set_columns(&mut self, columns: GridColumns) -> Option<PendingGrowth> {
        self.columns = columns;
        self.refresh_sentinel()
    }

    pub fn open(&mut self, index: usize) -> bool {
        self.lightbox.open(index, self.loader.len())
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    pub fn handle_key(&mut self, key: NavKey) {
        self.lightbox.handle_key(key, self.loader.len());
    }

    /// Identifier shown in the lightbox, if open
    pub fn enlarged(&self) -> Option<ImageId> {
        self.lightbox
            .selected()
            .and_then(|index| self.loader.get(index))
    }

    /// Record a finished image load; failures leave an empty tile
    pub fn image_loaded(&mut self, id: ImageId, handle: Option<Handle>) {
        if self.loader.is_mounted() {
            self.thumbnails.resolve(id, handle);
        }
    }

    /// Start the smooth scroll back to the top
    pub fn scroll_to_top(&mut self) {
        self.smooth_scroll.start(self.viewport.offset_y);
    }

    /// Drop pending work and forget loaded images
    pub fn teardown(&mut self) {
        self.loader.teardown();
        self.smooth_scroll.cancel();
        self.thumbnails.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_bottom() -> ViewportMetrics {
        ViewportMetrics {
            offset_y: 1400.0,
            viewport_height: 600.0,
            content_height: 2000.0,
        }
    }

    fn at_top() -> ViewportMetrics {
        ViewportMetrics {
            offset_y: 0.0,
            viewport_height: 600.0,
            content_height: 2000.0,
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        let ids: Vec<_> = state.loader.realized().collect();
        assert_eq!(ids.first(), Some(&ImageId(10)));
        assert_eq!(ids.last(), Some(&ImageId(29)));
        assert_eq!(state.columns.count(), 4);

        let growth = state.observe_viewport(at_bottom()).expect("sentinel in view");
        assert_eq!(
            state.complete_growth(growth),
            GrowthOutcome::Grew { from: 20, to: 40 }
        );
        let ids: Vec<_> = state.loader.realized().collect();
        assert_eq!(ids.len(), 40);
        assert_eq!(ids.last(), Some(&ImageId(49)));

        assert!(state.open(5));
        assert_eq!(state.enlarged(), Some(ImageId(15)));

        state.handle_key(NavKey::Next);
        assert_eq!(state.enlarged(), Some(ImageId(16)));

        state.handle_key(NavKey::Close);
        assert_eq!(state.enlarged(), None);
    }

    #[test]
    fn test_scroll_updates_affordance() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        state.observe_viewport(at_bottom());
        assert!(state.scroll_top.is_visible());
        state.observe_viewport(at_top());
        assert!(!state.scroll_top.is_visible());
    }

    #[test]
    fn test_repeated_triggers_clamp_at_one_hundred() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        for _ in 0..10 {
            state.observe_viewport(at_top());
            if let Some(growth) = state.observe_viewport(at_bottom()) {
                state.complete_growth(growth);
            }
        }
        assert_eq!(state.loader.len(), 100);
    }

    #[test]
    fn test_navigation_sees_list_growth() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        state.open(19);

        let growth = state.observe_viewport(at_bottom()).unwrap();
        state.complete_growth(growth);

        // Wraps at 40 now, not at the 20 seen when the lightbox opened
        state.handle_key(NavKey::Next);
        assert_eq!(state.lightbox.selected(), Some(20));
    }

    #[test]
    fn test_scroll_to_top_starts_from_last_offset() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        state.observe_viewport(at_bottom());
        state.scroll_to_top();
        assert!(state.smooth_scroll.is_animating());
    }

    #[test]
    fn test_short_grid_grows_without_scrolling() {
        let config = GalleryConfig {
            default_columns: GridColumns::Six,
            ..GalleryConfig::default()
        };
        let mut state = GalleryState::new(&config);

        // 20 tiles in 6 columns are 592 high; the viewport is 828
        let growth = state.resize_window(900.0).expect("short grid should load more");
        state.complete_growth(growth);
        assert_eq!(state.loader.len(), 40);

        // 7 rows now overflow the viewport; scrolling takes over
        assert!(state.refresh_sentinel().is_none());
    }

    #[test]
    fn test_tall_window_keeps_loading_until_overflow() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        let mut growth = state.resize_window(2400.0);
        while let Some(pending) = growth {
            state.complete_growth(pending);
            growth = state.refresh_sentinel();
        }
        // 10 rows (1960 high) fit the 2328 viewport, 15 rows do not
        assert_eq!(state.loader.len(), 60);
        assert!(viewport::content_height(state.loader.len(), state.columns) > 2328.0);
    }

    #[test]
    fn test_columns_follow_last_selection() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        state.resize_window(900.0);
        for columns in [
            GridColumns::Two,
            GridColumns::Six,
            GridColumns::Four,
            GridColumns::Six,
            GridColumns::Two,
        ] {
            state.set_columns(columns);
            assert_eq!(state.columns.count(), columns.count());
        }
    }

    #[test]
    fn test_column_change_rechecks_sentinel() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        assert!(state.resize_window(900.0).is_none());
        assert!(state.set_columns(GridColumns::Two).is_none());

        let growth = state.set_columns(GridColumns::Six);
        assert_eq!(growth.map(|g| g.requested_at()), Some(20));
    }

    #[test]
    fn test_measured_chrome_replaces_default() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        state.resize_window(900.0);
        // The header turned out to be 100 high, leaving a 800 viewport
        state.observe_viewport(ViewportMetrics {
            offset_y: 0.0,
            viewport_height: 800.0,
            content_height: 2000.0,
        });
        state.set_columns(GridColumns::Two);

        // 20 tiles in 6 columns (592 high) fit the measured 800
        assert!(state.set_columns(GridColumns::Six).is_some());
        assert_eq!(state.chrome_height, 100.0);
    }

    #[test]
    fn test_wheel_stops_scroll_to_top() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        state.observe_viewport(at_bottom());
        state.scroll_to_top();
        state.smooth_scroll.tick();

        // Wheel jumped well past the frame the animation just set
        state.observe_viewport(ViewportMetrics {
            offset_y: 200.0,
            ..at_bottom()
        });
        assert!(!state.smooth_scroll.is_animating());
    }

    #[test]
    fn test_teardown_drops_pending_growth() {
        let mut state = GalleryState::new(&GalleryConfig::default());
        let growth = state.observe_viewport(at_bottom()).unwrap();
        state.teardown();
        assert_eq!(state.complete_growth(growth), GrowthOutcome::Abandoned);
        assert_eq!(state.loader.len(), 20);

        state.image_loaded(ImageId(10), None);
        assert!(state.thumbnails.get(ImageId(10)).is_none());
    }
}
