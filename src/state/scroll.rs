/// Scroll-to-top affordance and the smooth scroll that backs it

/// Visibility of the "Top" button, derived from the last observed offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTopAffordance {
    threshold: f32,
    visible: bool,
}

impl ScrollTopAffordance {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn observe(&mut self, offset_y: f32) {
        self.visible = offset_y > self.threshold;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Exponential ease-out toward offset 0.
///
/// Each tick moves the offset a fixed fraction of the remaining distance,
/// snapping to 0 once under half a pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    offset: f32,
    /// Offset emitted before the last tick; a scroll report may lag one frame
    previous: f32,
    speed: f32,
    active: bool,
}

impl SmoothScroll {
    pub fn new(speed: f32) -> Self {
        Self {
            offset: 0.0,
            previous: 0.0,
            speed: speed.clamp(0.05, 0.95),
            active: false,
        }
    }

    /// Begin scrolling to the top from `from`
    pub fn start(&mut self, from: f32) {
        self.offset = from.max(0.0);
        self.previous = self.offset;
        self.active = self.offset > 0.0;
    }

    /// Advance one frame and return the offset to scroll to
    pub fn tick(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.previous = self.offset;
        self.offset *= 1.0 - self.speed;
        if self.offset < 0.5 {
            self.offset = 0.0;
            self.active = false;
        }
        Some(self.offset)
    }

    /// Feed a reported scroll offset. An offset outside the range the
    /// animation moved through means the user scrolled, so the animation stops.
    pub fn observe(&mut self, offset_y: f32) {
        if !self.active {
            return;
        }
        let own = offset_y >= self.offset - 1.0 && offset_y <= self.previous + 1.0;
        if !own {
            tracing::debug!(offset_y, target = self.offset, "scroll taken over, stopping animation");
            self.active = false;
        }
    }

    /// Stop without reaching the top
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_animating(&self) -> bool {
        self.active
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(0.25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut affordance = ScrollTopAffordance::new(400.0);
        affordance.observe(399.0);
        assert!(!affordance.is_visible());
        affordance.observe(400.0);
        assert!(!affordance.is_visible());
        affordance.observe(401.0);
        assert!(affordance.is_visible());
        affordance.observe(0.0);
        assert!(!affordance.is_visible());
    }

    #[test]
    fn test_smooth_scroll_settles_at_zero() {
        let mut scroll = SmoothScroll::default();
        scroll.start(3000.0);

        let mut last = 3000.0;
        let mut frames = 0;
        while let Some(offset) = scroll.tick() {
            assert!(offset < last);
            last = offset;
            frames += 1;
            assert!(frames < 100, "animation never settled");
        }
        assert_eq!(last, 0.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_own_scroll_reports_keep_animating() {
        let mut scroll = SmoothScroll::default();
        scroll.start(1000.0);
        scroll.observe(1000.0);
        assert_eq!(scroll.tick(), Some(750.0));

        // Current frame, and a report lagging one frame behind
        scroll.observe(750.0);
        scroll.observe(1000.0);
        assert!(scroll.is_animating());
    }

    #[test]
    fn test_wheel_during_animation_stops_it() {
        let mut scroll = SmoothScroll::default();
        scroll.start(1000.0);
        scroll.tick();
        scroll.observe(1200.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(), None);

        let mut scroll = SmoothScroll::default();
        scroll.start(1000.0);
        scroll.tick();
        scroll.observe(100.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_start_at_top_does_nothing() {
        let mut scroll = SmoothScroll::default();
        scroll.start(0.0);
        assert_eq!(scroll.tick(), None);
    }
}
