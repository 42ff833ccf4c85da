/// Lightbox (enlarged view) controller
///
/// Tracks which realized item, if any, is enlarged. Navigation wraps
/// around the realized list. The list length is passed in at call time
/// rather than cached, so a list that grew while the lightbox was open
/// is always navigated with its current length.

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
    Close,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    selection: Option<usize>,
}

impl Lightbox {
    pub fn selected(&self) -> Option<usize> {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Enlarge item `index`. Out-of-range indices leave the lightbox untouched.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            tracing::warn!(index, len, "ignoring lightbox open past the realized list");
            return false;
        }
        self.selection = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.selection = None;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(index) = self.selection {
            self.selection = Some((index + 1) % len);
        }
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(index) = self.selection {
            self.selection = Some((index + len - 1) % len);
        }
    }

    /// Keyboard input; ignored while closed
    pub fn handle_key(&mut self, key: NavKey, len: usize) {
        if !self.is_open() {
            return;
        }
        match key {
            NavKey::Next => self.next(len),
            NavKey::Prev => self.prev(len),
            NavKey::Close => self.close(),
        }
    }
}
