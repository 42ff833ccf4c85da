/// The full, deterministic set of selectable image identifiers.
///
/// Identifiers are never stored: `id = base_offset + index` is computed
/// on demand, so the sequence stays immutable and cheap to clone.

use std::fmt;

/// Numeric identifier understood by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered candidate ids `base_offset, base_offset + 1, ...` up to a ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSequence {
    base_offset: u32,
    len: usize,
}

impl CandidateSequence {
    pub fn new(base_offset: u32, len: usize) -> Self {
        Self { base_offset, len }
    }

    /// Total number of candidates
    pub fn len(&self) -> usize {
        self.len
    }

    /// Identifier at `index`, or None past the ceiling
    pub fn get(&self, index: usize) -> Option<ImageId> {
        if index < self.len {
            Some(ImageId(self.base_offset + index as u32))
        } else {
            None
        }
    }

    /// The first `n` identifiers (clamped to the ceiling)
    pub fn prefix(&self, n: usize) -> impl Iterator<Item = ImageId> + '_ {
        (0..n.min(self.len)).filter_map(move |index| self.get(index))
    }
}
