/// Incremental list loader
///
/// Owns the realized prefix of the candidate sequence and grows it in
/// fixed-size batches when the viewport sentinel comes into view. Growth
/// is deferred (an artificial latency), and every deferred growth carries
/// the session it was scheduled in so results arriving after teardown are
/// dropped instead of mutating a dead gallery.

use std::time::Duration;

use super::candidates::{CandidateSequence, ImageId};

/// A scheduled growth that has not been applied yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingGrowth {
    session: u64,
    /// Realized length observed when the sentinel fired
    requested_at: usize,
}

impl PendingGrowth {
    pub fn requested_at(&self) -> usize {
        self.requested_at
    }
}

/// What happened when a pending growth was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthOutcome {
    /// The realized list grew from `from` to `to` items
    Grew { from: usize, to: usize },
    /// Every candidate is already realized
    Exhausted,
    /// The growth belongs to a torn-down session
    Abandoned,
}

#[derive(Debug, Clone)]
pub struct IncrementalLoader {
    candidates: CandidateSequence,
    realized: usize,
    batch_size: usize,
    /// Sentinel visibility at the last viewport observation
    sentinel_visible: bool,
    session: u64,
    mounted: bool,
    in_flight: usize,
}

impl IncrementalLoader {
    pub fn new(candidates: CandidateSequence, initial: usize, batch_size: usize) -> Self {
        Self {
            candidates,
            realized: initial.min(candidates.len()),
            batch_size: batch_size.max(1),
            sentinel_visible: false,
            session: 0,
            mounted: true,
            in_flight: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.realized
    }

    pub fn get(&self, index: usize) -> Option<ImageId> {
        if index < self.realized {
            self.candidates.get(index)
        } else {
            None
        }
    }

    /// Currently realized identifiers, in order
    pub fn realized(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.candidates.prefix(self.realized)
    }

    pub fn is_exhausted(&self) -> bool {
        self.realized >= self.candidates.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of growths scheduled but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Feed the latest sentinel visibility.
    ///
    /// Fires on the transition into view, like an intersection observer
    /// with a zero threshold. Exhaustion is not checked here: a trigger
    /// past the end still schedules a growth that resolves as a no-op.
    pub fn grow_if_triggered(&mut self, sentinel_visible: bool) -> Option<PendingGrowth> {
        let entered = sentinel_visible && !self.sentinel_visible;
        self.sentinel_visible = sentinel_visible;

        if !entered || !self.mounted {
            return None;
        }

        self.in_flight += 1;
        tracing::debug!(
            realized = self.realized,
            in_flight = self.in_flight,
            "sentinel entered view, scheduling growth"
        );

        Some(PendingGrowth {
            session: self.session,
            requested_at: self.realized,
        })
    }

    /// Apply a growth whose delay has elapsed.
    ///
    /// The increment is taken from the length at completion time, so
    /// overlapping growths each add one batch.
    pub fn complete_growth(&mut self, growth: PendingGrowth) -> GrowthOutcome {
        if !self.mounted || growth.session != self.session {
            return GrowthOutcome::Abandoned;
        }

        self.in_flight = self.in_flight.saturating_sub(1);
        // Re-arm so a sentinel still in view after growth fires again
        self.sentinel_visible = false;

        let from = self.realized;
        let to = (from + self.batch_size).min(self.candidates.len());
        if to == from {
            return GrowthOutcome::Exhausted;
        }

        self.realized = to;
        GrowthOutcome::Grew { from, to }
    }

    /// Invalidate every pending growth. The loader stops scheduling.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.session += 1;
        self.in_flight = 0;
    }
}

/// Resolve a pending growth after the artificial load latency
pub async fn defer(growth: PendingGrowth, delay: Duration) -> PendingGrowth {
    tokio::time::sleep(delay).await;
    growth
}
