use serde::{Deserialize, Serialize};

/// Domain-oriented invalidation topic used to classify redraw requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedrawTopic {
    General,
    Groups,
    Data,
    TimeScale,
    AxisWidth,
}

impl RedrawTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::General => 1 << 0,
            Self::Groups => 1 << 1,
            Self::Data => 1 << 2,
            Self::TimeScale => 1 << 3,
            Self::AxisWidth => 1 << 4,
        }
    }
}

/// Coalesced "needs redraw" state.
///
/// Change signals arriving before the next pass collapse into one pending
/// pass; this is a debounced flag with topic bookkeeping, not a frame queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingRedraw {
    topics: u8,
}

impl PendingRedraw {
    pub fn request(&mut self, topic: RedrawTopic) {
        self.topics |= topic.bit();
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.topics != 0
    }

    #[must_use]
    pub fn contains(self, topic: RedrawTopic) -> bool {
        self.topics & topic.bit() != 0
    }

    /// Clears all pending topics, returning whether anything was pending.
    pub fn take(&mut self) -> bool {
        let pending = self.is_pending();
        self.topics = 0;
        pending
    }
}
