use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;

use super::RangeEngine;

/// Ordered redraw levels raised by engine mutations.
///
/// `Frame` asks for another animation frame; `Range` means the displayed or
/// target range was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Frame,
    Range,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }

    #[must_use]
    pub const fn requires_redraw(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl<C: Calendar> RangeEngine<C> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.invalidation
    }

    /// Returns and clears the pending redraw request.
    pub fn take_invalidation(&mut self) -> InvalidationLevel {
        std::mem::take(&mut self.invalidation)
    }

    pub(super) fn invalidate(&mut self, level: InvalidationLevel) {
        self.invalidation = self.invalidation.max(level);
    }
}
