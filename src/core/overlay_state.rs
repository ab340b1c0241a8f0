//! Per-overlay open/closed state
//!
//! A plain value type. Every operation reports whether it changed the
//! state so the owning controller knows which side effects to run.

use crate::core::types::OpenState;

/// Open/closed state of a single overlay
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OverlayState {
    state: OpenState,
}

impl OverlayState {
    /// Creates a closed overlay state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// `Closed → Open` or `Open → Closed`. Always changes the state.
    pub fn toggle(&mut self) -> bool {
        self.state = match self.state {
            OpenState::Closed => OpenState::Open,
            OpenState::Open => OpenState::Closed,
        };
        true
    }

    /// Ends in `Open`; returns whether it was closed before
    pub fn open(&mut self) -> bool {
        self.set(OpenState::Open)
    }

    /// Ends in `Closed`; returns whether it was open before
    pub fn close(&mut self) -> bool {
        self.set(OpenState::Closed)
    }

    /// Dismissal from an outside interaction. Never reopens.
    pub fn on_outside_signal(&mut self) -> bool {
        self.close()
    }

    fn set(&mut self, state: OpenState) -> bool {
        let changed = self.state != state;
        self.state = state;
        changed
    }
}
