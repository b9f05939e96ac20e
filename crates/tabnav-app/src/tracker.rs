//! Window activation tracker backing the ping-pong command.
//!
//! Remembers the document the user left when focus moved to something that
//! is not a navigable document (a tool window, an origin-docked pane), so
//! ping-pong can jump straight back to it.
//!
//! ```text
//!            activated(doc, _)            closing(w)
//!   Holding(w) ───────────────▶ Empty ◀──────────── Holding(w)
//!
//!            activated(tool, doc d)
//!   Empty/Holding ─────────────────▶ Holding(d)
//! ```

use serde::{Deserialize, Serialize};
use tabnav_core::prelude::*;
use tabnav_core::{qualifying_windows, DocumentWindow, WindowId};

/// Remembered jump-back target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "window", rename_all = "snake_case")]
pub enum TrackerState {
    #[default]
    Empty,
    Holding(WindowId),
}

impl TrackerState {
    pub fn held(&self) -> Option<WindowId> {
        match self {
            TrackerState::Empty => None,
            TrackerState::Holding(id) => Some(*id),
        }
    }
}

/// State machine driven by host activation/closing notifications
#[derive(Debug, Default)]
pub struct ActivationTracker {
    state: TrackerState,
}

impl ActivationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Focus moved from `lost` to `got`.
    ///
    /// A switch into a qualifying document clears the memory. Any other
    /// activation remembers `lost` when it was a qualifying document.
    pub fn on_activated(&mut self, got: &DocumentWindow, lost: Option<&DocumentWindow>) {
        let next = if got.is_qualifying() {
            TrackerState::Empty
        } else {
            match lost {
                Some(lost) if lost.is_qualifying() => TrackerState::Holding(lost.id),
                _ => TrackerState::Empty,
            }
        };

        if next != self.state {
            debug!(
                "Tracker {:?} -> {:?} (got {}, lost {:?})",
                self.state,
                next,
                got.id,
                lost.map(|w| w.id)
            );
        }
        self.state = next;
    }

    /// `window` is about to close; forget it if it is the remembered one.
    pub fn on_closing(&mut self, window: WindowId) {
        if self.state == TrackerState::Holding(window) {
            debug!("Remembered window {} closing, tracker cleared", window);
            self.state = TrackerState::Empty;
        }
    }

    /// Pick the ping-pong target among `windows` given the active document.
    ///
    /// With nothing remembered, the active document becomes the remembered
    /// window and the first other qualifying window is returned. While
    /// holding, the remembered window is returned and kept.
    pub fn ping_pong(
        &mut self,
        windows: &[DocumentWindow],
        current: Option<WindowId>,
    ) -> Option<WindowId> {
        let candidates = qualifying_windows(windows);
        if candidates.is_empty() {
            trace!("Ping-pong: no document windows");
            return None;
        }

        match self.state {
            TrackerState::Holding(held) => Some(held),
            TrackerState::Empty => {
                if let Some(current) = current {
                    self.state = TrackerState::Holding(current);
                }
                candidates
                    .iter()
                    .map(|w| w.id)
                    .find(|id| Some(*id) != current)
            }
        }
    }
}
