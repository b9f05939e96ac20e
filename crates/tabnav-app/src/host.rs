//! Capabilities the navigator needs from the host editor.
//!
//! The host owns the window/document model, the project tree, event
//! subscription and the actual activate/open actions. The navigator only
//! reads snapshots through this trait and asks for a single action per
//! command.
//!
//! Notifications flow the other way: the host subscribes to its own
//! "window activated" / "window closing" events and forwards them to
//! [`Navigator::on_window_activated`](crate::Navigator::on_window_activated)
//! and [`Navigator::on_window_closing`](crate::Navigator::on_window_closing).

use tabnav_core::prelude::*;
use tabnav_core::{DocumentWindow, OpenTarget, ProjectNode, WindowId};

use crate::indexer::{FileIndex, IndexedFile};

/// Host editor capabilities consumed by the navigator.
///
/// All calls are synchronous and happen on the host's UI thread.
#[cfg_attr(test, mockall::automock)]
pub trait EditorHost {
    /// Every top-level window the host currently shows, in host order.
    fn windows(&self) -> Vec<DocumentWindow>;

    /// The window of the active document, if any document is active.
    fn active_document_window(&self) -> Option<WindowId>;

    /// Top-level projects; each node's children are the project's items.
    fn projects(&self) -> Vec<ProjectNode>;

    /// Bring `window` to the front and give it focus.
    fn activate(&mut self, window: WindowId) -> Result<()>;

    /// Show a freshly built file index for quick access.
    fn present_file_index(&mut self, index: &FileIndex, target: OpenTarget) -> Result<()>;

    /// Open a single indexed file.
    fn open_file(&mut self, file: &IndexedFile, target: OpenTarget) -> Result<()>;
}
