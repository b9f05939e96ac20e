//! Window types as observed from the host editor
//!
//! The core never creates or destroys windows. It only sees snapshots the
//! host hands over and picks among them by [`WindowId`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, host-assigned identity of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category of a window; only documents take part in navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// A pane showing an open file
    #[default]
    Document,
    /// A tool or utility panel (output, explorer, ...)
    Tool,
    /// Anything else the host reports
    Other,
}

/// Editor-space position of a window's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: i32,
    pub left: i32,
}

impl Position {
    pub fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }

    /// Windows docked at the exact origin are not free document panes
    pub fn is_origin(&self) -> bool {
        self.top == 0 && self.left == 0
    }
}

/// One open editor pane as exposed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentWindow {
    pub id: WindowId,
    pub kind: WindowKind,
    pub position: Position,
    /// Display name, only used for logs and runner output
    #[serde(default)]
    pub title: String,
}

impl DocumentWindow {
    pub fn new(id: u64, kind: WindowKind, top: i32, left: i32) -> Self {
        Self {
            id: WindowId(id),
            kind,
            position: Position::new(top, left),
            title: String::new(),
        }
    }

    /// Shorthand for a document pane at the given position
    pub fn document(id: u64, top: i32, left: i32) -> Self {
        Self::new(id, WindowKind::Document, top, left)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// A document window that is not docked at the origin
    pub fn is_qualifying(&self) -> bool {
        self.kind == WindowKind::Document && !self.position.is_origin()
    }
}

/// Keep only the windows that take part in jump/ping-pong, preserving host order
pub fn qualifying_windows(windows: &[DocumentWindow]) -> Vec<&DocumentWindow> {
    windows.iter().filter(|w| w.is_qualifying()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_detection() {
        assert!(Position::new(0, 0).is_origin());
        assert!(!Position::new(0, 5).is_origin());
        assert!(!Position::new(5, 0).is_origin());
    }

    #[test]
    fn test_document_off_origin_qualifies() {
        assert!(DocumentWindow::document(1, 0, 10).is_qualifying());
        assert!(DocumentWindow::document(1, 10, 0).is_qualifying());
    }

    #[test]
    fn test_document_at_origin_does_not_qualify() {
        assert!(!DocumentWindow::document(1, 0, 0).is_qualifying());
    }

    #[test]
    fn test_tool_window_does_not_qualify() {
        assert!(!DocumentWindow::new(1, WindowKind::Tool, 40, 40).is_qualifying());
        assert!(!DocumentWindow::new(2, WindowKind::Other, 40, 40).is_qualifying());
    }

    #[test]
    fn test_qualifying_windows_keeps_host_order() {
        let windows = vec![
            DocumentWindow::document(3, 10, 10),
            DocumentWindow::new(4, WindowKind::Tool, 10, 10),
            DocumentWindow::document(1, 0, 0),
            DocumentWindow::document(2, 5, 5),
        ];

        let ids: Vec<_> = qualifying_windows(&windows).iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![WindowId(3), WindowId(2)]);
    }

    #[test]
    fn test_window_kind_deserializes_snake_case() {
        let kind: WindowKind = serde_json::from_str("\"tool\"").unwrap();
        assert_eq!(kind, WindowKind::Tool);
    }
}
