//! Headless event output - NDJSON events describing each navigation step
//!
//! Every step of a replayed scenario produces one or more events, written as
//! newline-delimited JSON so scripts and tests can follow exactly what the
//! navigator decided.
//!
//! # Example Output
//!
//! ```json
//! {"event":"scenario_loaded","windows":3,"projects":1,"steps":2,"timestamp":1704700001000}
//! {"event":"window_activated","window":3,"title":"c.cpp","command":"jump_left","timestamp":1704700001001}
//! {"event":"tracker_changed","tracker":{"state":"holding","window":1},"timestamp":1704700001002}
//! ```

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tabnav_app::{NoOpReason, TrackerState};
use tabnav_core::prelude::*;
use tabnav_core::{Command, OpenTarget, WindowId};

/// Events emitted while replaying a scenario
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavEvent {
    /// Scenario parsed and the scripted host built
    ScenarioLoaded {
        windows: usize,
        projects: usize,
        steps: usize,
        timestamp: i64,
    },

    /// The host was asked to activate a window
    WindowActivated {
        window: WindowId,
        title: String,
        command: Option<Command>,
        timestamp: i64,
    },

    /// Focus moved because of a host notification, not a command
    FocusChanged {
        got: WindowId,
        lost: Option<WindowId>,
        timestamp: i64,
    },

    /// A window was closed by the host
    WindowClosed { window: WindowId, timestamp: i64 },

    /// A project file index was built and handed to the host
    FilesIndexed {
        count: usize,
        target: OpenTarget,
        files: Vec<String>,
        timestamp: i64,
    },

    /// A single file was opened through quick open
    FileOpened {
        path: String,
        target: OpenTarget,
        timestamp: i64,
    },

    /// A command ran but resulted in no host action
    NoOp {
        step: String,
        reason: NoOpReason,
        timestamp: i64,
    },

    /// Ping-pong memory changed
    TrackerChanged {
        tracker: TrackerState,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl NavEvent {
    /// Write this event as one JSON line to `out`
    pub fn emit_to<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// Emit this event to stdout, logging instead of failing
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.emit_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn scenario_loaded(windows: usize, projects: usize, steps: usize) -> Self {
        Self::ScenarioLoaded {
            windows,
            projects,
            steps,
            timestamp: Self::now(),
        }
    }

    pub fn window_activated(window: WindowId, title: &str, command: Option<Command>) -> Self {
        Self::WindowActivated {
            window,
            title: title.to_string(),
            command,
            timestamp: Self::now(),
        }
    }

    pub fn focus_changed(got: WindowId, lost: Option<WindowId>) -> Self {
        Self::FocusChanged {
            got,
            lost,
            timestamp: Self::now(),
        }
    }

    pub fn window_closed(window: WindowId) -> Self {
        Self::WindowClosed {
            window,
            timestamp: Self::now(),
        }
    }

    pub fn files_indexed(target: OpenTarget, files: Vec<String>) -> Self {
        Self::FilesIndexed {
            count: files.len(),
            target,
            files,
            timestamp: Self::now(),
        }
    }

    pub fn file_opened(path: &str, target: OpenTarget) -> Self {
        Self::FileOpened {
            path: path.to_string(),
            target,
            timestamp: Self::now(),
        }
    }

    pub fn no_op(step: impl Into<String>, reason: NoOpReason) -> Self {
        Self::NoOp {
            step: step.into(),
            reason,
            timestamp: Self::now(),
        }
    }

    pub fn tracker_changed(tracker: TrackerState) -> Self {
        Self::TrackerChanged {
            tracker,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(event: &NavEvent) -> serde_json::Value {
        let mut buf = Vec::new();
        event.emit_to(&mut buf).expect("emit failed");
        assert_eq!(buf.last(), Some(&b'\n'));
        serde_json::from_slice(&buf).expect("invalid JSON")
    }

    #[test]
    fn test_window_activated_serialization() {
        let value = to_value(&NavEvent::window_activated(
            WindowId(3),
            "c.cpp",
            Some(Command::JumpLeft),
        ));

        assert_eq!(value["event"], "window_activated");
        assert_eq!(value["window"], 3);
        assert_eq!(value["title"], "c.cpp");
        assert_eq!(value["command"], "jump_left");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_tracker_changed_serialization() {
        let value = to_value(&NavEvent::tracker_changed(TrackerState::Holding(WindowId(1))));

        assert_eq!(value["event"], "tracker_changed");
        assert_eq!(value["tracker"]["state"], "holding");
        assert_eq!(value["tracker"]["window"], 1);
    }

    #[test]
    fn test_files_indexed_counts_files() {
        let value = to_value(&NavEvent::files_indexed(
            OpenTarget::Other,
            vec!["App/a.cpp".to_string(), "App/b.h".to_string()],
        ));

        assert_eq!(value["event"], "files_indexed");
        assert_eq!(value["count"], 2);
        assert_eq!(value["target"], "other");
        assert_eq!(value["files"][1], "App/b.h");
    }

    #[test]
    fn test_no_op_serialization() {
        let value = to_value(&NavEvent::no_op("jump_up", NoOpReason::NoCandidates));

        assert_eq!(value["event"], "no_op");
        assert_eq!(value["step"], "jump_up");
        assert_eq!(value["reason"], "no_candidates");
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&NavEvent::error("boom".to_string(), true));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "boom");
        assert_eq!(value["fatal"], true);
    }

    #[test]
    fn test_each_event_is_one_line() {
        let mut buf = Vec::new();
        NavEvent::scenario_loaded(1, 2, 3).emit_to(&mut buf).unwrap();
        NavEvent::window_closed(WindowId(1)).emit_to(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
