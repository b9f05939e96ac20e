//! Command dispatcher.
//!
//! [`Navigator`] is the context object the host integration constructs once
//! and keeps for the lifetime of the editor session. It owns the activation
//! tracker, receives forwarded host notifications, and maps each
//! [`Command`] to one navigation decision followed by at most one host
//! action.

use serde::Serialize;
use tabnav_core::prelude::*;
use tabnav_core::{Command, Direction, DocumentWindow, OpenTarget, WindowId};

use crate::host::EditorHost;
use crate::indexer::index_projects;
use crate::jump;
use crate::tracker::{ActivationTracker, TrackerState};

/// Why a command ended without asking the host to do anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    /// No navigable document window to move to
    NoCandidates,
    /// The active window is not one of the navigable documents
    ActiveWindowNotFound,
    /// Quick-open query matched no indexed file
    NoMatch,
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Activated { window: WindowId },
    FilesIndexed { count: usize, target: OpenTarget },
    FileOpened { path: String, target: OpenTarget },
    NoOp { reason: NoOpReason },
}

impl Outcome {
    fn no_op(reason: NoOpReason) -> Self {
        Outcome::NoOp { reason }
    }

    /// Window the host was asked to activate, if any
    pub fn activated(&self) -> Option<WindowId> {
        match self {
            Outcome::Activated { window } => Some(*window),
            _ => None,
        }
    }
}

/// Navigation context shared by every command invocation
#[derive(Debug, Default)]
pub struct Navigator {
    tracker: ActivationTracker,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.state()
    }

    /// Forwarded "window activated" notification
    pub fn on_window_activated(&mut self, got: &DocumentWindow, lost: Option<&DocumentWindow>) {
        self.tracker.on_activated(got, lost);
    }

    /// Forwarded "window closing" notification
    pub fn on_window_closing(&mut self, window: WindowId) {
        self.tracker.on_closing(window);
    }

    /// Execute a command received by numeric id
    pub fn execute_id<H: EditorHost>(&mut self, id: u32, host: &mut H) -> Result<Outcome> {
        let command = Command::from_id(id)?;
        self.execute(command, host)
    }

    #[instrument(level = "debug", skip(self, host))]
    pub fn execute<H: EditorHost>(&mut self, command: Command, host: &mut H) -> Result<Outcome> {
        let outcome = match command {
            Command::PingPong => self.ping_pong(host)?,
            Command::JumpLeft => self.jump(Direction::Left, host)?,
            Command::JumpRight => self.jump(Direction::Right, host)?,
            Command::JumpUp => self.jump(Direction::Up, host)?,
            Command::JumpDown => self.jump(Direction::Down, host)?,
            Command::OpenProjectFile => self.open_project_file(OpenTarget::Primary, host)?,
            Command::OpenProjectFileInOtherTarget => {
                self.open_project_file(OpenTarget::Other, host)?
            }
        };
        debug!("{} -> {:?}", command, outcome);
        Ok(outcome)
    }

    /// Index the projects and open the file best matching `query`
    pub fn quick_open<H: EditorHost>(
        &mut self,
        query: &str,
        target: OpenTarget,
        host: &mut H,
    ) -> Result<Outcome> {
        let index = index_projects(&host.projects());
        let Some(file) = index.best_match(query) else {
            debug!("Quick open {:?}: no match among {} files", query, index.len());
            return Ok(Outcome::no_op(NoOpReason::NoMatch));
        };

        host.open_file(file, target)
            .with_context(|| format!("opening {}", file.path))?;
        Ok(Outcome::FileOpened {
            path: file.path.clone(),
            target,
        })
    }

    fn jump<H: EditorHost>(&mut self, direction: Direction, host: &mut H) -> Result<Outcome> {
        let windows = host.windows();
        let current = host.active_document_window();

        match jump::resolve(direction, &windows, current) {
            Some(window) => activate(host, window),
            None if windows.iter().any(DocumentWindow::is_qualifying) => {
                Ok(Outcome::no_op(NoOpReason::ActiveWindowNotFound))
            }
            None => Ok(Outcome::no_op(NoOpReason::NoCandidates)),
        }
    }

    fn ping_pong<H: EditorHost>(&mut self, host: &mut H) -> Result<Outcome> {
        let windows = host.windows();
        let current = host.active_document_window();

        match self.tracker.ping_pong(&windows, current) {
            Some(window) => activate(host, window),
            None => Ok(Outcome::no_op(NoOpReason::NoCandidates)),
        }
    }

    fn open_project_file<H: EditorHost>(
        &mut self,
        target: OpenTarget,
        host: &mut H,
    ) -> Result<Outcome> {
        let index = index_projects(&host.projects());
        host.present_file_index(&index, target)
            .context("presenting project file index")?;
        Ok(Outcome::FilesIndexed {
            count: index.len(),
            target,
        })
    }
}

fn activate<H: EditorHost>(host: &mut H, window: WindowId) -> Result<Outcome> {
    host.activate(window)
        .with_context(|| format!("activating window {}", window))?;
    Ok(Outcome::Activated { window })
}
