//! Scenario files - scripted host sessions replayed through the navigator
//!
//! A scenario describes the windows a host editor shows, its project tree,
//! and an ordered list of steps (user commands and host notifications).
//!
//! ```toml
//! active = 1
//!
//! [[windows]]
//! id = 1
//! title = "main.cpp"
//! top = 10
//! left = 0
//!
//! [[windows]]
//! id = 2
//! title = "Output"
//! kind = "tool"
//!
//! [[projects]]
//! name = "App"
//! children = [{ name = "main.cpp" }, { name = "include", children = [{ name = "main.h" }] }]
//!
//! [[steps]]
//! type = "command"
//! command = "ping_pong"
//! ```

pub mod host;
pub mod runner;

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tabnav_core::prelude::*;
use tabnav_core::{Command, DocumentWindow, Position, WindowId, WindowKind};

pub use host::ScriptedHost;
pub use runner::{run, RunReport};

/// A window as written in a scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct WindowSpec {
    pub id: u64,
    #[serde(default)]
    pub kind: WindowKind,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub title: String,
}

impl WindowSpec {
    pub fn to_window(&self) -> DocumentWindow {
        DocumentWindow {
            id: WindowId(self.id),
            kind: self.kind,
            position: Position::new(self.top, self.left),
            title: self.title.clone(),
        }
    }
}

/// A project tree node as written in a scenario file; ids are assigned on load
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// One scripted step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// User issues a command by name
    Command { command: Command },
    /// User issues a command by numeric id
    CommandId { id: u32 },
    /// Host reports that focus moved to `got`; `lost` defaults to the focused window
    Activated {
        got: u64,
        #[serde(default)]
        lost: Option<u64>,
    },
    /// Host reports that `window` is closing
    Closing { window: u64 },
    /// User filters the project file index and opens the best match
    QuickOpen {
        query: String,
        #[serde(default)]
        other_target: bool,
    },
}

impl Step {
    /// Short label used in no-op events
    pub fn label(&self) -> String {
        match self {
            Step::Command { command } => command.to_string(),
            Step::CommandId { id } => format!("command_id:{:#06x}", id),
            Step::Activated { .. } => "activated".to_string(),
            Step::Closing { .. } => "closing".to_string(),
            Step::QuickOpen { query, .. } => format!("quick_open:{}", query),
        }
    }
}

/// A complete scripted session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    /// Window focused when the session starts
    #[serde(default)]
    pub active: Option<u64>,
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
    #[serde(default)]
    pub projects: Vec<NodeSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Read and validate a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::scenario_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let scenario = Self::parse(&content)?;
        debug!(
            "Loaded scenario {:?}: {} windows, {} steps",
            path,
            scenario.windows.len(),
            scenario.steps.len()
        );
        Ok(scenario)
    }

    /// Parse and validate scenario TOML
    pub fn parse(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reject duplicate window ids and references to windows that never existed
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for window in &self.windows {
            if !ids.insert(window.id) {
                return Err(Error::scenario(format!(
                    "duplicate window id {}",
                    window.id
                )));
            }
        }

        let check = |id: u64| {
            if ids.contains(&id) {
                Ok(())
            } else {
                Err(Error::UnknownWindow { id })
            }
        };

        if let Some(active) = self.active {
            check(active)?;
        }

        for step in &self.steps {
            match step {
                Step::Activated { got, lost } => {
                    check(*got)?;
                    if let Some(lost) = lost {
                        check(*lost)?;
                    }
                }
                Step::Closing { window } => check(*window)?,
                Step::Command { .. } | Step::CommandId { .. } | Step::QuickOpen { .. } => {}
            }
        }

        Ok(())
    }
}
