//! Scripted host editor used to replay scenarios

use tabnav_app::{EditorHost, FileIndex, IndexedFile};
use tabnav_core::prelude::*;
use tabnav_core::{DocumentWindow, NodeId, OpenTarget, ProjectNode, WindowId, WindowKind};

use super::{NodeSpec, Scenario};

/// In-memory host that records every action the navigator asks for.
///
/// Like a real editor, it tracks focus and the active document separately:
/// focusing a tool window leaves the last document active.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    windows: Vec<DocumentWindow>,
    projects: Vec<ProjectNode>,
    focused: Option<WindowId>,
    active_document: Option<WindowId>,
    /// Windows activated on the navigator's request, in order
    pub activations: Vec<WindowId>,
    /// Paths of each presented file index with its target
    pub presented: Vec<(Vec<String>, OpenTarget)>,
    /// Files opened on the navigator's request
    pub opened: Vec<(String, OpenTarget)>,
}

impl ScriptedHost {
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        let mut next_id = 1;
        let projects = scenario
            .projects
            .iter()
            .map(|spec| build_node(spec, &mut next_id))
            .collect();

        let mut host = Self {
            windows: scenario.windows.iter().map(|w| w.to_window()).collect(),
            projects,
            ..Self::default()
        };

        if let Some(active) = scenario.active {
            host.focus(WindowId(active))?;
        }
        Ok(host)
    }

    pub fn window(&self, id: WindowId) -> Option<&DocumentWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// Move focus to `id`, returning the newly and previously focused windows
    pub fn focus(&mut self, id: WindowId) -> Result<(DocumentWindow, Option<DocumentWindow>)> {
        let got = self
            .window(id)
            .cloned()
            .ok_or(Error::UnknownWindow { id: id.0 })?;
        let lost = self.focused.and_then(|f| self.window(f)).cloned();

        self.focused = Some(id);
        if got.kind == WindowKind::Document {
            self.active_document = Some(id);
        }
        Ok((got, lost))
    }

    /// Remove `id` from the window list
    pub fn close(&mut self, id: WindowId) -> Result<DocumentWindow> {
        let pos = self
            .windows
            .iter()
            .position(|w| w.id == id)
            .ok_or(Error::UnknownWindow { id: id.0 })?;

        if self.focused == Some(id) {
            self.focused = None;
        }
        if self.active_document == Some(id) {
            self.active_document = None;
        }
        Ok(self.windows.remove(pos))
    }
}

impl EditorHost for ScriptedHost {
    fn windows(&self) -> Vec<DocumentWindow> {
        self.windows.clone()
    }

    fn active_document_window(&self) -> Option<WindowId> {
        self.active_document
    }

    fn projects(&self) -> Vec<ProjectNode> {
        self.projects.clone()
    }

    fn activate(&mut self, window: WindowId) -> Result<()> {
        if self.window(window).is_none() {
            return Err(Error::host(format!("window {} is not open", window)));
        }
        self.focus(window)?;
        self.activations.push(window);
        Ok(())
    }

    fn present_file_index(&mut self, index: &FileIndex, target: OpenTarget) -> Result<()> {
        let paths = index.iter().map(|f| f.path.clone()).collect();
        self.presented.push((paths, target));
        Ok(())
    }

    fn open_file(&mut self, file: &IndexedFile, target: OpenTarget) -> Result<()> {
        self.opened.push((file.path.clone(), target));
        Ok(())
    }
}

/// Assign node ids depth-first in pre-order
fn build_node(spec: &NodeSpec, next_id: &mut u64) -> ProjectNode {
    let id = NodeId(*next_id);
    *next_id += 1;
    ProjectNode {
        id,
        name: spec.name.clone(),
        children: spec
            .children
            .iter()
            .map(|child| build_node(child, next_id))
            .collect(),
    }
}
