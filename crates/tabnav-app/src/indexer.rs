//! Project file indexer.
//!
//! Walks the host's project tree and collects every node whose name carries
//! a recognized extension into a flat [`FileIndex`] for quick access.
//!
//! A node is tested twice: once before descending (leaves only) and once
//! after all of its children have been visited (any node). The second test
//! is what lets a container such as `assets.png` show up next to its
//! recognized leaves. The index is a set, so a leaf accepted by both tests
//! appears once.

use serde::Serialize;
use std::collections::HashSet;
use tabnav_core::prelude::*;
use tabnav_core::{is_recognized, NodeId, ProjectNode};

use crate::fuzzy::fuzzy_filter;

/// A project node accepted into the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedFile {
    pub id: NodeId,
    pub name: String,
    /// Node names from the project root down to this node, joined with `/`
    pub path: String,
}

/// Set of accepted nodes, unique by [`NodeId`], in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    entries: Vec<IndexedFile>,
    seen: HashSet<NodeId>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `file` unless a node with the same id is already present.
    ///
    /// Returns whether the file was newly added.
    pub fn insert(&mut self, file: IndexedFile) -> bool {
        if !self.seen.insert(file.id) {
            return false;
        }
        self.entries.push(file);
        true
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.seen.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedFile> {
        self.entries.iter()
    }

    /// Ids of every indexed node, for membership comparisons
    pub fn ids(&self) -> HashSet<NodeId> {
        self.seen.clone()
    }

    /// Entries ranked by fuzzy match of `query` against the file name.
    ///
    /// An empty query returns every entry in index order.
    pub fn filter(&self, query: &str) -> Vec<&IndexedFile> {
        let names: Vec<String> = self.entries.iter().map(|f| f.name.clone()).collect();
        fuzzy_filter(query, &names)
            .into_iter()
            .map(|i| &self.entries[i])
            .collect()
    }

    /// Best match for `query`, if any entry matches at all
    pub fn best_match(&self, query: &str) -> Option<&IndexedFile> {
        self.filter(query).into_iter().next()
    }
}

/// Index one subtree into `index`.
pub fn index_node(node: &ProjectNode, index: &mut FileIndex) {
    walk(node, "", index);
}

/// Build a fresh index over every item of every top-level project.
///
/// The project nodes themselves are collection roots: only their items are
/// tested, but the project name still prefixes each indexed path.
pub fn index_projects(projects: &[ProjectNode]) -> FileIndex {
    let mut index = FileIndex::new();
    for project in projects {
        for item in &project.children {
            walk(item, &project.name, &mut index);
        }
    }
    debug!(
        "Indexed {} files from {} projects",
        index.len(),
        projects.len()
    );
    index
}

fn walk(node: &ProjectNode, parent_path: &str, index: &mut FileIndex) {
    let path = if parent_path.is_empty() {
        node.name.clone()
    } else {
        format!("{}/{}", parent_path, node.name)
    };

    if node.is_leaf() && is_recognized(&node.name) {
        accept(node, &path, index);
    }

    for child in &node.children {
        walk(child, &path, index);
    }

    if is_recognized(&node.name) {
        accept(node, &path, index);
    }
}

fn accept(node: &ProjectNode, path: &str, index: &mut FileIndex) {
    let added = index.insert(IndexedFile {
        id: node.id,
        name: node.name.clone(),
        path: path.to_string(),
    });
    if added {
        trace!("Indexed {}", path);
    }
}
