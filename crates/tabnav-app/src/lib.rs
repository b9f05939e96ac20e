//! tabnav-app - Navigation decisions and command dispatch for tabnav
//!
//! This crate holds the decision logic behind the navigation commands: the
//! activation tracker used by ping-pong, the spatial jump resolver, the
//! project file indexer with its quick-access filter, and the [`Navigator`]
//! context object that ties them to a host editor through [`EditorHost`].

pub mod fuzzy;
pub mod host;
pub mod indexer;
pub mod jump;
pub mod navigator;
pub mod tracker;

pub use host::EditorHost;
pub use indexer::{index_node, index_projects, FileIndex, IndexedFile};
pub use navigator::{Navigator, NoOpReason, Outcome};
pub use tracker::{ActivationTracker, TrackerState};
