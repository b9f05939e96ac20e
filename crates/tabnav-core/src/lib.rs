//! # tabnav-core - Core Domain Types
//!
//! Foundation crate for tabnav. Provides the window and project tree types
//! the navigation core reasons about, the command table, the extension
//! allowlist, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, toml).
//!
//! ## Public API
//!
//! ### Windows (`window`)
//! - [`DocumentWindow`] - An open editor pane with kind and position
//! - [`WindowId`] - Opaque host-assigned window identity
//! - [`qualifying_windows()`] - Documents that take part in navigation
//!
//! ### Project Tree (`project`)
//! - [`ProjectNode`] - Container or leaf entry in a project
//!
//! ### Commands (`command`)
//! - [`Command`] - The seven navigation commands and their numeric ids
//! - [`Direction`], [`Axis`] - Jump direction and the axis it orders by
//! - [`OpenTarget`] - Primary or alternate view for opened files
//!
//! ### Extensions (`extensions`)
//! - [`is_recognized()`] - Fixed, case-sensitive extension allowlist
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tabnav_core::prelude::*;
//! ```

pub mod command;
pub mod error;
pub mod extensions;
pub mod logging;
pub mod prelude;
pub mod project;
pub mod window;

pub use command::{Axis, Command, Direction, OpenTarget, COMMAND_SET};
pub use error::{Error, Result, ResultExt};
pub use extensions::{extension_of, is_recognized, RECOGNIZED_EXTENSIONS};
pub use project::{NodeId, ProjectNode};
pub use window::{qualifying_windows, DocumentWindow, Position, WindowId, WindowKind};
