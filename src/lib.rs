//! tabnav Library
//!
//! Scenario replay for the tabnav navigation core: a scripted host editor,
//! the replay loop, and the NDJSON events it emits.

pub mod headless;
pub mod scenario;

pub use scenario::{run, RunReport, Scenario, ScriptedHost};
