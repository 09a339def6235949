//! Timeline scheduling core for work item tracking dashboards.
//!
//! Resolves start and end dates for projects and their subtasks by walking
//! predecessor chains and propagating end dates forward from a global
//! project start date. UI collaborators call [`resolve_timelines`] with
//! plain data on every edit and store the returned tree as the new state.

mod config;
pub mod logging;
mod models;
pub mod predecessors;
pub mod scheduler;
pub mod tracker;

pub use config::{ResolveConfig, ResolveOrder};
pub use models::{ItemId, Timeline, WorkItem};
pub use predecessors::parse_predecessors;
pub use scheduler::{resolve_timelines, resolve_timelines_from_str, ResolveError};
pub use tracker::ReferenceTracker;
