//! Configuration types for timeline resolution.

use crate::logging::VERBOSITY_SILENT;

/// Order in which work items are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolveOrder {
    /// Single pass in flat input order: a predecessor that appears later in
    /// the list and has no explicit timeline contributes nothing to earlier
    /// dependents, which fall back to the project start date.
    #[default]
    InputOrder,
    /// Resolve in dependency order (topological sort over the predecessor
    /// graph), so every predecessor's end date is known before its
    /// dependents are placed. Cycles are rejected.
    Dependency,
}

/// Configuration for timeline resolution.
#[derive(Clone, Debug)]
pub struct ResolveConfig {
    /// Resolution order strategy.
    pub order: ResolveOrder,
    /// Recompute `plan_days` from the timeline span even when both were set
    /// explicitly. Off by default: inconsistent pairs are kept as given so
    /// the UI can surface the discrepancy.
    pub reconcile_plan_days: bool,
    /// Logging verbosity (0 = silent).
    pub verbosity: u8,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            order: ResolveOrder::default(),
            reconcile_plan_days: false,
            verbosity: VERBOSITY_SILENT,
        }
    }
}
