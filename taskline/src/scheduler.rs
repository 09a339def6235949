//! Timeline resolution over predecessor chains.
//!
//! Given projects and their nested subtasks, computes every item's start and
//! end date by propagating predecessor end dates forward from a global
//! project start date. Pure over its arguments: inputs are never mutated and
//! the returned tree shares nothing with them.

use chrono::{Days, NaiveDate};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use thiserror::Error;

use crate::config::{ResolveConfig, ResolveOrder};
use crate::models::{ItemId, Timeline, WorkItem};
use crate::predecessors::parse_predecessors;
use crate::{log_assign, log_eval, log_trace};

/// Errors that can occur during timeline resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid project start date: {0:?}")]
    InvalidStartDate(String),
    #[error("Duplicate work item id: {0}")]
    DuplicateId(ItemId),
    #[error("Circular predecessor dependency detected")]
    CircularDependency,
}

/// Resolve every item's timeline and plan-days.
///
/// Items without a fully-specified timeline start the day after the latest
/// end date among their resolvable predecessors, or on `project_start` when
/// none resolve; the end date is `start + max(plan_days, 1) - 1` (inclusive
/// counting, so a 1-day item starts and ends on the same date). Items with
/// both timeline endpoints set are kept as-is; their `plan_days` is derived
/// from the span only when it was unset (zero).
///
/// Predecessor references are looked up in a flat index over all projects
/// and subtasks combined, so references cross the project/subtask boundary
/// freely. Dangling references and unparseable tokens are ignored.
///
/// The order of projects and of each project's subtasks is preserved.
///
/// # Errors
/// * `ResolveError::DuplicateId` if two items share an id
/// * `ResolveError::CircularDependency` if `config.order` is
///   [`ResolveOrder::Dependency`] and the predecessor graph has a cycle
pub fn resolve_timelines(
    items: &[WorkItem],
    project_start: NaiveDate,
    config: &ResolveConfig,
) -> Result<Vec<WorkItem>, ResolveError> {
    let flat = flatten(items);

    let mut index: FxHashMap<ItemId, WorkItem> =
        FxHashMap::with_capacity_and_hasher(flat.len(), Default::default());
    for item in &flat {
        if index.insert(item.id, (*item).clone()).is_some() {
            return Err(ResolveError::DuplicateId(item.id));
        }
    }

    let flat_ids: Vec<ItemId> = flat.iter().map(|item| item.id).collect();
    let order = match config.order {
        ResolveOrder::InputOrder => flat_ids,
        ResolveOrder::Dependency => dependency_order(&flat_ids, &index)?,
    };
    log_trace!(config.verbosity, "resolution order: {:?}", order);

    // Resolved items are written back into the index, so items later in the
    // order observe the computed end dates of items resolved before them.
    for id in order {
        let Some(item) = index.get(&id).cloned() else {
            continue;
        };
        let resolved = resolve_item(item, project_start, config, &index);
        index.insert(id, resolved);
    }

    Ok(items.iter().map(|project| rebuild(project, &index)).collect())
}

/// Parse `raw_start` as a `YYYY-MM-DD` project start date, then resolve.
///
/// Boundary convenience for callers holding the start date as text; fails
/// fast with [`ResolveError::InvalidStartDate`] instead of propagating a
/// nonsense date into every computed timeline.
pub fn resolve_timelines_from_str(
    items: &[WorkItem],
    raw_start: &str,
    config: &ResolveConfig,
) -> Result<Vec<WorkItem>, ResolveError> {
    let project_start = NaiveDate::parse_from_str(raw_start.trim(), "%Y-%m-%d")
        .map_err(|_| ResolveError::InvalidStartDate(raw_start.to_string()))?;
    resolve_timelines(items, project_start, config)
}

/// Flatten projects and their subtasks depth-first, preserving input order.
fn flatten(items: &[WorkItem]) -> Vec<&WorkItem> {
    fn walk<'a>(items: &'a [WorkItem], out: &mut Vec<&'a WorkItem>) {
        for item in items {
            out.push(item);
            walk(&item.subtasks, out);
        }
    }
    let mut out = Vec::new();
    walk(items, &mut out);
    out
}

/// Resolve a single item against the current state of the index.
fn resolve_item(
    mut item: WorkItem,
    project_start: NaiveDate,
    config: &ResolveConfig,
    index: &FxHashMap<ItemId, WorkItem>,
) -> WorkItem {
    // A fully-specified timeline is authoritative; predecessors are ignored.
    if let (Some(start), Some(end)) = (item.timeline.start, item.timeline.end) {
        if item.plan_days == 0 || config.reconcile_plan_days {
            item.plan_days = (end - start).num_days() + 1;
        }
        log_assign!(
            config.verbosity,
            "item {}: explicit timeline {}..{} kept (plan_days={})",
            item.id,
            start,
            end,
            item.plan_days
        );
        return item;
    }

    let predecessor_ids = parse_predecessors(Some(item.predecessors.as_str()));
    log_trace!(
        config.verbosity,
        "item {}: predecessors {:?} from {:?}",
        item.id,
        predecessor_ids,
        item.predecessors
    );

    let mut latest_end: Option<NaiveDate> = None;
    for predecessor_id in predecessor_ids {
        let Some(predecessor) = index.get(&predecessor_id) else {
            log_eval!(
                config.verbosity,
                "item {}: predecessor {} not found, ignored",
                item.id,
                predecessor_id
            );
            continue;
        };
        let Some(end) = predecessor.timeline.end else {
            log_eval!(
                config.verbosity,
                "item {}: predecessor {} has no end date yet, ignored",
                item.id,
                predecessor_id
            );
            continue;
        };
        latest_end = Some(latest_end.map_or(end, |current| current.max(end)));
    }

    let start = match latest_end {
        Some(end) => end + Days::new(1),
        None => project_start,
    };
    let effective_days = item.plan_days.max(1);
    let end = start + Days::new(effective_days as u64 - 1);

    // An unset duration becomes the computed 1-day span; explicit values
    // (including out-of-model negatives) are never rewritten.
    if item.plan_days == 0 {
        item.plan_days = effective_days;
    }
    item.timeline = Timeline::new(start, end);
    log_assign!(
        config.verbosity,
        "item {}: scheduled {}..{} (plan_days={})",
        item.id,
        start,
        end,
        item.plan_days
    );
    item
}

/// Order item ids so every predecessor comes before its dependents, using
/// Kahn's algorithm. Dangling references contribute no edges. Ties are
/// broken by flat input order, keeping the result deterministic.
fn dependency_order(
    flat_ids: &[ItemId],
    index: &FxHashMap<ItemId, WorkItem>,
) -> Result<Vec<ItemId>, ResolveError> {
    let mut in_degree: FxHashMap<ItemId, usize> = flat_ids.iter().map(|&id| (id, 0)).collect();
    let mut dependents: FxHashMap<ItemId, Vec<ItemId>> = FxHashMap::default();

    for &id in flat_ids {
        let Some(item) = index.get(&id) else {
            continue;
        };
        for predecessor_id in parse_predecessors(Some(item.predecessors.as_str())) {
            // Edges only between known items; dangling references are not
            // dependencies.
            if !in_degree.contains_key(&predecessor_id) {
                continue;
            }
            if let Some(degree) = in_degree.get_mut(&id) {
                *degree += 1;
            }
            dependents.entry(predecessor_id).or_default().push(id);
        }
    }

    let mut queue: VecDeque<ItemId> = flat_ids
        .iter()
        .copied()
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let mut order: Vec<ItemId> = Vec::with_capacity(flat_ids.len());
    while let Some(id) = queue.pop_front() {
        order.push(id);
        if let Some(deps) = dependents.get(&id) {
            for &dependent in deps {
                if let Some(degree) = in_degree.get_mut(&dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(dependent);
                    }
                }
            }
        }
    }

    if order.len() != flat_ids.len() {
        return Err(ResolveError::CircularDependency);
    }

    Ok(order)
}

/// Rebuild the nested project/subtask structure from resolved index entries,
/// falling back to the original item if an id is unexpectedly absent.
fn rebuild(original: &WorkItem, index: &FxHashMap<ItemId, WorkItem>) -> WorkItem {
    let mut item = index
        .get(&original.id)
        .cloned()
        .unwrap_or_else(|| original.clone());
    item.subtasks = original
        .subtasks
        .iter()
        .map(|subtask| rebuild(subtask, index))
        .collect();
    item
}
