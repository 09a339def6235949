//! Core data types for the timeline scheduling system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Work item identifier, the join key for predecessor references.
pub type ItemId = i64;

/// Start/end date pair for a work item.
///
/// Either endpoint may be unset. A fully-specified timeline is authoritative:
/// the scheduler keeps it as-is and never recomputes it from predecessors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Timeline {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Both endpoints set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Inclusive span in calendar days (a single-day timeline spans 1 day).
    /// `None` unless both endpoints are set.
    pub fn span_days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_days() + 1),
            _ => None,
        }
    }
}

/// A project or subtask with scheduling fields.
///
/// Scheduling-relevant fields are first-class typed members; UI-only extras
/// (color, rating, attachments, ...) round-trip through the flattened
/// `decorations` value without widening the scheduler's contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub timeline: Timeline,
    /// Duration in calendar days. Zero means "unset"; the scheduler fills it
    /// in when it computes or derives a timeline.
    #[serde(default)]
    pub plan_days: i64,
    /// Free-text predecessor ids, separated by commas and/or whitespace.
    #[serde(default)]
    pub predecessors: String,
    #[serde(default)]
    pub subtasks: Vec<WorkItem>,
    /// UI-only fields, preserved verbatim.
    #[serde(flatten)]
    pub decorations: serde_json::Value,
}

impl WorkItem {
    /// Create a new item with no timeline and no duration, the state a
    /// freshly-added dashboard row starts in.
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            timeline: Timeline::default(),
            plan_days: 0,
            predecessors: String::new(),
            subtasks: Vec::new(),
            decorations: serde_json::json!({}),
        }
    }

    /// Set an explicit timeline.
    pub fn with_timeline(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.timeline = Timeline::new(start, end);
        self
    }

    /// Set the plan-days duration.
    pub fn with_plan_days(mut self, days: i64) -> Self {
        self.plan_days = days;
        self
    }

    /// Set the free-text predecessor field.
    pub fn with_predecessors(mut self, raw: impl Into<String>) -> Self {
        self.predecessors = raw.into();
        self
    }

    /// Append a subtask.
    pub fn with_subtask(mut self, subtask: WorkItem) -> Self {
        self.subtasks.push(subtask);
        self
    }
}
