//! Display orderings for task lists.
//!
//! Each ordering is a strict total order: ties always fall through to the
//! ascending task id, so a sorted listing is deterministic for any input.

use std::cmp::Ordering;

use crate::date::NullDate;
use crate::model::Task;

/// The three orderings the list command offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Prioritized tasks first, rank ascending ("A" highest); the
    /// unprioritized tail is ordered by id.
    #[default]
    Priority,
    Created,
    Due,
}

/// Sorts tasks in place by the given ordering.
pub fn sort_tasks(tasks: &mut [Task], order: SortOrder) {
    match order {
        SortOrder::Priority => tasks.sort_by(by_priority),
        SortOrder::Created => tasks.sort_by(by_created_date),
        SortOrder::Due => tasks.sort_by(by_due_date),
    }
}

/// Compares by creation date. Tasks without one sort first.
pub fn by_created_date(a: &Task, b: &Task) -> Ordering {
    cmp_dates(a.creation_date, b.creation_date, a.id, b.id)
}

/// Compares by due date. Tasks without one sort first.
pub fn by_due_date(a: &Task, b: &Task) -> Ordering {
    cmp_dates(a.due_date, b.due_date, a.id, b.id)
}

/// Compares by priority rank. Zero is the unprioritized sentinel and sorts
/// after every real rank.
pub fn by_priority(a: &Task, b: &Task) -> Ordering {
    match (a.priority, b.priority) {
        (0, 0) => a.id.cmp(&b.id),
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        (x, y) => x.cmp(&y).then(a.id.cmp(&b.id)),
    }
}

fn cmp_dates(a: NullDate, b: NullDate, a_id: u64, b_id: u64) -> Ordering {
    match (a.date(), b.date()) {
        (None, None) => a_id.cmp(&b_id),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y).then(a_id.cmp(&b_id)),
    }
}
