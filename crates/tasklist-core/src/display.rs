use chrono::{
  DateTime,
  Utc
};
use chrono_tz::Tz;

use crate::datetime::{
  format_deadline,
  format_deadline_long,
  format_remaining
};
use crate::model::{
  ListId,
  Task,
  TaskId
};
use crate::route::AppRoute;

pub const DONE_LABEL: &str = "完了";
pub const TODO_LABEL: &str = "未完了";

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub enum FilterMode {
  #[default]
  Incomplete,
  Complete
}

impl FilterMode {
  /// Parses the `<select>` value; anything but `done` shows open tasks.
  pub fn from_value(value: &str) -> Self {
    match value {
      | "done" => FilterMode::Complete,
      | _ => FilterMode::Incomplete
    }
  }

  pub fn as_value(self) -> &'static str {
    match self {
      | FilterMode::Incomplete => "todo",
      | FilterMode::Complete => "done"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | FilterMode::Incomplete => TODO_LABEL,
      | FilterMode::Complete => DONE_LABEL
    }
  }

  pub fn matches(self, task: &Task) -> bool {
    task.done == (self == FilterMode::Complete)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
  pub task_id:       TaskId,
  pub title:         String,
  pub status_label:  &'static str,
  pub deadline:      String,
  pub deadline_long: String,
  pub remaining:     String,
  pub route:         Option<AppRoute>
}

/// Splits `tasks` into `(incomplete, complete)` keeping order.
pub fn partition(
  tasks: &[Task]
) -> (Vec<&Task>, Vec<&Task>) {
  tasks.iter().partition(|task| !task.done)
}

/// Visible entries for `mode`, in collection order.
pub fn visible_tasks(
  tasks: Option<&[Task]>,
  mode: FilterMode,
  selected: Option<&ListId>,
  now: DateTime<Utc>,
  tz: &Tz
) -> Vec<TaskEntry> {
  let Some(tasks) = tasks else {
    return Vec::new();
  };

  tasks
    .iter()
    .filter(|task| mode.matches(task))
    .map(|task| {
      let limit = task.limit.resolve(tz);
      TaskEntry {
        task_id:       task.id.clone(),
        title:         task.title.clone(),
        status_label:  if task.done {
          DONE_LABEL
        } else {
          TODO_LABEL
        },
        deadline:      format_deadline(
          limit, tz
        ),
        deadline_long: format_deadline_long(
          limit, tz
        ),
        remaining:     format_remaining(
          limit, now
        ),
        route:         selected.map(|list_id| {
          AppRoute::TaskDetail {
            list_id: list_id.clone(),
            task_id: task.id.clone()
          }
        })
      }
    })
    .collect()
}
