use tracing::{
  debug,
  info,
  warn
};

use crate::api::TaskApi;
use crate::error::ApiError;
use crate::model::{
  ListId,
  Task,
  TaskList,
  TasksResponse
};
use crate::navigation::{
  self,
  NavKey
};

pub const LISTS_FETCH_FAILED: &str =
  "リストの取得に失敗しました。";
pub const TASKS_FETCH_FAILED: &str =
  "タスクの取得に失敗しました。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
  NoLists,
  ListsLoadedNoSelection,
  ListsLoadedSelected(ListId)
}

/// A task fetch the host must issue for `list_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTasks {
  pub list_id: ListId
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct KeyOutcome {
  pub prevent_default: bool,
  pub fetch:           Option<FetchTasks>
}

/// Selection and fetch state behind the home page.
///
/// Transitions are synchronous; fetches are described by the
/// [`FetchTasks`] values they return so an event-loop host can issue them.
/// Responses are applied in arrival order with no staleness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeController {
  lists:         Vec<TaskList>,
  selected:      Option<ListId>,
  tasks:         Option<Vec<Task>>,
  error_message: String
}

impl Default for HomeController {
  fn default() -> Self {
    Self::new()
  }
}

impl HomeController {
  pub fn new() -> Self {
    Self {
      lists:         Vec::new(),
      selected:      None,
      tasks:         Some(Vec::new()),
      error_message: String::new()
    }
  }

  pub fn lists(&self) -> &[TaskList] {
    &self.lists
  }

  pub fn selected(&self) -> Option<&ListId> {
    self.selected.as_ref()
  }

  pub fn tasks(&self) -> Option<&[Task]> {
    self.tasks.as_deref()
  }

  pub fn error_message(&self) -> &str {
    &self.error_message
  }

  pub fn list_ids(&self) -> Vec<ListId> {
    self
      .lists
      .iter()
      .map(|list| list.id.clone())
      .collect()
  }

  pub fn state(&self) -> ControllerState {
    match (&self.selected, self.lists.is_empty())
    {
      | (_, true) => ControllerState::NoLists,
      | (None, false) => {
        ControllerState::ListsLoadedNoSelection
      }
      | (Some(id), false) => {
        ControllerState::ListsLoadedSelected(
          id.clone()
        )
      }
    }
  }

  /// Applies the list collection response.
  ///
  /// A non-empty collection selects its first list and asks for its
  /// tasks. On failure prior state is kept.
  pub fn on_lists_loaded(
    &mut self,
    result: Result<Vec<TaskList>, ApiError>
  ) -> Option<FetchTasks> {
    match result {
      | Ok(lists) => {
        info!(
          total = lists.len(),
          "list collection loaded"
        );
        self.lists = lists;
        self.on_lists_changed()
      }
      | Err(err) => {
        warn!(error = %err, "list fetch failed");
        self.error_message =
          format!("{LISTS_FETCH_FAILED}{err}");
        None
      }
    }
  }

  fn on_lists_changed(
    &mut self
  ) -> Option<FetchTasks> {
    match self.lists.first() {
      | Some(first) => {
        let id = first.id.clone();
        Some(self.select_list(id))
      }
      | None => {
        self.selected = None;
        None
      }
    }
  }

  /// Applies a task response. Failures keep the current tasks on screen.
  pub fn on_tasks_loaded(
    &mut self,
    result: Result<TasksResponse, ApiError>
  ) {
    match result {
      | Ok(response) => {
        debug!(
          total = response
            .tasks
            .as_ref()
            .map(Vec::len),
          "tasks loaded"
        );
        self.tasks = response.tasks;
      }
      | Err(err) => {
        warn!(error = %err, "task fetch failed");
        self.error_message =
          format!("{TASKS_FETCH_FAILED}{err}");
      }
    }
  }

  pub fn select_list(
    &mut self,
    id: ListId
  ) -> FetchTasks {
    debug!(list_id = %id, "list selected");
    self.selected = Some(id.clone());
    FetchTasks { list_id: id }
  }

  /// Keyboard navigation over the lists in display order.
  ///
  /// Arrow keys move the active id without fetching; `Confirm` commits it.
  pub fn handle_key(
    &mut self,
    key: NavKey
  ) -> KeyOutcome {
    let ids = self.list_ids();
    let target = navigation::step(
      &ids,
      self.selected.as_ref(),
      key
    );

    let fetch = match (key, target) {
      | (NavKey::Confirm, Some(id)) => {
        Some(self.select_list(id))
      }
      | (_, Some(id)) => {
        debug!(list_id = %id, ?key, "list highlighted");
        self.selected = Some(id);
        None
      }
      | (_, None) => None
    };

    KeyOutcome {
      prevent_default: true,
      fetch
    }
  }

  #[tracing::instrument(skip_all)]
  pub async fn initialize<A: TaskApi>(
    &mut self,
    api: &A
  ) {
    let result = api.fetch_lists().await;
    if let Some(request) =
      self.on_lists_loaded(result)
    {
      self.run_fetch(api, request).await;
    }
  }

  pub async fn select_and_fetch<A: TaskApi>(
    &mut self,
    api: &A,
    id: ListId
  ) {
    let request = self.select_list(id);
    self.run_fetch(api, request).await;
  }

  #[tracing::instrument(skip_all, fields(list_id = %request.list_id))]
  pub async fn run_fetch<A: TaskApi>(
    &mut self,
    api: &A,
    request: FetchTasks
  ) {
    let result =
      api.fetch_tasks(&request.list_id).await;
    self.on_tasks_loaded(result);
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    TimeZone,
    Utc
  };

  use super::*;
  use crate::model::TaskId;

  fn list(id: &str, title: &str) -> TaskList {
    TaskList {
      id:    ListId::new(id),
      title: title.to_string()
    }
  }

  fn task(id: &str, done: bool) -> Task {
    Task {
      id: TaskId::new(id),
      title: format!("task {id}"),
      detail: None,
      done,
      limit: Utc
        .with_ymd_and_hms(
          2026, 3, 1, 0, 0, 0
        )
        .single()
        .expect("valid limit")
        .into()
    }
  }

  #[test]
  fn starts_with_no_lists_and_empty_tasks()
  {
    let controller = HomeController::new();
    assert_eq!(
      controller.state(),
      ControllerState::NoLists
    );
    assert_eq!(controller.tasks(), Some(&[][..]));
    assert!(controller.error_message().is_empty());
  }

  #[test]
  fn lists_arrival_selects_first_and_requests_its_tasks(
  ) {
    let mut controller = HomeController::new();
    let request = controller.on_lists_loaded(Ok(
      vec![list("1", "A"), list("2", "B")]
    ));
    assert_eq!(
      request,
      Some(FetchTasks {
        list_id: ListId::new("1")
      })
    );
    assert_eq!(
      controller.state(),
      ControllerState::ListsLoadedSelected(
        ListId::new("1")
      )
    );
  }

  #[test]
  fn empty_collection_leaves_selection_undefined(
  ) {
    let mut controller = HomeController::new();
    assert_eq!(
      controller.on_lists_loaded(Ok(vec![])),
      None
    );
    assert_eq!(controller.selected(), None);
    assert_eq!(
      controller.state(),
      ControllerState::NoLists
    );
  }

  #[test]
  fn list_failure_records_message_and_keeps_state(
  ) {
    let mut controller = HomeController::new();
    let request = controller.on_lists_loaded(Err(
      ApiError::Network("offline".to_string())
    ));
    assert_eq!(request, None);
    assert_eq!(
      controller.error_message(),
      "リストの取得に失敗しました。network error: offline"
    );
    assert!(controller.lists().is_empty());
  }

  #[test]
  fn task_failure_keeps_stale_tasks_and_success_keeps_error(
  ) {
    let mut controller = HomeController::new();
    controller.on_tasks_loaded(Ok(TasksResponse {
      tasks: Some(vec![task("a", false)])
    }));
    controller.on_tasks_loaded(Err(
      ApiError::Status {
        status: 500,
        url:    "/lists/1/tasks".to_string()
      }
    ));
    assert_eq!(
      controller.tasks().map(<[Task]>::len),
      Some(1)
    );
    assert!(controller
      .error_message()
      .starts_with(TASKS_FETCH_FAILED));

    controller.on_tasks_loaded(Ok(TasksResponse {
      tasks: Some(vec![task("b", true)])
    }));
    assert_eq!(
      controller.tasks().map(|tasks| tasks[0].id.as_str()),
      Some("b")
    );
    assert!(!controller.error_message().is_empty());
  }

  #[test]
  fn arrows_move_without_fetching_and_enter_commits(
  ) {
    let mut controller = HomeController::new();
    controller.on_lists_loaded(Ok(vec![
      list("1", "A"),
      list("2", "B"),
      list("3", "C"),
    ]));

    let up = controller.handle_key(NavKey::Previous);
    assert_eq!(
      up,
      KeyOutcome {
        prevent_default: true,
        fetch:           None
      }
    );
    assert_eq!(
      controller.selected(),
      Some(&ListId::new("3"))
    );

    let down = controller.handle_key(NavKey::Next);
    assert_eq!(down.fetch, None);
    assert_eq!(
      controller.selected(),
      Some(&ListId::new("1"))
    );

    controller.handle_key(NavKey::Next);
    let enter = controller.handle_key(NavKey::Confirm);
    assert!(enter.prevent_default);
    assert_eq!(
      enter.fetch,
      Some(FetchTasks {
        list_id: ListId::new("2")
      })
    );
  }

  #[test]
  fn keys_without_lists_do_nothing_but_still_suppress_default(
  ) {
    let mut controller = HomeController::new();
    for key in [
      NavKey::Next,
      NavKey::Previous,
      NavKey::Confirm
    ] {
      assert_eq!(
        controller.handle_key(key),
        KeyOutcome {
          prevent_default: true,
          fetch:           None
        }
      );
    }
    assert_eq!(controller.selected(), None);
  }

  #[test]
  fn late_response_for_older_selection_wins(
  ) {
    let mut controller = HomeController::new();
    controller.on_lists_loaded(Ok(vec![
      list("1", "A"),
      list("2", "B"),
    ]));
    controller.select_list(ListId::new("2"));
    controller.on_tasks_loaded(Ok(TasksResponse {
      tasks: Some(vec![task("from-2", false)])
    }));
    controller.on_tasks_loaded(Ok(TasksResponse {
      tasks: Some(vec![task("from-1", false)])
    }));
    assert_eq!(
      controller.selected(),
      Some(&ListId::new("2"))
    );
    assert_eq!(
      controller.tasks().map(|tasks| tasks[0].id.as_str()),
      Some("from-1")
    );
  }
}
