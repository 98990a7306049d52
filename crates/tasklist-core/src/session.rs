use tracing::debug;

use crate::controller::{
  FetchTasks,
  HomeController
};
use crate::error::ApiError;
use crate::model::{
  ListId,
  TaskList,
  TasksResponse
};
use crate::navigation::NavKey;

/// Inputs the home page feeds into its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
  ListsLoaded(Result<Vec<TaskList>, ApiError>),
  TasksLoaded(Result<TasksResponse, ApiError>),
  Select(ListId),
  Key(NavKey)
}

/// A task fetch tagged with the ticket that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketedFetch {
  pub ticket:  u64,
  pub request: FetchTasks
}

/// Controller plus the task fetch it most recently asked for.
///
/// Every request gets a fresh ticket, so selecting the same list twice
/// still yields two distinct outbox values and the host fetches twice.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct HomeSession {
  controller:  HomeController,
  outbox:      Option<TicketedFetch>,
  next_ticket: u64
}

impl HomeSession {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn controller(&self) -> &HomeController {
    &self.controller
  }

  /// The latest fetch request, if any was ever issued.
  pub fn outbox(&self) -> Option<&TicketedFetch> {
    self.outbox.as_ref()
  }

  /// Feeds one event through the controller and queues any fetch it asks for.
  pub fn apply(&mut self, event: HomeEvent) {
    let request = match event {
      | HomeEvent::ListsLoaded(result) => {
        self.controller.on_lists_loaded(result)
      }
      | HomeEvent::TasksLoaded(result) => {
        self.controller.on_tasks_loaded(result);
        None
      }
      | HomeEvent::Select(id) => {
        Some(self.controller.select_list(id))
      }
      | HomeEvent::Key(key) => {
        self.controller.handle_key(key).fetch
      }
    };

    if let Some(request) = request {
      self.next_ticket =
        self.next_ticket.saturating_add(1);
      debug!(
        ticket = self.next_ticket,
        list_id = %request.list_id,
        "task fetch queued"
      );
      self.outbox = Some(TicketedFetch {
        ticket: self.next_ticket,
        request
      });
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn list(id: &str) -> TaskList {
    TaskList {
      id:    ListId::new(id),
      title: id.to_uppercase()
    }
  }

  fn loaded() -> HomeSession {
    let mut session = HomeSession::new();
    session.apply(HomeEvent::ListsLoaded(Ok(
      vec![list("1"), list("2"), list("3")]
    )));
    session
  }

  fn ticketed(
    ticket: u64,
    id: &str
  ) -> TicketedFetch {
    TicketedFetch {
      ticket,
      request: FetchTasks {
        list_id: ListId::new(id)
      }
    }
  }

  #[test]
  fn fresh_session_has_empty_outbox() {
    assert_eq!(HomeSession::new().outbox(), None);
  }

  #[test]
  fn lists_arrival_queues_first_ticket_for_first_list(
  ) {
    let session = loaded();
    assert_eq!(
      session.outbox(),
      Some(&ticketed(1, "1"))
    );
    assert_eq!(
      session.controller().selected(),
      Some(&ListId::new("1"))
    );
  }

  #[test]
  fn arrow_keys_leave_outbox_untouched() {
    let mut session = loaded();
    session.apply(HomeEvent::Key(NavKey::Next));
    session.apply(HomeEvent::Key(NavKey::Previous));
    session.apply(HomeEvent::Key(NavKey::Previous));
    assert_eq!(
      session.outbox(),
      Some(&ticketed(1, "1"))
    );
    assert_eq!(
      session.controller().selected(),
      Some(&ListId::new("3"))
    );
  }

  #[test]
  fn confirm_and_click_issue_new_tickets() {
    let mut session = loaded();
    session.apply(HomeEvent::Key(NavKey::Next));
    session.apply(HomeEvent::Key(NavKey::Confirm));
    assert_eq!(
      session.outbox(),
      Some(&ticketed(2, "2"))
    );

    session.apply(HomeEvent::Select(
      ListId::new("3")
    ));
    assert_eq!(
      session.outbox(),
      Some(&ticketed(3, "3"))
    );
  }

  #[test]
  fn same_list_clicked_twice_gets_distinct_tickets(
  ) {
    let mut session = loaded();
    session.apply(HomeEvent::Select(
      ListId::new("2")
    ));
    let first = session.outbox().cloned();
    session.apply(HomeEvent::Select(
      ListId::new("2")
    ));
    let second = session.outbox().cloned();

    assert_eq!(first, Some(ticketed(2, "2")));
    assert_eq!(second, Some(ticketed(3, "2")));
    assert_ne!(first, second);
  }

  #[test]
  fn task_responses_and_list_failures_queue_nothing(
  ) {
    let mut session = loaded();
    session.apply(HomeEvent::TasksLoaded(Ok(
      TasksResponse { tasks: None }
    )));
    session.apply(HomeEvent::ListsLoaded(Err(
      ApiError::Network("offline".to_string())
    )));
    assert_eq!(
      session.outbox(),
      Some(&ticketed(1, "1"))
    );
    assert_eq!(session.controller().tasks(), None);
    assert!(!session
      .controller()
      .error_message()
      .is_empty());
  }

  #[test]
  fn empty_collection_queues_nothing() {
    let mut session = HomeSession::new();
    session.apply(HomeEvent::ListsLoaded(Ok(
      vec![]
    )));
    assert_eq!(session.outbox(), None);
  }
}
