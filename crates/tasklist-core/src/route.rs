use percent_encoding::{
  AsciiSet,
  NON_ALPHANUMERIC,
  utf8_percent_encode
};

use crate::model::{
  ListId,
  TaskId
};

/// Everything but the RFC 3986 unreserved characters, the same set the
/// router applies to its own path parameters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'.')
  .remove(b'_')
  .remove(b'~');

pub fn encode_segment(
  raw: &str
) -> String {
  utf8_percent_encode(raw, PATH_SEGMENT)
    .to_string()
}

/// Client-side routes the home page links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
  Home,
  NewList,
  EditList(ListId),
  NewTask,
  TaskDetail {
    list_id: ListId,
    task_id: TaskId
  }
}

impl AppRoute {
  pub fn path(&self) -> String {
    match self {
      | AppRoute::Home => "/".to_string(),
      | AppRoute::NewList => {
        "/list/new".to_string()
      }
      | AppRoute::EditList(id) => {
        format!(
          "/lists/{}/edit",
          encode_segment(id.as_str())
        )
      }
      | AppRoute::NewTask => {
        "/task/new".to_string()
      }
      | AppRoute::TaskDetail {
        list_id,
        task_id
      } => format!(
        "/lists/{}/tasks/{}",
        encode_segment(list_id.as_str()),
        encode_segment(task_id.as_str())
      )
    }
  }
}
