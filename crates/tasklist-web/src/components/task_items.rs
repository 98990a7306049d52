use tasklist_core::{
  FilterMode,
  TaskEntry
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct TaskItemsProps {
  pub entries: Option<Vec<TaskEntry>>,
  pub mode:    FilterMode
}

#[function_component(TaskItems)]
pub fn task_items(
  props: &TaskItemsProps
) -> Html {
  let Some(entries) = &props.entries else {
    return html! {};
  };
  let mode = props.mode;

  html! {
      <ul>
          {
              for entries.iter().map(|entry| html! {
                  <li key={entry.task_id.to_string()} class="task-item">
                      { entry_link(entry, entry_body(entry, mode)) }
                  </li>
              })
          }
      </ul>
  }
}

fn entry_link(
  entry: &TaskEntry,
  body: Html
) -> Html {
  match &entry.route {
    | Some(route) => html! {
        <Link<Route> to={Route::from(route)} classes="task-item-link">
            { body }
        </Link<Route>>
    },
    | None => html! {
        <div class="task-item-link">{ body }</div>
    }
  }
}

fn entry_body(
  entry: &TaskEntry,
  mode: FilterMode
) -> Html {
  let times = match mode {
    | FilterMode::Incomplete => html! {
        <>
            <strong>{ "期限日時: " }</strong>
            { &entry.deadline }
            <br />
            <strong>{ "残り日時: " }</strong>
            { &entry.remaining }
        </>
    },
    | FilterMode::Complete => html! {
        { &entry.deadline_long }
    }
  };

  html! {
      <>
          { &entry.title }
          <br />
          { entry.status_label }
          <br />
          { times }
      </>
  }
}
