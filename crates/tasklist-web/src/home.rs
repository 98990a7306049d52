use std::rc::Rc;

use chrono::Utc;
use gloo::console::log;
use tasklist_core::display::visible_tasks;
use tasklist_core::route::AppRoute;
use tasklist_core::{
  ClientConfig,
  FilterMode,
  HomeEvent,
  HomeSession,
  ListId,
  NavKey,
  TaskApi
};
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};
use yew_router::prelude::Link;

use crate::api::HttpApi;
use crate::components::{
  DisplaySelect,
  Header,
  ListTabs,
  TaskItems
};
use crate::routes::Route;

#[derive(Clone, Default, PartialEq)]
pub struct HomeState(HomeSession);

impl Reducible for HomeState {
  type Action = HomeEvent;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    next.0.apply(action);
    Rc::new(next)
  }
}

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
  pub config: ClientConfig
}

#[function_component(HomePage)]
pub fn home_page(
  props: &HomePageProps
) -> Html {
  let state = use_reducer(HomeState::default);
  let mode = use_state(FilterMode::default);

  {
    let dispatcher = state.dispatcher();
    let api = HttpApi::new(props.config.clone());
    use_effect_with((), move |_| {
      ui_debug(
        "home.mounted",
        "requesting list collection"
      );
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = api.fetch_lists().await;
          dispatcher.dispatch(
            HomeEvent::ListsLoaded(result)
          );
        }
      );
      || ()
    });
  }

  {
    let dispatcher = state.dispatcher();
    let api = HttpApi::new(props.config.clone());
    use_effect_with(
      state.0.outbox().cloned(),
      move |outbox| {
        if let Some(fetch) = outbox.clone() {
          let request = fetch.request;
          tracing::debug!(
            ticket = fetch.ticket,
            list_id = %request.list_id,
            "issuing task fetch"
          );
          wasm_bindgen_futures::spawn_local(
            async move {
              let result = api
                .fetch_tasks(&request.list_id)
                .await;
              dispatcher.dispatch(
                HomeEvent::TasksLoaded(result)
              );
            }
          );
        }
        || ()
      }
    );
  }

  let controller = state.0.controller();
  let on_select = {
    let state = state.clone();
    Callback::from(move |id: ListId| {
      state.dispatch(HomeEvent::Select(id));
    })
  };
  let on_key = {
    let state = state.clone();
    Callback::from(move |key: NavKey| {
      state.dispatch(HomeEvent::Key(key));
    })
  };
  let on_mode = {
    let mode = mode.clone();
    Callback::from(move |next: FilterMode| {
      ui_debug("home.filter", next.as_value());
      mode.set(next);
    })
  };

  let entries = controller.tasks().map(|_| {
    visible_tasks(
      controller.tasks(),
      *mode,
      controller.selected(),
      Utc::now(),
      &props.config.timezone
    )
  });

  let edit_link = match controller.selected() {
    | Some(id) => html! {
        <Link<Route> to={Route::from(&AppRoute::EditList(id.clone()))}>
            { "選択中のリストを編集" }
        </Link<Route>>
    },
    | None => html! {
        <span class="link-disabled">{ "選択中のリストを編集" }</span>
    }
  };

  html! {
      <div>
          <Header />
          <main class="taskList">
              <p class="error-message">{ controller.error_message() }</p>
              <div>
                  <div class="list-header">
                      <h2>{ "リスト一覧" }</h2>
                      <div class="list-menu">
                          <p>
                              <Link<Route> to={Route::NewList}>{ "リスト新規作成" }</Link<Route>>
                          </p>
                          <p>{ edit_link }</p>
                      </div>
                  </div>
                  <ListTabs
                      lists={controller.lists().to_vec()}
                      selected={controller.selected().cloned()}
                      on_select={on_select}
                      on_key={on_key}
                  />
                  <div class="tasks">
                      <div class="tasks-header">
                          <h2>{ "タスク一覧" }</h2>
                          <Link<Route> to={Route::NewTask}>{ "タスク新規作成" }</Link<Route>>
                      </div>
                      <DisplaySelect mode={*mode} on_change={on_mode} />
                      <TaskItems entries={entries} mode={*mode} />
                  </div>
              </div>
          </main>
      </div>
  }
}

fn ui_debug(event: &str, detail: &str) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
