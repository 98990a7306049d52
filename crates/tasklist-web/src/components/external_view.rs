use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ExternalViewProps {
  pub route: Route
}

/// Stand-in for the create/edit/detail screens served elsewhere.
#[function_component(ExternalView)]
pub fn external_view(
  props: &ExternalViewProps
) -> Html {
  let title = match &props.route {
    | Route::NewList => "リスト新規作成",
    | Route::EditList { .. } => {
      "リスト編集"
    }
    | Route::NewTask => "タスク新規作成",
    | Route::TaskDetail { .. } => {
      "タスク詳細"
    }
    | Route::Home | Route::NotFound => {
      "ページが見つかりません"
    }
  };

  html! {
      <main class="external-view">
          <h2>{ title }</h2>
          <p>{ "この画面はこのクライアントには含まれていません。" }</p>
          <Link<Route> to={Route::Home}>{ "リスト一覧へ戻る" }</Link<Route>>
      </main>
  }
}
