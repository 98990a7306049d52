use tasklist_core::route::AppRoute;
use yew_router::Routable;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/list/new")]
  NewList,
  #[at("/lists/:list_id/edit")]
  EditList { list_id: String },
  #[at("/task/new")]
  NewTask,
  #[at("/lists/:list_id/tasks/:task_id")]
  TaskDetail {
    list_id: String,
    task_id: String
  },
  #[not_found]
  #[at("/404")]
  NotFound
}

/// Router target for a core route.
///
/// The link is recognized from [`AppRoute::path`], so the router sees the
/// same encoded segments the core produces.
impl From<&AppRoute> for Route {
  fn from(route: &AppRoute) -> Self {
    let path = route.path();
    Route::recognize(&path).unwrap_or_else(|| {
      tracing::warn!(%path, "unroutable link");
      Route::NotFound
    })
  }
}
