use tasklist_core::ClientConfig;
use yew::{
  Html,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Switch
};

use crate::components::{
  ExternalView,
  Header
};
use crate::config::load_client_config;
use crate::home::HomePage;
use crate::routes::Route;

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_client_config);
  let config = (*config).clone();

  html! {
      <BrowserRouter>
          <Switch<Route> render={move |route: Route| switch(route, &config)} />
      </BrowserRouter>
  }
}

fn switch(
  route: Route,
  config: &ClientConfig
) -> Html {
  tracing::debug!(?route, "route matched");
  match route {
    | Route::Home => html! {
        <HomePage config={config.clone()} />
    },
    | other => html! {
        <>
            <Header />
            <ExternalView route={other} />
        </>
    }
  }
}
