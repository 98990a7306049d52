use yew::{
  Html,
  function_component,
  html
};

#[function_component(Header)]
pub fn header() -> Html {
  html! {
      <header class="header">
          <h1>{ "Todoアプリ" }</h1>
      </header>
  }
}
