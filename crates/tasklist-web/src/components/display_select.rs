use tasklist_core::FilterMode;
use web_sys::HtmlSelectElement;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DisplaySelectProps {
  pub mode:      FilterMode,
  pub on_change: Callback<FilterMode>
}

#[function_component(DisplaySelect)]
pub fn display_select(
  props: &DisplaySelectProps
) -> Html {
  let onchange = {
    let on_change =
      props.on_change.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      on_change.emit(
        FilterMode::from_value(
          &select.value()
        )
      );
    })
  };

  let option = |mode: FilterMode| {
    html! {
        <option value={mode.as_value()} selected={props.mode == mode}>
            { mode.label() }
        </option>
    }
  };

  html! {
      <div class="display-select-wrapper">
          <select
              class="display-select"
              aria-label="タスクの表示切り替え"
              onchange={onchange}
          >
              { option(FilterMode::Incomplete) }
              { option(FilterMode::Complete) }
          </select>
      </div>
  }
}
