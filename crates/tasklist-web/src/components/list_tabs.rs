use tasklist_core::{
  ListId,
  NavKey,
  TaskList
};
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ListTabsProps {
  pub lists:     Vec<TaskList>,
  pub selected:  Option<ListId>,
  pub on_select: Callback<ListId>,
  pub on_key:    Callback<NavKey>
}

/// Lists rendered as a keyboard-navigable listbox.
#[function_component(ListTabs)]
pub fn list_tabs(
  props: &ListTabsProps
) -> Html {
  let onkeydown = {
    let on_key = props.on_key.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if let Some(key) =
          NavKey::from_key(&e.key())
        {
          e.prevent_default();
          on_key.emit(key);
        }
      }
    )
  };

  html! {
      <ul
          class="list-tab"
          role="listbox"
          aria-label="リストの選択"
          tabindex="0"
          onkeydown={onkeydown}
      >
          {
              for props.lists.iter().map(|list| {
                  let active = props.selected.as_ref() == Some(&list.id);
                  let on_select = props.on_select.clone();
                  let id = list.id.clone();
                  html! {
                      <li
                          key={list.id.to_string()}
                          class={classes!("list-tab-item", active.then_some("active"))}
                          role="option"
                          aria-selected={active.to_string()}
                          tabindex={if active { "0" } else { "-1" }}
                          onclick={move |_| on_select.emit(id.clone())}
                      >
                          { &list.title }
                      </li>
                  }
              })
          }
      </ul>
  }
}
