use aquatask_core::view::FilterButton;
use aquatask_shared::TaskFilter;
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub buttons:    Vec<FilterButton>,
  pub refreshing: bool,
  pub on_filter:  Callback<TaskFilter>,
  pub on_refresh: Callback<()>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let on_refresh =
    props.on_refresh.reform(|_: MouseEvent| ());

  html! {
      <div class="filter-bar">
          <div class="filters">
              {
                  for props.buttons.iter().map(|button| {
                      let filter = button.filter;
                      let onclick =
                          props.on_filter.reform(move |_: MouseEvent| filter);
                      html! {
                          <button
                              type="button"
                              class={classes!(
                                  "filter-btn",
                                  button.active.then_some("active")
                              )}
                              data-filter={filter.as_query()}
                              {onclick}
                          >
                              { button.label }
                          </button>
                      }
                  })
              }
          </div>
          <button
              id="refresh-btn"
              type="button"
              class={classes!(
                  "refresh-btn",
                  props.refreshing.then_some("spinning")
              )}
              title="Refresh (Ctrl+R)"
              disabled={props.refreshing}
              onclick={on_refresh}
          >
              { "⟳" }
          </button>
      </div>
  }
}
