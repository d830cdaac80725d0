use aquatask_shared::StatsDto;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
  pub stats: Option<StatsDto>
}

#[function_component(StatsBar)]
pub fn stats_bar(
  props: &StatsBarProps
) -> Html {
  let stats =
    props.stats.unwrap_or_default();
  let stat = |value: String, label: &str| {
    html! {
        <div class="stat">
            <span class="stat-value">{ value }</span>
            <span class="stat-label">{ label.to_string() }</span>
        </div>
    }
  };

  html! {
      <div class="stats">
          { stat(stats.total.to_string(), "Total") }
          { stat(stats.active.to_string(), "Active") }
          { stat(stats.completed.to_string(), "Completed") }
          { stat(format!("{:.1}%", stats.completion_rate), "Done") }
      </div>
  }
}
