use aquatask_core::CardIntent;
use web_sys::{
  Element,
  MouseEvent
};
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskRegionProps {
  /// Escaped markup produced by the task list projection.
  pub markup:    AttrValue,
  pub on_intent: Callback<CardIntent>
}

fn intent_for(
  event: &MouseEvent
) -> Option<CardIntent> {
  let target: Element =
    event.target_dyn_into()?;
  let affordance = target
    .closest("[data-action]")
    .ok()
    .flatten()?;
  CardIntent::from_attributes(
    &affordance.get_attribute("data-action")?,
    &affordance
      .get_attribute("data-task-id")?
  )
}

/// Hosts the projected cards and turns clicks on their buttons into
/// [`CardIntent`]s.
#[function_component(TaskRegion)]
pub fn task_region(
  props: &TaskRegionProps
) -> Html {
  let onclick = {
    let on_intent = props.on_intent.clone();
    Callback::from(move |e: MouseEvent| {
      if let Some(intent) = intent_for(&e) {
        on_intent.emit(intent);
      }
    })
  };

  html! {
      <section class="tasks-section" {onclick}>
          { Html::from_html_unchecked(props.markup.clone()) }
      </section>
  }
}
