use aquatask_core::TaskDraft;
use web_sys::SubmitEvent;
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  DraftEdit,
  DraftFields
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub draft:     TaskDraft,
  pub min_date:  AttrValue,
  pub on_edit:   Callback<DraftEdit>,
  pub on_submit: Callback<()>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let onsubmit = props.on_submit.reform(
    |e: SubmitEvent| e.prevent_default()
  );

  html! {
      <section class="task-form-section">
          <form class="task-form" {onsubmit}>
              <DraftFields
                  id_prefix="new-task"
                  draft={props.draft.clone()}
                  min_date={props.min_date.clone()}
                  on_edit={props.on_edit.clone()}
              />
              <button type="submit" class="btn btn-primary">{ "Add Task" }</button>
          </form>
      </section>
  }
}
