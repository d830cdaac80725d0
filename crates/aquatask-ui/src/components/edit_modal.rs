use aquatask_core::TaskDraft;
use web_sys::{
  MouseEvent,
  SubmitEvent
};
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
pub struct EditModalProps {
  pub draft:     TaskDraft,
  pub min_date:  AttrValue,
  pub on_edit:   Callback<DraftEdit>,
  pub on_submit: Callback<()>,
  pub on_close:  Callback<()>
}

#[function_component(EditModal)]
pub fn edit_modal(
  props: &EditModalProps
) -> Html {
  let onsubmit = props.on_submit.reform(
    |e: SubmitEvent| e.prevent_default()
  );
  let on_overlay =
    props.on_close.reform(|_: MouseEvent| ());
  let on_close =
    props.on_close.reform(|_: MouseEvent| ());
  let on_cancel =
    props.on_close.reform(|_: MouseEvent| ());
  let keep_open =
    Callback::from(|e: MouseEvent| {
      e.stop_propagation()
    });

  html! {
      <div class="modal active" onclick={on_overlay}>
          <div class="modal-content" onclick={keep_open}>
              <div class="modal-header">
                  <h2>{ "Edit Task" }</h2>
                  <button
                      type="button"
                      class="modal-close"
                      title="Close"
                      onclick={on_close}
                  >
                      { "×" }
                  </button>
              </div>
              <form class="task-form" {onsubmit}>
                  <DraftFields
                      id_prefix="edit-task"
                      draft={props.draft.clone()}
                      min_date={props.min_date.clone()}
                      on_edit={props.on_edit.clone()}
                  />
                  <div class="modal-actions">
                      <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                          { "Cancel" }
                      </button>
                      <button type="submit" class="btn btn-primary">{ "Save Changes" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
