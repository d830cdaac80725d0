use aquatask_core::TaskDraft;
use aquatask_shared::TaskPriority;
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  InputEvent
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

/// One keystroke-level change to a task form.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
  Title(String),
  Description(String),
  Priority(TaskPriority),
  DueDate(String)
}

impl DraftEdit {
  pub fn apply(self, draft: &mut TaskDraft) {
    match self {
      | Self::Title(title) => {
        draft.title = title
      }
      | Self::Description(text) => {
        draft.description = text
      }
      | Self::Priority(priority) => {
        draft.priority = priority
      }
      | Self::DueDate(due) => {
        draft.due_date = due
      }
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct DraftFieldsProps {
  /// Prefix for element ids so the create form and edit modal can
  /// coexist.
  pub id_prefix: AttrValue,
  pub draft:     TaskDraft,
  pub min_date:  AttrValue,
  pub on_edit:   Callback<DraftEdit>
}

#[function_component(DraftFields)]
pub fn draft_fields(
  props: &DraftFieldsProps
) -> Html {
  let id = |name: &str| {
    format!("{}-{name}", props.id_prefix)
  };

  let on_title = props.on_edit.reform(
    |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      DraftEdit::Title(input.value())
    }
  );
  let on_description = props.on_edit.reform(
    |e: InputEvent| {
      let input: HtmlTextAreaElement =
        e.target_unchecked_into();
      DraftEdit::Description(input.value())
    }
  );
  let on_priority = props.on_edit.reform(
    |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      DraftEdit::Priority(
        TaskPriority::from_key(&select.value())
          .unwrap_or_default()
      )
    }
  );
  let on_due = props.on_edit.reform(
    |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      DraftEdit::DueDate(input.value())
    }
  );

  html! {
      <>
          <div class="form-group">
              <label for={id("title")}>{ "Title" }</label>
              <input
                  id={id("title")}
                  type="text"
                  placeholder="What needs to be done?"
                  value={props.draft.title.clone()}
                  oninput={on_title}
              />
          </div>
          <div class="form-group">
              <label for={id("description")}>{ "Description" }</label>
              <textarea
                  id={id("description")}
                  placeholder="Add some details (optional)"
                  value={props.draft.description.clone()}
                  oninput={on_description}
              />
          </div>
          <div class="form-row">
              <div class="form-group">
                  <label for={id("priority")}>{ "Priority" }</label>
                  <select id={id("priority")} onchange={on_priority}>
                      {
                          for TaskPriority::all().into_iter().map(|priority| html! {
                              <option
                                  value={priority.as_key()}
                                  selected={priority == props.draft.priority}
                              >
                                  { priority.label() }
                              </option>
                          })
                      }
                  </select>
              </div>
              <div class="form-group">
                  <label for={id("due")}>{ "Due date" }</label>
                  <input
                      id={id("due")}
                      type="date"
                      min={props.min_date.clone()}
                      value={props.draft.due_date.clone()}
                      onchange={on_due}
                  />
              </div>
          </div>
      </>
  }
}
