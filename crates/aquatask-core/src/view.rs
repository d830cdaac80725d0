use aquatask_shared::{
  TaskDto,
  TaskFilter,
  TaskId
};

use crate::markup::Element;

pub const DEFAULT_STAGGER_MS: u32 = 50;

pub const EMPTY_STATE_TEXT: &str =
  "No tasks yet. Add one above to get started.";

/// A click on a card affordance, decoded from `data-action` and
/// `data-task-id`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum CardIntent {
  Toggle(TaskId),
  Edit(TaskId),
  Delete(TaskId)
}

impl CardIntent {
  pub fn action(self) -> &'static str {
    match self {
      | Self::Toggle(_) => "toggle",
      | Self::Edit(_) => "edit",
      | Self::Delete(_) => "delete"
    }
  }

  pub fn task_id(self) -> TaskId {
    match self {
      | Self::Toggle(id)
      | Self::Edit(id)
      | Self::Delete(id) => id
    }
  }

  pub fn from_attributes(
    action: &str,
    task_id: &str
  ) -> Option<Self> {
    let id = task_id.trim().parse().ok()?;
    match action {
      | "toggle" => Some(Self::Toggle(id)),
      | "edit" => Some(Self::Edit(id)),
      | "delete" => Some(Self::Delete(id)),
      | _ => None
    }
  }
}

/// Inputs for one full render of the task region. Nothing is retained
/// between renders.
#[derive(Debug, Clone, Copy)]
pub struct TaskListProjection<'a> {
  pub tasks:      &'a [TaskDto],
  pub editing:    Option<TaskId>,
  pub removing:   Option<TaskId>,
  pub stagger_ms: u32
}

impl<'a> TaskListProjection<'a> {
  pub fn new(tasks: &'a [TaskDto]) -> Self {
    Self {
      tasks,
      editing: None,
      removing: None,
      stagger_ms: DEFAULT_STAGGER_MS
    }
  }

  pub fn render(&self) -> Element {
    let region = Element::new("div")
      .classes(["tasks-container"]);

    if self.tasks.is_empty() {
      return region.child(
        Element::new("div")
          .classes(["empty-state", "visible"])
          .text(EMPTY_STATE_TEXT)
      );
    }

    self.tasks.iter().enumerate().fold(
      region,
      |region, (index, task)| {
        region.child(self.card(index, task))
      }
    )
  }

  fn card(
    &self,
    index: usize,
    task: &TaskDto
  ) -> Element {
    let id = task.id.to_string();
    let removing = self.removing == Some(task.id);
    // The slide-out must start at once, not after the entry stagger.
    let delay_ms = if removing {
      0
    } else {
      u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(
          self.stagger_ms
        ))
    };

    let content = Element::new("div")
      .classes(["task-content"])
      .child(
        Element::new("div")
          .classes(["task-title"])
          .text(task.title.as_str())
      )
      .maybe_child(
        task.description_text().map(|text| {
          Element::new("div")
            .classes(["task-description"])
            .text(text)
        })
      )
      .child(meta(task));

    let header = Element::new("div")
      .classes(["task-header"])
      .child(
        affordance(
          CardIntent::Toggle(task.id),
          &[
            "task-checkbox",
            if task.completed {
              "checked"
            } else {
              ""
            }
          ],
          if task.completed {
            "Mark as active"
          } else {
            "Mark as completed"
          }
        )
        .attr(
          "aria-pressed",
          task.completed.to_string()
        )
      )
      .child(content)
      .child(
        Element::new("div")
          .classes(["task-actions"])
          .child(
            affordance(
              CardIntent::Edit(task.id),
              &["task-btn", "edit"],
              "Edit task"
            )
            .text("Edit")
          )
          .child(
            affordance(
              CardIntent::Delete(task.id),
              &["task-btn", "delete"],
              "Delete task"
            )
            .text("Delete")
          )
      );

    Element::new("div")
      .classes([
        "task-card",
        flag(task.completed, "completed"),
        flag(
          self.editing == Some(task.id),
          "editing"
        ),
        flag(removing, "removing")
      ])
      .attr("data-task-id", id)
      .attr(
        "style",
        format!(
          "animation-delay: {delay_ms}ms"
        )
      )
      .child(header)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct FilterButton {
  pub filter: TaskFilter,
  pub label:  &'static str,
  pub active: bool
}

pub fn filter_buttons(
  current: TaskFilter
) -> Vec<FilterButton> {
  TaskFilter::all()
    .into_iter()
    .map(|filter| FilterButton {
      filter,
      label: filter.label(),
      active: filter == current
    })
    .collect()
}

pub fn is_card(el: &Element) -> bool {
  el.has_class("task-card")
}

pub fn is_empty_state(
  el: &Element
) -> bool {
  el.has_class("empty-state")
}

fn meta(task: &TaskDto) -> Element {
  Element::new("div")
    .classes(["task-meta"])
    .child(
      Element::new("span")
        .classes([
          "task-priority",
          task.priority.as_key()
        ])
        .text(task.priority.label())
    )
    .maybe_child(task.due_date_text().map(
      |due| {
        Element::new("span")
          .classes(["task-date", "due"])
          .attr("title", "Due date")
          .text(due)
      }
    ))
    .child(
      Element::new("span")
        .classes(["task-date", "created"])
        .attr("title", "Created")
        .text(task.created_at.as_str())
    )
}

fn affordance(
  intent: CardIntent,
  classes: &[&str],
  title: &str
) -> Element {
  Element::new("button")
    .attr("type", "button")
    .classes(classes.iter().copied())
    .attr("data-action", intent.action())
    .attr(
      "data-task-id",
      intent.task_id().to_string()
    )
    .attr("title", title)
}

fn flag(
  on: bool,
  class: &'static str
) -> &'static str {
  if on { class } else { "" }
}
