use aquatask_shared::{
  StatsDto,
  TaskDto,
  TaskFilter,
  TaskId
};

use crate::draft::TaskDraft;
use crate::toast::ToastSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
  pub task_id: TaskId,
  pub draft:   TaskDraft
}

/// Everything the page remembers between user actions. Owned by the
/// controller; the UI only ever sees clones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
  /// Tasks from the most recent list load, in server order.
  pub tasks:      Vec<TaskDto>,
  pub stats:      Option<StatsDto>,
  pub filter:     TaskFilter,
  pub draft:      TaskDraft,
  pub edit:       Option<EditSession>,
  /// Card playing its removal animation.
  pub removing:   Option<TaskId>,
  pub refreshing: bool,
  pub toast:      ToastSlot,
  pub(crate) list_generation: u64
}

impl UiState {
  pub fn task(
    &self,
    id: TaskId
  ) -> Option<&TaskDto> {
    self.tasks.iter().find(|t| t.id == id)
  }

  pub fn editing_id(
    &self
  ) -> Option<TaskId> {
    self
      .edit
      .as_ref()
      .map(|session| session.task_id)
  }
}
