use aquatask_shared::{
  TaskCreate,
  TaskDto,
  TaskPatch,
  TaskPriority
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum DraftError {
  #[error("Please enter a task title")]
  EmptyTitle
}

/// Task form contents as typed, before trimming.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub due_date:    String
}

impl TaskDraft {
  pub fn from_task(
    task: &TaskDto
  ) -> Self {
    Self {
      title:       task.title.clone(),
      description: task
        .description
        .clone()
        .unwrap_or_default(),
      priority:    task.priority,
      due_date:    task
        .due_date
        .clone()
        .unwrap_or_default()
    }
  }

  fn validated_title(
    &self
  ) -> Result<String, DraftError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(DraftError::EmptyTitle);
    }
    Ok(title.to_string())
  }

  fn due_date_value(
    &self
  ) -> Option<String> {
    let due = self.due_date.trim();
    (!due.is_empty())
      .then(|| due.to_string())
  }

  pub fn to_create(
    &self
  ) -> Result<TaskCreate, DraftError> {
    Ok(TaskCreate {
      title:       self.validated_title()?,
      description: self
        .description
        .trim()
        .to_string(),
      priority:    self.priority,
      due_date:    self.due_date_value()
    })
  }

  /// Full replacement of the editable fields; an empty due date clears it.
  pub fn to_patch(
    &self
  ) -> Result<TaskPatch, DraftError> {
    Ok(TaskPatch {
      title:       Some(
        self.validated_title()?
      ),
      description: Some(
        self.description.trim().to_string()
      ),
      priority:    Some(self.priority),
      due_date:    Some(
        self.due_date_value()
      ),
      completed:   None
    })
  }
}
