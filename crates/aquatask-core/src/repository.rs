use aquatask_shared::{
  StatsDto,
  TaskCreate,
  TaskDto,
  TaskFilter,
  TaskId,
  TaskPatch
};
use serde::de::DeserializeOwned;
use tracing::{
  debug,
  error,
  instrument,
  warn
};

use crate::draft::DraftError;
use crate::toast::{
  Notify,
  ToastLevel
};
use crate::transport::{
  ApiRequest,
  ApiResponse,
  Method,
  TaskTransport,
  TransportError
};

/// Which repository operation failed; decides the notification text.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum RepoAction {
  List,
  Create,
  Update,
  Delete,
  Toggle,
  Stats
}

impl RepoAction {
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::List => "list",
      | Self::Create => "create",
      | Self::Update => "update",
      | Self::Delete => "delete",
      | Self::Toggle => "toggle",
      | Self::Stats => "stats"
    }
  }

  /// Text shown to the user; `None` means the failure stays silent.
  pub fn failure_message(
    self
  ) -> Option<&'static str> {
    match self {
      | Self::List => {
        Some("Failed to load tasks")
      }
      | Self::Create => {
        Some("Failed to create task")
      }
      | Self::Update => {
        Some("Failed to update task")
      }
      | Self::Delete => {
        Some("Failed to delete task")
      }
      | Self::Toggle => {
        Some("Failed to toggle task")
      }
      | Self::Stats => None
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error(transparent)]
  Invalid(#[from] DraftError),
  #[error(transparent)]
  Transport(#[from] TransportError),
  #[error(
    "{action} request returned status \
     {status}"
  )]
  Status {
    action: &'static str,
    status: u16
  },
  #[error("malformed response body: {0}")]
  Decode(#[from] serde_json::Error)
}

/// Typed access to the task API. Holds no state between calls; every
/// failure is logged and, except for stats, reported through `N`.
pub struct TaskRepository<T, N> {
  transport: T,
  notifier:  N
}

impl<T, N> TaskRepository<T, N> {
  pub fn transport(&self) -> &T {
    &self.transport
  }

  pub fn notifier(&self) -> &N {
    &self.notifier
  }
}

impl<T, N> TaskRepository<T, N>
where
  T: TaskTransport,
  N: Notify
{
  pub fn new(
    transport: T,
    notifier: N
  ) -> Self {
    Self {
      transport,
      notifier
    }
  }

  #[instrument(skip(self), fields(filter = filter.as_query()))]
  pub async fn list_tasks(
    &self,
    filter: TaskFilter
  ) -> Vec<TaskDto> {
    let request = ApiRequest::new(
      Method::Get,
      "/api/tasks"
    )
    .query("filter", filter.as_query());

    match self
      .fetch::<Vec<TaskDto>>(
        RepoAction::List,
        request
      )
      .await
    {
      | Ok(tasks) => {
        debug!(
          count = tasks.len(),
          "loaded task list"
        );
        tasks
      }
      | Err(err) => {
        self.report(RepoAction::List, &err);
        Vec::new()
      }
    }
  }

  #[instrument(skip(self, create), fields(title_len = create.title.len()))]
  pub async fn create_task(
    &self,
    create: &TaskCreate
  ) -> Result<TaskDto, RepoError> {
    let result: Result<TaskDto, RepoError> = async {
      if create.title.trim().is_empty() {
        return Err(RepoError::from(
          DraftError::EmptyTitle
        ));
      }
      let request = ApiRequest::new(
        Method::Post,
        "/api/tasks"
      )
      .json(create)?;
      self
        .fetch(RepoAction::Create, request)
        .await
    }
    .await;

    self.finish(RepoAction::Create, result)
  }

  #[instrument(skip(self, patch))]
  pub async fn update_task(
    &self,
    id: TaskId,
    patch: &TaskPatch
  ) -> Result<TaskDto, RepoError> {
    let result: Result<TaskDto, RepoError> = async {
      let request = ApiRequest::new(
        Method::Put,
        format!("/api/tasks/{id}")
      )
      .json(patch)?;
      self
        .fetch(RepoAction::Update, request)
        .await
    }
    .await;

    self.finish(RepoAction::Update, result)
  }

  #[instrument(skip(self))]
  pub async fn delete_task(
    &self,
    id: TaskId
  ) -> bool {
    let request = ApiRequest::new(
      Method::Delete,
      format!("/api/tasks/{id}")
    );

    match self
      .exchange(RepoAction::Delete, request)
      .await
    {
      | Ok(_) => true,
      | Err(err) => {
        self.report(
          RepoAction::Delete,
          &err
        );
        false
      }
    }
  }

  #[instrument(skip(self))]
  pub async fn toggle_task(
    &self,
    id: TaskId
  ) -> Result<TaskDto, RepoError> {
    let request = ApiRequest::new(
      Method::Patch,
      format!("/api/tasks/{id}/toggle")
    );
    let result = self
      .fetch(RepoAction::Toggle, request)
      .await;

    self.finish(RepoAction::Toggle, result)
  }

  #[instrument(skip(self))]
  pub async fn fetch_stats(
    &self
  ) -> Option<StatsDto> {
    let request = ApiRequest::new(
      Method::Get,
      "/api/stats"
    );

    match self
      .fetch(RepoAction::Stats, request)
      .await
    {
      | Ok(stats) => Some(stats),
      | Err(err) => {
        self.report(RepoAction::Stats, &err);
        None
      }
    }
  }

  async fn exchange(
    &self,
    action: RepoAction,
    request: ApiRequest
  ) -> Result<ApiResponse, RepoError> {
    debug!(
      action = action.as_key(),
      method = %request.method,
      target = %request.target(),
      "sending api request"
    );
    let response = self
      .transport
      .send(request)
      .await?;
    if !response.is_success() {
      return Err(RepoError::Status {
        action: action.as_key(),
        status: response.status
      });
    }
    Ok(response)
  }

  async fn fetch<R>(
    &self,
    action: RepoAction,
    request: ApiRequest
  ) -> Result<R, RepoError>
  where
    R: DeserializeOwned
  {
    let response = self
      .exchange(action, request)
      .await?;
    Ok(serde_json::from_str(
      &response.body
    )?)
  }

  fn finish<R>(
    &self,
    action: RepoAction,
    result: Result<R, RepoError>
  ) -> Result<R, RepoError> {
    if let Err(err) = result.as_ref() {
      self.report(action, err);
    }
    result
  }

  fn report(
    &self,
    action: RepoAction,
    err: &RepoError
  ) {
    if let RepoError::Invalid(invalid) =
      err
    {
      warn!(
        action = action.as_key(),
        error = %invalid,
        "rejected invalid request"
      );
      self.notifier.notify(
        ToastLevel::Error,
        &invalid.to_string()
      );
      return;
    }

    error!(
      action = action.as_key(),
      error = %err,
      "api request failed"
    );
    if let Some(message) =
      action.failure_message()
    {
      self
        .notifier
        .notify(ToastLevel::Error, message);
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::collections::VecDeque;

  use aquatask_shared::{
    TaskCreate,
    TaskFilter,
    TaskPriority
  };
  use futures::executor::block_on;

  use super::{
    RepoError,
    TaskRepository
  };
  use crate::toast::{
    Notify,
    ToastLevel
  };
  use crate::transport::{
    ApiRequest,
    ApiResponse,
    Method,
    TaskTransport,
    TransportError
  };

  #[derive(Default)]
  struct ScriptedTransport {
    replies: RefCell<
      VecDeque<
        Result<ApiResponse, TransportError>
      >
    >,
    sent:    RefCell<Vec<ApiRequest>>
  }

  impl ScriptedTransport {
    fn reply(
      self,
      reply: Result<
        ApiResponse,
        TransportError
      >
    ) -> Self {
      self
        .replies
        .borrow_mut()
        .push_back(reply);
      self
    }
  }

  impl TaskTransport for ScriptedTransport {
    async fn send(
      &self,
      request: ApiRequest
    ) -> Result<ApiResponse, TransportError>
    {
      self
        .sent
        .borrow_mut()
        .push(request);
      self
        .replies
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| {
          Err(TransportError::Network(
            "no scripted reply".to_string()
          ))
        })
    }
  }

  #[derive(Default)]
  struct Notes(
    RefCell<Vec<(ToastLevel, String)>>
  );

  impl Notify for &Notes {
    fn notify(
      &self,
      level: ToastLevel,
      message: &str
    ) {
      self
        .0
        .borrow_mut()
        .push((level, message.to_string()));
    }
  }

  const TASK_JSON: &str = r#"{"id":1,"title":"Buy milk","description":"","completed":true,"priority":"low","created_at":"2026-10-19 10:00","due_date":null}"#;

  #[test]
  fn list_failure_yields_empty_list_and_one_error_toast() {
    let notes = Notes::default();
    let repo = TaskRepository::new(
      ScriptedTransport::default().reply(
        Ok(ApiResponse::new(500, "boom"))
      ),
      &notes
    );

    let tasks = block_on(
      repo.list_tasks(TaskFilter::Active)
    );
    assert!(tasks.is_empty());

    let sent = repo.transport().sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(
      sent[0].target(),
      "/api/tasks?filter=active"
    );
    assert_eq!(
      *notes.0.borrow(),
      vec![(
        ToastLevel::Error,
        "Failed to load tasks".to_string()
      )]
    );
  }

  #[test]
  fn stats_failure_is_silent() {
    let notes = Notes::default();
    let repo = TaskRepository::new(
      ScriptedTransport::default().reply(
        Err(TransportError::Network(
          "offline".to_string()
        ))
      ),
      &notes
    );

    assert!(
      block_on(repo.fetch_stats()).is_none()
    );
    assert!(notes.0.borrow().is_empty());
  }

  #[test]
  fn blank_title_never_reaches_transport() {
    let notes = Notes::default();
    let repo = TaskRepository::new(
      ScriptedTransport::default(),
      &notes
    );
    let create = TaskCreate {
      title:       "  ".to_string(),
      description: String::new(),
      priority:    TaskPriority::Medium,
      due_date:    None
    };

    let result =
      block_on(repo.create_task(&create));
    assert!(matches!(
      result,
      Err(RepoError::Invalid(_))
    ));
    assert!(
      repo.transport().sent.borrow().is_empty()
    );
    assert_eq!(notes.0.borrow().len(), 1);
  }

  #[test]
  fn toggle_decodes_task_and_uses_patch() {
    let notes = Notes::default();
    let repo = TaskRepository::new(
      ScriptedTransport::default().reply(
        Ok(ApiResponse::new(200, TASK_JSON))
      ),
      &notes
    );

    let task = block_on(repo.toggle_task(1))
      .expect("toggle succeeds");
    assert!(task.completed);

    let sent = repo.transport().sent.borrow();
    assert_eq!(
      sent[0].method,
      Method::Patch
    );
    assert_eq!(
      sent[0].path,
      "/api/tasks/1/toggle"
    );
    assert!(notes.0.borrow().is_empty());
  }

  #[test]
  fn undecodable_body_is_a_failure() {
    let notes = Notes::default();
    let repo = TaskRepository::new(
      ScriptedTransport::default().reply(
        Ok(ApiResponse::new(
          200,
          "<html>proxy error</html>"
        ))
      ),
      &notes
    );

    let result =
      block_on(repo.toggle_task(3));
    assert!(matches!(
      result,
      Err(RepoError::Decode(_))
    ));
    assert_eq!(
      notes.0.borrow()[0].1,
      "Failed to toggle task"
    );
  }

  #[test]
  fn delete_reports_false_on_404() {
    let notes = Notes::default();
    let repo = TaskRepository::new(
      ScriptedTransport::default().reply(
        Ok(ApiResponse::new(
          404,
          r#"{"error":"Task not found"}"#
        ))
      ),
      &notes
    );

    assert!(!block_on(repo.delete_task(7)));
    assert_eq!(
      notes.0.borrow()[0].1,
      "Failed to delete task"
    );
  }
}
