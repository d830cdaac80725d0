use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use aquatask_shared::{
  TaskFilter,
  TaskId
};
use tracing::{
  debug,
  info
};

use crate::config::TimingConfig;
use crate::draft::TaskDraft;
use crate::markup::Element;
use crate::repository::TaskRepository;
use crate::state::{
  EditSession,
  UiState
};
use crate::toast::{
  Notify,
  ToastLevel
};
use crate::transport::TaskTransport;
use crate::view::{
  CardIntent,
  TaskListProjection
};

pub const DELETE_CONFIRMATION: &str =
  "Are you sure you want to delete this \
   task?";

const WELCOME: &str =
  "Welcome to AquaTask! 🎯";
const CREATED: &str =
  "Task created successfully!";
const COMPLETED: &str =
  "Task completed! 🎉";
const REOPENED: &str = "Task reopened";
const UPDATED: &str =
  "Task updated successfully!";
const DELETED: &str =
  "Task deleted successfully";
const REFRESHED: &str = "Data refreshed!";

/// Host services the controller needs from the page.
pub trait Shell {
  /// Blocking yes/no question before destructive actions.
  fn confirm(&self, message: &str) -> bool;

  fn sleep(
    &self,
    millis: u32
  ) -> impl Future<Output = ()>;

  /// Runs `task` once after `millis`.
  fn schedule(
    &self,
    millis: u32,
    task: Box<dyn FnOnce()>
  );

  /// The state changed and the page should re-render.
  fn state_changed(&self);
}

struct Notifier<S> {
  state:    Rc<RefCell<UiState>>,
  shell:    Rc<S>,
  toast_ms: u32
}

impl<S> Notify for Notifier<S>
where
  S: Shell + 'static
{
  fn notify(
    &self,
    level: ToastLevel,
    message: &str
  ) {
    let toast = self
      .state
      .borrow_mut()
      .toast
      .show(level, message);
    debug!(
      level = level.as_class(),
      text = message,
      "toast shown"
    );
    self.shell.state_changed();

    let state = Rc::clone(&self.state);
    let shell = Rc::clone(&self.shell);
    self.shell.schedule(
      self.toast_ms,
      Box::new(move || {
        let expired = state
          .borrow_mut()
          .toast
          .expire(toast.generation);
        if expired {
          shell.state_changed();
        }
      })
    );
  }
}

struct Inner<T, S> {
  repo:   TaskRepository<T, Notifier<S>>,
  state:  Rc<RefCell<UiState>>,
  shell:  Rc<S>,
  timing: TimingConfig
}

/// Sequences user intents into repository calls and state updates.
///
/// Cloning is cheap and every clone drives the same state, so handlers can
/// move a copy into a spawned future. State borrows never span an `.await`.
pub struct Controller<T, S> {
  inner: Rc<Inner<T, S>>
}

impl<T, S> Clone for Controller<T, S> {
  fn clone(&self) -> Self {
    Self {
      inner: Rc::clone(&self.inner)
    }
  }
}

impl<T, S> Controller<T, S>
where
  T: TaskTransport,
  S: Shell + 'static
{
  pub fn new(
    transport: T,
    shell: S,
    timing: TimingConfig
  ) -> Self {
    let state =
      Rc::new(RefCell::new(UiState::default()));
    let shell = Rc::new(shell);
    let notifier = Notifier {
      state:    Rc::clone(&state),
      shell:    Rc::clone(&shell),
      toast_ms: timing.toast_ms
    };

    Self {
      inner: Rc::new(Inner {
        repo: TaskRepository::new(
          transport, notifier
        ),
        state,
        shell,
        timing
      })
    }
  }

  pub fn state(&self) -> UiState {
    self.inner.state.borrow().clone()
  }

  pub fn shell(&self) -> &S {
    &self.inner.shell
  }

  pub fn transport(&self) -> &T {
    self.inner.repo.transport()
  }

  /// Full replacement tree for the task region.
  pub fn render_tasks(&self) -> Element {
    let state = self.inner.state.borrow();
    TaskListProjection {
      tasks:      &state.tasks,
      editing:    state.editing_id(),
      removing:   state.removing,
      stagger_ms: self.inner.timing.stagger_ms
    }
    .render()
  }

  fn update<R>(
    &self,
    f: impl FnOnce(&mut UiState) -> R
  ) -> R {
    let out =
      f(&mut self.inner.state.borrow_mut());
    self.inner.shell.state_changed();
    out
  }

  fn notify(
    &self,
    level: ToastLevel,
    message: &str
  ) {
    self
      .inner
      .repo
      .notifier()
      .notify(level, message);
  }

  pub async fn init(&self) {
    info!("initializing task list");
    self.load_tasks().await;
    self.load_stats().await;
    self.notify(ToastLevel::Success, WELCOME);
  }

  /// Reloads the list for the current filter. A response that arrives
  /// after a newer reload was started is dropped.
  pub async fn load_tasks(&self) {
    let (filter, generation) = {
      let mut state =
        self.inner.state.borrow_mut();
      state.list_generation =
        state.list_generation.wrapping_add(1);
      (state.filter, state.list_generation)
    };

    let tasks =
      self.inner.repo.list_tasks(filter).await;

    let applied = {
      let mut state =
        self.inner.state.borrow_mut();
      if state.list_generation == generation {
        state.tasks = tasks;
        state.removing = None;
        true
      } else {
        false
      }
    };

    if applied {
      self.inner.shell.state_changed();
    } else {
      debug!(
        filter = filter.as_query(),
        generation,
        "discarding stale task list"
      );
    }
  }

  pub async fn load_stats(&self) {
    if let Some(stats) =
      self.inner.repo.fetch_stats().await
    {
      self.update(|state| {
        state.stats = Some(stats)
      });
    }
  }

  pub fn edit_draft(
    &self,
    f: impl FnOnce(&mut TaskDraft)
  ) {
    self.update(|state| f(&mut state.draft));
  }

  pub async fn create(&self) {
    let draft =
      self.inner.state.borrow().draft.clone();
    let create = match draft.to_create() {
      | Ok(create) => create,
      | Err(err) => {
        debug!(error = %err, "create rejected locally");
        self.notify(
          ToastLevel::Error,
          &err.to_string()
        );
        return;
      }
    };

    let Ok(task) = self
      .inner
      .repo
      .create_task(&create)
      .await
    else {
      return;
    };
    info!(task_id = task.id, "task created");

    self.notify(ToastLevel::Success, CREATED);
    self.update(|state| {
      state.draft = TaskDraft::default()
    });
    self.load_tasks().await;
    self.load_stats().await;
  }

  /// Flips the card in place from the server's answer instead of
  /// reloading the list; only stats are refetched.
  pub async fn toggle(&self, id: TaskId) {
    let Ok(task) =
      self.inner.repo.toggle_task(id).await
    else {
      return;
    };

    self.update(|state| {
      if let Some(slot) = state
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
      {
        slot.completed = task.completed;
      }
    });
    self.notify(
      ToastLevel::Success,
      if task.completed {
        COMPLETED
      } else {
        REOPENED
      }
    );
    self.load_stats().await;
  }

  /// Starts editing `id` from the last loaded list, replacing any open
  /// session. Unknown ids are ignored.
  pub fn open_edit(&self, id: TaskId) {
    let Some(draft) = self
      .inner
      .state
      .borrow()
      .task(id)
      .map(TaskDraft::from_task)
    else {
      debug!(
        task_id = id,
        "edit requested for task not in \
         list"
      );
      return;
    };

    self.update(|state| {
      state.edit = Some(EditSession {
        task_id: id,
        draft
      })
    });
  }

  pub fn edit_session_draft(
    &self,
    f: impl FnOnce(&mut TaskDraft)
  ) {
    self.update(|state| {
      if let Some(session) =
        state.edit.as_mut()
      {
        f(&mut session.draft);
      }
    });
  }

  pub fn close_edit(&self) {
    if self.inner.state.borrow().edit.is_none()
    {
      return;
    }
    self.update(|state| state.edit = None);
  }

  pub async fn submit_edit(&self) {
    let Some(session) =
      self.inner.state.borrow().edit.clone()
    else {
      return;
    };
    let patch = match session.draft.to_patch()
    {
      | Ok(patch) => patch,
      | Err(err) => {
        self.notify(
          ToastLevel::Error,
          &err.to_string()
        );
        return;
      }
    };

    if self
      .inner
      .repo
      .update_task(session.task_id, &patch)
      .await
      .is_err()
    {
      return;
    }

    self.notify(ToastLevel::Success, UPDATED);
    self.close_edit();
    self.load_tasks().await;
  }

  pub async fn delete(&self, id: TaskId) {
    if !self
      .inner
      .shell
      .confirm(DELETE_CONFIRMATION)
    {
      debug!(
        task_id = id,
        "delete declined"
      );
      return;
    }

    if !self.inner.repo.delete_task(id).await
    {
      return;
    }

    self.update(|state| {
      state.removing = Some(id)
    });
    self
      .inner
      .shell
      .sleep(self.inner.timing.delete_animation_ms)
      .await;

    self.notify(ToastLevel::Success, DELETED);
    self.load_tasks().await;
    self.load_stats().await;
  }

  pub async fn set_filter(
    &self,
    filter: TaskFilter
  ) {
    self.update(|state| state.filter = filter);
    self.load_tasks().await;
  }

  pub async fn refresh(&self) {
    self.update(|state| state.refreshing = true);
    self.load_tasks().await;
    self.load_stats().await;
    self
      .inner
      .shell
      .sleep(self.inner.timing.refresh_feedback_ms)
      .await;
    self.update(|state| {
      state.refreshing = false
    });
    self.notify(ToastLevel::Success, REFRESHED);
  }

  pub async fn handle_card(
    &self,
    intent: CardIntent
  ) {
    debug!(
      action = intent.action(),
      task_id = intent.task_id(),
      "card action"
    );
    match intent {
      | CardIntent::Toggle(id) => {
        self.toggle(id).await
      }
      | CardIntent::Edit(id) => {
        self.open_edit(id)
      }
      | CardIntent::Delete(id) => {
        self.delete(id).await
      }
    }
  }
}
