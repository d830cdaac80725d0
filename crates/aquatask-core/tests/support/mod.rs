use std::cell::{
  Cell,
  RefCell
};

use aquatask_core::{
  ApiRequest,
  ApiResponse,
  Method,
  Shell,
  TaskTransport,
  TransportError
};
use aquatask_shared::{
  StatsDto,
  TaskDto,
  TaskPriority
};
use futures::channel::oneshot;
use serde_json::Value;

/// In-memory stand-in for the task API with the same status codes and
/// ordering (newest first) as the real service.
#[derive(Default)]
pub struct FakeApi {
  tasks:    RefCell<Vec<TaskDto>>,
  next_id:  Cell<u64>,
  sent:     RefCell<Vec<ApiRequest>>,
  failing:  Cell<bool>,
  held:     RefCell<Option<oneshot::Receiver<()>>>
}

impl FakeApi {
  pub fn with_tasks(
    seed: &[(&str, bool)]
  ) -> Self {
    let api = Self::default();
    for (title, completed) in seed {
      let mut task = api.insert(
        title,
        "",
        TaskPriority::Medium,
        None
      );
      task.completed = *completed;
      api.replace(task);
    }
    api
  }

  /// The next request waits until the returned sender fires.
  pub fn hold_next(&self) -> oneshot::Sender<()> {
    let (release, held) = oneshot::channel();
    *self.held.borrow_mut() = Some(held);
    release
  }

  pub fn fail_all(&self, failing: bool) {
    self.failing.set(failing);
  }

  /// `"METHOD target"` for every request seen so far.
  pub fn requests(&self) -> Vec<String> {
    self
      .sent
      .borrow()
      .iter()
      .map(|r| {
        format!("{} {}", r.method, r.target())
      })
      .collect()
  }

  pub fn clear_requests(&self) {
    self.sent.borrow_mut().clear();
  }

  fn insert(
    &self,
    title: &str,
    description: &str,
    priority: TaskPriority,
    due_date: Option<String>
  ) -> TaskDto {
    let id = self.next_id.get() + 1;
    self.next_id.set(id);
    let task = TaskDto {
      id,
      title: title.trim().to_string(),
      description: Some(
        description.trim().to_string()
      ),
      completed: false,
      priority,
      created_at: format!(
        "2026-10-19 10:{:02}",
        id % 60
      ),
      due_date
    };
    self.tasks.borrow_mut().push(task.clone());
    task
  }

  fn replace(&self, task: TaskDto) {
    let mut tasks = self.tasks.borrow_mut();
    if let Some(slot) =
      tasks.iter_mut().find(|t| t.id == task.id)
    {
      *slot = task;
    }
  }

  fn listing(
    &self,
    keep: impl Fn(&TaskDto) -> bool
  ) -> Vec<TaskDto> {
    let mut tasks: Vec<TaskDto> = self
      .tasks
      .borrow()
      .iter()
      .filter(|t| keep(t))
      .cloned()
      .collect();
    tasks.sort_by(|a, b| b.id.cmp(&a.id));
    tasks
  }

  fn find(&self, id: u64) -> Option<TaskDto> {
    self
      .tasks
      .borrow()
      .iter()
      .find(|t| t.id == id)
      .cloned()
  }

  fn route(
    &self,
    request: &ApiRequest
  ) -> ApiResponse {
    let segments: Vec<&str> = request
      .path
      .trim_start_matches('/')
      .split('/')
      .collect();

    match (request.method, segments.as_slice()) {
      | (Method::Get, ["api", "tasks"]) => {
        let tasks = match request
          .query_value("filter")
          .unwrap_or("all")
        {
          | "active" => {
            self.listing(|t| !t.completed)
          }
          | "completed" => {
            self.listing(|t| t.completed)
          }
          | _ => self.listing(|_| true)
        };
        json(200, &tasks)
      }
      | (Method::Post, ["api", "tasks"]) => {
        let body = request
          .body
          .clone()
          .unwrap_or(Value::Null);
        let title = body["title"]
          .as_str()
          .unwrap_or_default();
        if title.trim().is_empty() {
          return error(400, "Title is required");
        }
        let priority = body["priority"]
          .as_str()
          .and_then(TaskPriority::from_key)
          .unwrap_or_default();
        let task = self.insert(
          title,
          body["description"]
            .as_str()
            .unwrap_or_default(),
          priority,
          body["due_date"]
            .as_str()
            .map(str::to_string)
        );
        json(201, &task)
      }
      | (Method::Put, ["api", "tasks", id]) => {
        let Some(mut task) = parse(id)
          .and_then(|id| self.find(id))
        else {
          return error(404, "Task not found");
        };
        let body = request
          .body
          .clone()
          .unwrap_or(Value::Null);
        if let Some(title) = body["title"].as_str()
        {
          task.title = title.trim().to_string();
        }
        if let Some(desc) =
          body["description"].as_str()
        {
          task.description =
            Some(desc.trim().to_string());
        }
        if let Some(priority) = body["priority"]
          .as_str()
          .and_then(TaskPriority::from_key)
        {
          task.priority = priority;
        }
        if body.get("due_date").is_some() {
          task.due_date = body["due_date"]
            .as_str()
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        }
        self.replace(task.clone());
        json(200, &task)
      }
      | (Method::Delete, ["api", "tasks", id]) => {
        let Some(id) = parse(id)
          .filter(|id| self.find(*id).is_some())
        else {
          return error(404, "Task not found");
        };
        self
          .tasks
          .borrow_mut()
          .retain(|t| t.id != id);
        ApiResponse::new(
          200,
          r#"{"message":"Task deleted successfully"}"#
        )
      }
      | (
        Method::Patch,
        ["api", "tasks", id, "toggle"]
      ) => {
        let Some(mut task) = parse(id)
          .and_then(|id| self.find(id))
        else {
          return error(404, "Task not found");
        };
        task.completed = !task.completed;
        self.replace(task.clone());
        json(200, &task)
      }
      | (Method::Get, ["api", "stats"]) => {
        let tasks = self.tasks.borrow();
        let total = tasks.len() as u64;
        let completed = tasks
          .iter()
          .filter(|t| t.completed)
          .count() as u64;
        let rate = if total == 0 {
          0.0
        } else {
          (completed as f64 / total as f64
            * 1000.0)
            .round()
            / 10.0
        };
        json(200, &StatsDto {
          total,
          active: total - completed,
          completed,
          completion_rate: rate
        })
      }
      | _ => error(404, "Not found")
    }
  }
}

impl TaskTransport for FakeApi {
  async fn send(
    &self,
    request: ApiRequest
  ) -> Result<ApiResponse, TransportError> {
    self.sent.borrow_mut().push(request.clone());
    let held = self.held.borrow_mut().take();
    if let Some(held) = held {
      let _ = held.await;
    }
    if self.failing.get() {
      return Err(TransportError::Network(
        "connection refused".to_string()
      ));
    }
    Ok(self.route(&request))
  }
}

fn parse(id: &str) -> Option<u64> {
  id.parse().ok()
}

fn json<T: serde::Serialize>(
  status: u16,
  value: &T
) -> ApiResponse {
  ApiResponse::new(
    status,
    serde_json::to_string(value)
      .expect("encode fake response")
  )
}

fn error(
  status: u16,
  message: &str
) -> ApiResponse {
  ApiResponse::new(
    status,
    serde_json::json!({ "error": message })
      .to_string()
  )
}

/// Shell that answers confirmations from a preset, records sleeps and
/// holds scheduled callbacks until the test runs them.
pub struct RecordingShell {
  pub confirm_answer: Cell<bool>,
  pub confirmations:  Cell<usize>,
  pub sleeps:         RefCell<Vec<u32>>,
  pub scheduled:
    RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
  pub renders:        Cell<usize>
}

impl RecordingShell {
  pub fn new(confirm_answer: bool) -> Self {
    Self {
      confirm_answer: Cell::new(confirm_answer),
      confirmations:  Cell::new(0),
      sleeps:         RefCell::new(Vec::new()),
      scheduled:      RefCell::new(Vec::new()),
      renders:        Cell::new(0)
    }
  }

  pub fn scheduled_count(&self) -> usize {
    self.scheduled.borrow().len()
  }

  /// Fires the oldest pending callback, as its timer would.
  pub fn run_next_scheduled(&self) -> bool {
    let next = {
      let mut scheduled =
        self.scheduled.borrow_mut();
      if scheduled.is_empty() {
        None
      } else {
        Some(scheduled.remove(0))
      }
    };
    match next {
      | Some((_, task)) => {
        task();
        true
      }
      | None => false
    }
  }

  pub fn run_all_scheduled(&self) {
    while self.run_next_scheduled() {}
  }
}

impl Shell for RecordingShell {
  fn confirm(&self, _message: &str) -> bool {
    self
      .confirmations
      .set(self.confirmations.get() + 1);
    self.confirm_answer.get()
  }

  async fn sleep(&self, millis: u32) {
    self.sleeps.borrow_mut().push(millis);
  }

  fn schedule(
    &self,
    millis: u32,
    task: Box<dyn FnOnce()>
  ) {
    self
      .scheduled
      .borrow_mut()
      .push((millis, task));
  }

  fn state_changed(&self) {
    self.renders.set(self.renders.get() + 1);
  }
}
