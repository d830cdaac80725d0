use serde::{
  Deserialize,
  Serialize
};

pub type TaskId = u64;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
  Low,
  #[default]
  Medium,
  High
}

impl TaskPriority {
  pub fn all() -> [Self; 3] {
    [Self::Low, Self::Medium, Self::High]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Low => "low",
      | Self::Medium => "medium",
      | Self::High => "high"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Medium => "Medium",
      | Self::High => "High"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "low" => Some(Self::Low),
      | "medium" => Some(Self::Medium),
      | "high" => Some(Self::High),
      | _ => None
    }
  }
}

/// Subset of tasks requested from `/api/tasks`.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
  #[default]
  All,
  Active,
  Completed
}

impl TaskFilter {
  pub fn all() -> [Self; 3] {
    [
      Self::All,
      Self::Active,
      Self::Completed
    ]
  }

  pub fn as_query(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }

  pub fn from_query(
    value: &str
  ) -> Option<Self> {
    match value {
      | "all" => Some(Self::All),
      | "active" => Some(Self::Active),
      | "completed" => {
        Some(Self::Completed)
      }
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskDto {
  pub id:          TaskId,
  pub title:       String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub priority:    TaskPriority,
  #[serde(default)]
  pub created_at:  String,
  #[serde(default)]
  pub due_date:    Option<String>
}

impl TaskDto {
  /// Description with blank values treated as absent.
  pub fn description_text(
    &self
  ) -> Option<&str> {
    self
      .description
      .as_deref()
      .filter(|text| {
        !text.trim().is_empty()
      })
  }

  pub fn due_date_text(
    &self
  ) -> Option<&str> {
    self
      .due_date
      .as_deref()
      .filter(|text| {
        !text.trim().is_empty()
      })
  }
}

/// Body of `POST /api/tasks`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskCreate {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub due_date:    Option<String>
}

/// Body of `PUT /api/tasks/{id}`. Absent fields are left untouched by the
/// server; `due_date: Some(None)` clears the date.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskPatch {
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub title:       Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub priority:    Option<TaskPriority>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date: Option<Option<String>>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub completed:   Option<bool>
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct StatsDto {
  pub total:           u64,
  pub active:          u64,
  pub completed:       u64,
  #[serde(default)]
  pub completion_rate: f64
}
