pub mod config;
pub mod controller;
pub mod draft;
pub mod markup;
pub mod repository;
pub mod state;
pub mod toast;
pub mod transport;
pub mod view;

pub use config::{
  ClientConfig,
  TimingConfig
};
pub use controller::{
  Controller,
  Shell
};
pub use draft::TaskDraft;
pub use repository::{
  RepoError,
  TaskRepository
};
pub use state::UiState;
pub use toast::{
  Toast,
  ToastLevel
};
pub use transport::{
  ApiRequest,
  ApiResponse,
  Method,
  TaskTransport,
  TransportError
};
pub use view::CardIntent;
