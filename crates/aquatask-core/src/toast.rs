pub const DEFAULT_TOAST_MS: u32 = 3_000;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum ToastLevel {
  Success,
  Error
}

impl ToastLevel {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Error => "error"
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
  pub message:    String,
  pub level:      ToastLevel,
  pub generation: u64
}

/// Single visible notification. A new toast replaces the current one and
/// invalidates its pending dismissal.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ToastSlot {
  current:    Option<Toast>,
  generation: u64
}

impl ToastSlot {
  pub fn show(
    &mut self,
    level: ToastLevel,
    message: &str
  ) -> Toast {
    self.generation =
      self.generation.wrapping_add(1);
    let toast = Toast {
      message: message.to_string(),
      level,
      generation: self.generation
    };
    self.current = Some(toast.clone());
    toast
  }

  pub fn current(
    &self
  ) -> Option<&Toast> {
    self.current.as_ref()
  }

  /// Clears the toast shown as `generation`; a no-op if a newer toast has
  /// replaced it since.
  pub fn expire(
    &mut self,
    generation: u64
  ) -> bool {
    match self.current.as_ref() {
      | Some(toast)
        if toast.generation
          == generation =>
      {
        self.current = None;
        true
      }
      | _ => false
    }
  }
}

/// Sink for user-facing notifications raised below the controller.
pub trait Notify {
  fn notify(
    &self,
    level: ToastLevel,
    message: &str
  );
}
