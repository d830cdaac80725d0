use aquatask_core::Shell;
use gloo::timers::future::TimeoutFuture;
use yew::functional::UseForceUpdateHandle;

/// Page services backed by browser dialogs, timers and a Yew re-render.
#[derive(Clone)]
pub struct BrowserShell {
  rerender: UseForceUpdateHandle
}

impl BrowserShell {
  pub fn new(
    rerender: UseForceUpdateHandle
  ) -> Self {
    Self {
      rerender
    }
  }
}

impl Shell for BrowserShell {
  fn confirm(
    &self,
    message: &str
  ) -> bool {
    gloo::dialogs::confirm(message)
  }

  async fn sleep(&self, millis: u32) {
    TimeoutFuture::new(millis).await;
  }

  fn schedule(
    &self,
    millis: u32,
    task: Box<dyn FnOnce()>
  ) {
    wasm_bindgen_futures::spawn_local(
      async move {
        TimeoutFuture::new(millis).await;
        task();
      }
    );
  }

  fn state_changed(&self) {
    self.rerender.force_update();
  }
}
