mod shell;

use std::rc::Rc;

use aquatask_core::view::filter_buttons;
use aquatask_core::{
  CardIntent,
  ClientConfig,
  Controller
};
use aquatask_shared::TaskFilter;
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_memo
};

use crate::api::HttpTransport;
use crate::components::{
  DraftEdit,
  EditModal,
  FilterBar,
  StatsBar,
  TaskForm,
  TaskRegion,
  ToastView
};
use self::shell::BrowserShell;

const CONFIG_TOML: &str =
  include_str!("../assets/aquatask.toml");

type AppController =
  Controller<HttpTransport, BrowserShell>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shortcut {
  CloseEdit,
  Refresh
}

impl Shortcut {
  /// Shift+R stays with the browser as a hard reload.
  fn from_key(
    key: &str,
    command: bool
  ) -> Option<Self> {
    match key {
      | "Escape" => Some(Self::CloseEdit),
      | "r" if command => Some(Self::Refresh),
      | _ => None
    }
  }
}

fn today() -> String {
  chrono::Local::now()
    .date_naive()
    .format("%Y-%m-%d")
    .to_string()
}

fn run<F, Fut>(
  controller: &Rc<AppController>,
  action: F
) where
  F: FnOnce(AppController) -> Fut,
  Fut: Future<Output = ()> + 'static
{
  spawn_local(action(
    AppController::clone(controller)
  ));
}

#[function_component(App)]
pub fn app() -> Html {
  let rerender = use_force_update();
  let controller = use_memo((), move |_| {
    let config =
      ClientConfig::from_toml_or_default(
        CONFIG_TOML
      );
    tracing::info!(
      base_url = %config.api.base_url,
      "client config loaded"
    );
    Controller::new(
      HttpTransport::new(
        &config.api.base_url
      ),
      BrowserShell::new(rerender),
      config.timing
    )
  });

  {
    let controller = controller.clone();
    use_effect_with((), move |_| {
      run(&controller, |ctl| async move {
        ctl.init().await
      });
      || ()
    });
  }

  {
    let controller = controller.clone();
    use_effect_with((), move |_| {
      let listener = web_sys::window()
        .and_then(|window| {
          window.document()
        })
        .map(|document| {
          EventListener::new_with_options(
            &document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
              let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
              else {
                return;
              };
              match Shortcut::from_key(
                &key.key(),
                key.ctrl_key() || key.meta_key()
              ) {
                | Some(Shortcut::CloseEdit) => {
                  controller.close_edit()
                }
                | Some(Shortcut::Refresh) => {
                  event.prevent_default();
                  run(&controller, |ctl| async move {
                    ctl.refresh().await
                  });
                }
                | None => {}
              }
            }
          )
        });
      if listener.is_none() {
        tracing::warn!(
          "no document; keyboard shortcuts \
           disabled"
        );
      }
      move || drop(listener)
    });
  }

  let state = controller.state();
  let min_date = today();

  let on_draft = {
    let controller = controller.clone();
    Callback::from(move |edit: DraftEdit| {
      controller
        .edit_draft(|draft| edit.apply(draft))
    })
  };
  let on_create = {
    let controller = controller.clone();
    Callback::from(move |()| {
      run(&controller, |ctl| async move {
        ctl.create().await
      })
    })
  };
  let on_filter = {
    let controller = controller.clone();
    Callback::from(
      move |filter: TaskFilter| {
        run(&controller, |ctl| async move {
          ctl.set_filter(filter).await
        })
      }
    )
  };
  let on_refresh = {
    let controller = controller.clone();
    Callback::from(move |()| {
      run(&controller, |ctl| async move {
        ctl.refresh().await
      })
    })
  };
  let on_intent = {
    let controller = controller.clone();
    Callback::from(
      move |intent: CardIntent| {
        run(&controller, |ctl| async move {
          ctl.handle_card(intent).await
        })
      }
    )
  };
  let on_session_edit = {
    let controller = controller.clone();
    Callback::from(move |edit: DraftEdit| {
      controller.edit_session_draft(
        |draft| edit.apply(draft)
      )
    })
  };
  let on_save = {
    let controller = controller.clone();
    Callback::from(move |()| {
      run(&controller, |ctl| async move {
        ctl.submit_edit().await
      })
    })
  };
  let on_close = {
    let controller = controller.clone();
    Callback::from(move |()| {
      controller.close_edit()
    })
  };

  html! {
      <div class="container">
          <header class="header">
              <h1>{ "AquaTask" }</h1>
              <StatsBar stats={state.stats} />
          </header>
          <TaskForm
              draft={state.draft.clone()}
              min_date={min_date.clone()}
              on_edit={on_draft}
              on_submit={on_create}
          />
          <FilterBar
              buttons={filter_buttons(state.filter)}
              refreshing={state.refreshing}
              on_filter={on_filter}
              on_refresh={on_refresh}
          />
          <TaskRegion
              markup={controller.render_tasks().to_html()}
              on_intent={on_intent}
          />
          {
              match &state.edit {
                  | Some(session) => html! {
                      <EditModal
                          draft={session.draft.clone()}
                          min_date={min_date}
                          on_edit={on_session_edit}
                          on_submit={on_save}
                          on_close={on_close}
                      />
                  },
                  | None => Html::default()
              }
          }
          <ToastView toast={state.toast.current().cloned()} />
      </div>
  }
}
