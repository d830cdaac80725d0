use aquatask_core::Toast;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
  pub toast: Option<Toast>
}

#[function_component(ToastView)]
pub fn toast_view(
  props: &ToastViewProps
) -> Html {
  match &props.toast {
    | Some(toast) => html! {
        <div
            key={toast.generation.to_string()}
            class={classes!("toast", "show", toast.level.as_class())}
            role="status"
        >
            { toast.message.clone() }
        </div>
    },
    | None => html! {
        <div class="toast" role="status"></div>
    }
  }
}
