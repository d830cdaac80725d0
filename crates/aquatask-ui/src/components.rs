mod draft_fields;
mod edit_modal;
mod filter_bar;
mod stats_bar;
mod task_form;
mod task_region;
mod toast_view;

pub use draft_fields::{
  DraftEdit,
  DraftFields
};
pub use edit_modal::EditModal;
pub use filter_bar::FilterBar;
pub use stats_bar::StatsBar;
pub use task_form::TaskForm;
pub use task_region::TaskRegion;
pub use toast_view::ToastView;
