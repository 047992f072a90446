//! Request edit form
//!
//! - view_model.rs: draft, validation errors and the save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::RequestEdit;
pub use view_model::RequestEditViewModel;
