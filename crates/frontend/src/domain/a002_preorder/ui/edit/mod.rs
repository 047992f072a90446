//! Preorder edit form
//!
//! - view_model.rs: draft, validation errors and the save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::PreorderEdit;
pub use view_model::PreorderEditViewModel;
