pub mod details;
pub mod edit;
pub mod list;

pub use details::RequestDetail;
pub use edit::RequestEdit;
pub use list::RequestList;
