pub mod details;
pub mod edit;
pub mod list;

pub use details::PreorderDetail;
pub use edit::PreorderEdit;
pub use list::PreorderList;
