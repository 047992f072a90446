//! Client-side search, date filter and pagination shared by the list views

pub mod date_range;
pub mod derived_view;
pub mod filter;
pub mod pager;
pub mod query_state;

pub use date_range::{DatePreset, DateRange};
pub use derived_view::{DerivedView, ListState};
pub use filter::{filter_records, matches, Searchable};
pub use pager::{PageSummary, Pager};
pub use query_state::{FilterChip, QueryState};
