pub mod date_range_picker;
pub mod field_row;
pub mod filter_chips;
pub mod list_toolbar;
pub mod pagination_controls;
pub mod record_not_found;
pub mod row_actions;
pub mod stat_card;
pub mod status_badge;
