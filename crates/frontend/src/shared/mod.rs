pub mod components;
pub mod date_utils;
pub mod form;
pub mod icons;
pub mod list_state;
pub mod page_frame;
pub mod page_standard;
pub mod stores;
