//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a002_preorder--list"`) and a `data-page-category` taken from the
//! constants below, so a DOM id leads straight to the `domain/` directory.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view or edit form of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview with cards and activity.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration pages and placeholders.
pub const PAGE_CAT_SYSTEM: &str = "system";
