pub mod dto;

pub use dto::{overview, ActivityKind, DashboardOverview, QuickAction, RecentActivity, StatCard, SystemMetric};
