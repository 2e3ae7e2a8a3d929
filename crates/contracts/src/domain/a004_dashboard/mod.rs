pub mod aggregate;

pub use aggregate::{dashboards_for_org, DashboardSummary};
