pub mod a001_view;
pub mod a002_role;
pub mod a003_chart;
pub mod a004_dashboard;
