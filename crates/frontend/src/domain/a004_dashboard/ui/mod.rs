pub mod save_to_dashboard;
