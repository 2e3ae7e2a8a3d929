pub mod error;
pub mod list_filter;
