pub mod check_tree;
pub mod list_title;
pub mod popup;
pub mod ui;
