pub mod header_panel;
