pub mod bootstrap;
pub mod components;
pub mod config;
pub mod debounce;
pub mod i18n;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod picker_aggregate;
