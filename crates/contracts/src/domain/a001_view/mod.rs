pub mod aggregate;
pub mod column_permission;
pub mod commands;

pub use aggregate::{Column, ColumnModel, ColumnType, EditingView, ViewStage, ViewStatus};
pub use column_permission::{
    checked_keys, same_column_set, toggle_column_permission, ColumnPermission, PermissionLevel,
    SubjectType,
};
pub use commands::ViewCommand;
