pub mod column_permissions;

pub use column_permissions::ColumnPermissions;
