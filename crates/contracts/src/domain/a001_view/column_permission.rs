//! Per-subject column visibility for a data view.
//!
//! A subject without a record sees every column. A record narrows the
//! visible set to `column_permission`, which may be empty.

use super::aggregate::ColumnModel;
use super::commands::ViewCommand;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubjectType {
    Role,
    UserRole,
}

/// Column subset a subject may see in a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPermission {
    pub id: String,
    pub view_id: String,
    pub subject_id: String,
    pub subject_type: SubjectType,
    pub column_permission: Vec<String>,
}

impl ColumnPermission {
    /// New record for a role with a freshly generated id
    pub fn for_role(view_id: &str, role_id: &str, columns: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            view_id: view_id.to_string(),
            subject_id: role_id.to_string(),
            subject_type: SubjectType::Role,
            column_permission: columns,
        }
    }
}

/// Access level shown next to each subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionLevel {
    All,
    None,
    Partial,
}

impl PermissionLevel {
    pub fn of(record: Option<&ColumnPermission>) -> Self {
        match record {
            None => PermissionLevel::All,
            Some(r) if r.column_permission.is_empty() => PermissionLevel::None,
            Some(_) => PermissionLevel::Partial,
        }
    }

    /// Key suffix under the `view.columnPermission` label prefix
    pub fn label_key(&self) -> &'static str {
        match self {
            PermissionLevel::All => "all",
            PermissionLevel::None => "none",
            PermissionLevel::Partial => "partial",
        }
    }
}

/// Order-independent exact comparison of two column sets
pub fn same_column_set(a: &[String], b: &[String]) -> bool {
    let joined = |cols: &[String]| {
        let mut sorted = cols.to_vec();
        sorted.sort();
        sorted.join(",")
    };
    joined(a) == joined(b)
}

/// Keys to render as checked: the record's set, or every column without a record.
pub fn checked_keys(record: Option<&ColumnPermission>, model: &ColumnModel) -> Vec<String> {
    match record {
        Some(r) => r.column_permission.clone(),
        None => model.column_names(),
    }
}

/// Turns a new checked set for `subject_id` into the command that records it.
///
/// * no record yet: create one holding `checked`
/// * record exists and `checked` equals every model column: drop the record
/// * record exists otherwise: replace its column set
pub fn toggle_column_permission(
    permissions: &[ColumnPermission],
    view_id: &str,
    subject_id: &str,
    checked: Vec<String>,
    model: &ColumnModel,
) -> ViewCommand {
    match permissions.iter().find(|p| p.subject_id == subject_id) {
        None => ViewCommand::SetColumnPermission(ColumnPermission::for_role(
            view_id, subject_id, checked,
        )),
        Some(existing) => {
            if same_column_set(&model.column_names(), &checked) {
                ViewCommand::ClearColumnPermission {
                    subject_id: subject_id.to_string(),
                }
            } else {
                ViewCommand::SetColumnPermission(ColumnPermission {
                    column_permission: checked,
                    ..existing.clone()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_view::{Column, ColumnType, EditingView};

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn session() -> EditingView {
        EditingView::new("v1", "Orders").with_model(ColumnModel::from_columns(
            ["a", "b", "c"].iter().map(|n| Column::new(*n, ColumnType::String)),
        ))
    }

    fn toggle(view: &EditingView, subject: &str, checked: &[&str]) -> EditingView {
        let command = toggle_column_permission(
            &view.column_permissions,
            &view.id,
            subject,
            cols(checked),
            &view.model,
        );
        view.apply(command).unwrap()
    }

    #[test]
    fn test_strict_subset_creates_one_record() {
        let view = toggle(&session(), "r1", &["a"]);

        assert_eq!(view.column_permissions.len(), 1);
        let record = &view.column_permissions[0];
        assert_eq!(record.subject_id, "r1");
        assert_eq!(record.view_id, "v1");
        assert_eq!(record.subject_type, SubjectType::Role);
        assert_eq!(record.column_permission, cols(&["a"]));
        assert!(Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn test_full_set_removes_existing_record() {
        let partial = toggle(&session(), "r1", &["a"]);
        let restored = toggle(&partial, "r1", &["c", "a", "b"]);

        assert!(restored.column_permissions.is_empty());
        assert!(restored.permission_for("r1").is_none());
    }

    #[test]
    fn test_existing_record_is_replaced_and_keeps_its_id() {
        let partial = toggle(&session(), "r1", &["a"]);
        let id = partial.column_permissions[0].id.clone();

        let narrowed = toggle(&partial, "r1", &[]);

        assert_eq!(narrowed.column_permissions.len(), 1);
        assert_eq!(narrowed.column_permissions[0].id, id);
        assert!(narrowed.column_permissions[0].column_permission.is_empty());
    }

    #[test]
    fn test_full_set_without_record_still_creates_one() {
        let view = toggle(&session(), "r1", &["a", "b", "c"]);
        assert_eq!(view.column_permissions.len(), 1);
        assert_eq!(
            PermissionLevel::of(view.permission_for("r1")),
            PermissionLevel::Partial
        );
    }

    #[test]
    fn test_other_subjects_are_untouched() {
        let view = toggle(&toggle(&session(), "r1", &["a"]), "r2", &["b"]);
        let view = toggle(&view, "r1", &["a", "b", "c"]);

        assert_eq!(view.column_permissions.len(), 1);
        assert_eq!(view.column_permissions[0].subject_id, "r2");
    }

    #[test]
    fn test_permission_level() {
        let mut record = ColumnPermission::for_role("v1", "r1", vec![]);
        assert_eq!(PermissionLevel::of(None), PermissionLevel::All);
        assert_eq!(PermissionLevel::of(Some(&record)), PermissionLevel::None);
        record.column_permission = cols(&["a"]);
        assert_eq!(PermissionLevel::of(Some(&record)), PermissionLevel::Partial);
        assert_eq!(PermissionLevel::Partial.label_key(), "partial");
    }

    #[test]
    fn test_same_column_set_is_exact() {
        assert!(same_column_set(&cols(&["b", "a"]), &cols(&["a", "b"])));
        assert!(!same_column_set(&cols(&["a"]), &cols(&["a", "b"])));
        assert!(same_column_set(&[], &[]));
    }

    #[test]
    fn test_checked_keys_default_to_all_columns() {
        let view = session();
        assert_eq!(checked_keys(None, &view.model), cols(&["a", "b", "c"]));

        let record = ColumnPermission::for_role("v1", "r1", cols(&["b"]));
        assert_eq!(checked_keys(Some(&record), &view.model), cols(&["b"]));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ColumnPermission {
            id: "p1".into(),
            view_id: "v1".into(),
            subject_id: "r1".into(),
            subject_type: SubjectType::Role,
            column_permission: cols(&["a"]),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["viewId"], "v1");
        assert_eq!(json["subjectType"], "ROLE");
        assert_eq!(json["columnPermission"][0], "a");
    }
}
