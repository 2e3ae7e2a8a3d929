use super::column_permission::ColumnPermission;
use super::commands::ViewCommand;
use crate::shared::error::SessionError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Status / stage
// ============================================================================

/// Lifecycle status of a data view, sent as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ViewStatus {
    Archived,
    #[default]
    Active,
    Publish,
}

impl ViewStatus {
    pub fn code(&self) -> i32 {
        match self {
            ViewStatus::Archived => 0,
            ViewStatus::Active => 1,
            ViewStatus::Publish => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ViewStatus::Archived),
            1 => Some(ViewStatus::Active),
            2 => Some(ViewStatus::Publish),
            _ => None,
        }
    }
}

impl TryFrom<i32> for ViewStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ViewStatus::from_code(code).ok_or_else(|| format!("unknown view status {code}"))
    }
}

impl From<ViewStatus> for i32 {
    fn from(status: ViewStatus) -> Self {
        status.code()
    }
}

/// Where the editor currently is in the load/run/save cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStage {
    #[default]
    NotLoaded,
    Loading,
    Fresh,
    Initialized,
    Running,
    Saveable,
    Saving,
}

// ============================================================================
// Column model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    #[default]
    String,
    Numeric,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    #[serde(default)]
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
        }
    }
}

/// Column name -> column metadata. Defines the set of togglable column keys.
///
/// On the wire this is a JSON object keyed by column name; the key order of
/// that object is the column order of the view and is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnModel(Vec<Column>);

impl ColumnModel {
    /// Later columns replace earlier ones with the same name, keeping the first position
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        let mut model = Self::default();
        for column in columns {
            model.insert(column);
        }
        model
    }

    fn insert(&mut self, column: Column) {
        match self.0.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.0.push(column),
        }
    }

    /// Column names in model order
    pub fn column_names(&self) -> Vec<String> {
        self.0.iter().map(|c| c.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c.name == name)
    }
}

impl Serialize for ColumnModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.0.iter().map(|c| (&c.name, c)))
    }
}

impl<'de> Deserialize<'de> for ColumnModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ColumnModelVisitor;

        impl<'de> serde::de::Visitor<'de> for ColumnModelVisitor {
            type Value = ColumnModel;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a map of column name to column")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut model = ColumnModel::default();
                while let Some((name, mut column)) = map.next_entry::<String, Column>()? {
                    // the key is authoritative
                    column.name = name;
                    model.insert(column);
                }
                Ok(model)
            }
        }

        deserializer.deserialize_map(ColumnModelVisitor)
    }
}

// ============================================================================
// Editing session
// ============================================================================

/// Working copy of a view while it is being edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingView {
    pub id: String,
    pub name: String,
    pub status: ViewStatus,
    pub stage: ViewStage,
    pub model: ColumnModel,
    pub column_permissions: Vec<ColumnPermission>,
    /// Set once any command changed the content of the session
    #[serde(default)]
    pub touched: bool,
}

impl EditingView {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: ColumnModel) -> Self {
        self.model = model;
        self
    }

    pub fn permission_for(&self, subject_id: &str) -> Option<&ColumnPermission> {
        self.column_permissions
            .iter()
            .find(|p| p.subject_id == subject_id)
    }

    /// Applies `command` and returns the next snapshot. `self` is left as is.
    pub fn apply(&self, command: ViewCommand) -> Result<EditingView, SessionError> {
        let mut next = self.clone();

        match command {
            ViewCommand::SetColumnPermission(record) => {
                if record.view_id != self.id {
                    return Err(SessionError::ViewMismatch {
                        expected: self.id.clone(),
                        found: record.view_id,
                    });
                }
                match next
                    .column_permissions
                    .iter_mut()
                    .find(|p| p.subject_id == record.subject_id)
                {
                    Some(existing) => *existing = record,
                    None => next.column_permissions.push(record),
                }
                next.touched = true;
            }
            ViewCommand::ClearColumnPermission { subject_id } => {
                let before = next.column_permissions.len();
                next.column_permissions
                    .retain(|p| p.subject_id != subject_id);
                if next.column_permissions.len() == before {
                    return Err(SessionError::PermissionNotFound(subject_id));
                }
                next.touched = true;
            }
            ViewCommand::SetStatus(status) => next.status = status,
            ViewCommand::SetStage(stage) => next.stage = stage,
            ViewCommand::ReplaceModel(model) => {
                for permission in next.column_permissions.iter_mut() {
                    permission
                        .column_permission
                        .retain(|name| model.contains(name));
                }
                next.model = model;
                next.touched = true;
            }
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_view::SubjectType;

    fn model(names: &[&str]) -> ColumnModel {
        ColumnModel::from_columns(names.iter().map(|n| Column::new(*n, ColumnType::String)))
    }

    fn record(id: &str, view_id: &str, subject_id: &str, columns: &[&str]) -> ColumnPermission {
        ColumnPermission {
            id: id.to_string(),
            view_id: view_id.to_string(),
            subject_id: subject_id.to_string(),
            subject_type: SubjectType::Role,
            column_permission: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_status_travels_as_code() {
        let view: EditingView = serde_json::from_str(
            r#"{ "id": "v1", "name": "Sales", "status": 0, "stage": "fresh",
                 "model": {}, "columnPermissions": [] }"#,
        )
        .unwrap();
        assert_eq!(view.status, ViewStatus::Archived);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], 0);

        assert_eq!(ViewStatus::from_code(2), Some(ViewStatus::Publish));
        assert!(serde_json::from_str::<ViewStatus>("7").is_err());
        assert!(serde_json::from_str::<ViewStatus>("\"active\"").is_err());
    }

    #[test]
    fn test_column_names_follow_model_order() {
        let m = model(&["c", "a", "b"]);
        assert_eq!(m.column_names(), vec!["c", "a", "b"]);
        assert!(m.contains("b"));
        assert!(!m.contains("d"));
    }

    #[test]
    fn test_model_keeps_json_key_order() {
        let m: ColumnModel = serde_json::from_str(
            r#"{
                "region": { "name": "region", "type": "STRING" },
                "amount": { "name": "amount", "type": "NUMERIC", "primaryKey": false }
            }"#,
        )
        .unwrap();
        assert_eq!(m.column_names(), vec!["region", "amount"]);

        let json = serde_json::to_string(&m).unwrap();
        assert!(json.find("\"region\"").unwrap() < json.find("\"amount\"").unwrap());
    }

    #[test]
    fn test_duplicate_column_keeps_first_position() {
        let m = model(&["a", "b", "a"]);
        assert_eq!(m.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_set_appends_then_replaces_in_place() {
        let view = EditingView::new("v1", "Sales").with_model(model(&["a", "b", "c"]));

        let first = view
            .apply(ViewCommand::SetColumnPermission(record("p1", "v1", "r1", &["a"])))
            .unwrap();
        let second = first
            .apply(ViewCommand::SetColumnPermission(record("p2", "v1", "r2", &[])))
            .unwrap();
        let third = second
            .apply(ViewCommand::SetColumnPermission(record("p1", "v1", "r1", &["a", "b"])))
            .unwrap();

        assert!(view.column_permissions.is_empty());
        assert!(!view.touched);
        assert_eq!(third.column_permissions.len(), 2);
        assert_eq!(third.column_permissions[0].subject_id, "r1");
        assert_eq!(third.column_permissions[0].column_permission, vec!["a", "b"]);
        assert!(third.touched);
    }

    #[test]
    fn test_set_rejects_foreign_view() {
        let view = EditingView::new("v1", "Sales");
        let err = view
            .apply(ViewCommand::SetColumnPermission(record("p1", "v2", "r1", &["a"])))
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::ViewMismatch {
                expected: "v1".into(),
                found: "v2".into()
            }
        );
    }

    #[test]
    fn test_clear_unknown_subject_is_an_error() {
        let view = EditingView::new("v1", "Sales");
        let err = view
            .apply(ViewCommand::ClearColumnPermission {
                subject_id: "r9".into(),
            })
            .unwrap_err();
        assert_eq!(err, SessionError::PermissionNotFound("r9".into()));
    }

    #[test]
    fn test_replace_model_prunes_missing_columns() {
        let mut view = EditingView::new("v1", "Sales").with_model(model(&["a", "b", "c"]));
        view.column_permissions.push(record("p1", "v1", "r1", &["a", "c"]));

        let next = view
            .apply(ViewCommand::ReplaceModel(model(&["a", "b"])))
            .unwrap();

        assert_eq!(next.column_permissions[0].column_permission, vec!["a"]);
        assert_eq!(next.model.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_status_and_stage_do_not_touch() {
        let view = EditingView::new("v1", "Sales");
        let next = view
            .apply(ViewCommand::SetStatus(ViewStatus::Archived))
            .and_then(|v| v.apply(ViewCommand::SetStage(ViewStage::Loading)))
            .unwrap();
        assert_eq!(next.status, ViewStatus::Archived);
        assert_eq!(next.stage, ViewStage::Loading);
        assert!(!next.touched);
    }
}
