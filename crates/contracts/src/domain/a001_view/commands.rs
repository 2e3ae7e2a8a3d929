use super::aggregate::{ColumnModel, ViewStage, ViewStatus};
use super::column_permission::ColumnPermission;
use serde::{Deserialize, Serialize};

/// Commands accepted by [`EditingView::apply`](super::EditingView::apply)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ViewCommand {
    /// Insert a record for a new subject, or replace the subject's record
    SetColumnPermission(ColumnPermission),
    /// Remove the subject's record (the subject falls back to full access)
    ClearColumnPermission { subject_id: String },
    SetStatus(ViewStatus),
    SetStage(ViewStage),
    ReplaceModel(ColumnModel),
}

impl ViewCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ViewCommand::SetColumnPermission(_) => "set_column_permission",
            ViewCommand::ClearColumnPermission { .. } => "clear_column_permission",
            ViewCommand::SetStatus(_) => "set_status",
            ViewCommand::SetStage(_) => "set_stage",
            ViewCommand::ReplaceModel(_) => "replace_model",
        }
    }
}
