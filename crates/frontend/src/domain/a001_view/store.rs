//! Editing session of the view currently open in the editor.
//!
//! Single writer: every change goes through [`ViewEditingStore::dispatch`],
//! which swaps in the snapshot returned by `EditingView::apply`.

use contracts::domain::a001_view::{
    ColumnModel, ColumnPermission, EditingView, ViewCommand, ViewStage, ViewStatus,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ViewEditingStore {
    current: RwSignal<EditingView>,
}

impl ViewEditingStore {
    pub fn new(view: EditingView) -> Self {
        Self {
            current: RwSignal::new(view),
        }
    }

    /// Applies `command`. A rejected command is logged and leaves the session unchanged.
    pub fn dispatch(&self, command: ViewCommand) -> bool {
        let name = command.name();
        match self.current.with_untracked(|view| view.apply(command)) {
            Ok(next) => {
                log::debug!(
                    "view {}: {name}, {} column permission(s)",
                    next.id,
                    next.column_permissions.len()
                );
                self.current.set(next);
                true
            }
            Err(e) => {
                log::error!("{name} rejected: {e}");
                false
            }
        }
    }

    pub fn snapshot(&self) -> EditingView {
        self.current.get_untracked()
    }

    // === Selectors ===

    pub fn status(&self) -> Memo<ViewStatus> {
        let current = self.current;
        Memo::new(move |_| current.with(|v| v.status))
    }

    pub fn stage(&self) -> Memo<ViewStage> {
        let current = self.current;
        Memo::new(move |_| current.with(|v| v.stage))
    }

    pub fn model(&self) -> Memo<ColumnModel> {
        let current = self.current;
        Memo::new(move |_| current.with(|v| v.model.clone()))
    }

    /// Record of one subject, `None` while it sees every column
    pub fn permission_for(&self, subject_id: String) -> Memo<Option<ColumnPermission>> {
        let current = self.current;
        Memo::new(move |_| current.with(|v| v.permission_for(&subject_id).cloned()))
    }
}

pub fn use_view_store() -> ViewEditingStore {
    use_context::<ViewEditingStore>().expect("ViewEditingStore not provided in context")
}
