//! Column permissions of the edited view, per role.
//!
//! Each role row shows its access level (all / none / partial) and opens a
//! column checklist. Roles without a record see every column.

use crate::domain::a001_view::store::{use_view_store, ViewEditingStore};
use crate::layout::global_context::use_app_context;
use crate::shared::components::check_tree::{CheckTree, TreeItem};
use crate::shared::components::list_title::ListTitle;
use crate::shared::components::popup::Popup;
use crate::shared::components::ui::Button;
use crate::shared::config::use_ui_config;
use crate::shared::i18n::use_i18n_prefix;
use crate::shared::list_utils::{use_debounced_search, SearchInput};
use contracts::domain::a001_view::{
    checked_keys, toggle_column_permission, ColumnModel, PermissionLevel, ViewStage, ViewStatus,
};
use contracts::domain::a002_role::Role;
use leptos::prelude::*;
use thaw::Spinner;

/// Archived views show their permissions read-only
pub fn permissions_locked(status: ViewStatus) -> bool {
    status == ViewStatus::Archived
}

/// Records the checked column set of a role. Returns false when nothing was applied.
fn apply_role_check(store: &ViewEditingStore, role_id: &str, checked: Vec<String>) -> bool {
    let view = store.snapshot();
    if permissions_locked(view.status) {
        log::warn!("view {} is archived, column permissions are read-only", view.id);
        return false;
    }

    let command = toggle_column_permission(
        &view.column_permissions,
        &view.id,
        role_id,
        checked,
        &view.model,
    );
    store.dispatch(command)
}

#[component]
pub fn ColumnPermissions() -> impl IntoView {
    let store = use_view_store();
    let app = use_app_context();
    let config = use_ui_config();
    let t = use_i18n_prefix("view.columnPermission");

    let stage = store.stage();
    let status = store.status();
    let model = store.model();

    let search = use_debounced_search(app.roles(), config.debounce_wait_ms);

    let column_items = Memo::new(move |_| {
        model.with(|m| {
            m.column_names()
                .into_iter()
                .map(|name| TreeItem::leaf(name.clone(), name))
                .collect::<Vec<_>>()
        })
    });
    let disabled = Signal::derive(move || permissions_locked(status.get()));

    let check_column_permission = Callback::new(move |(role_id, checked): (String, Vec<String>)| {
        apply_role_check(&store, &role_id, checked);
    });

    view! {
        <div class="column-permissions">
            <ListTitle title=Signal::derive(move || t("title")) />
            <div class="column-permissions__search">
                <SearchInput
                    on_input=search.on_input
                    placeholder=Signal::derive(move || t("search"))
                />
            </div>
            <div class="column-permissions__list">
                {move || {
                    if stage.get() == ViewStage::Loading {
                        view! {
                            <div class="list-loading">
                                <Spinner />
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <ul class="permission-list">
                                <For
                                    each=move || search.filtered.get()
                                    key=|role| role.id.clone()
                                    children=move |role: Role| {
                                        view! {
                                            <PermissionRow
                                                role=role
                                                store=store
                                                column_items=column_items
                                                model=model
                                                disabled=disabled
                                                on_check=check_column_permission
                                            />
                                        }
                                    }
                                />
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn PermissionRow(
    role: Role,
    store: ViewEditingStore,
    column_items: Memo<Vec<TreeItem>>,
    model: Memo<ColumnModel>,
    disabled: Signal<bool>,
    /// (role id, checked column names)
    on_check: Callback<(String, Vec<String>)>,
) -> impl IntoView {
    let t = use_i18n_prefix("view.columnPermission");
    let open = RwSignal::new(false);

    let permission = store.permission_for(role.id.clone());
    let level = Signal::derive(move || permission.with(|p| PermissionLevel::of(p.as_ref())));
    let checked = Signal::derive(move || {
        permission.with(|p| model.with(|m| checked_keys(p.as_ref(), m)))
    });
    let label_class = Signal::derive(move || {
        if permission.with(Option::is_some) {
            "partial".to_string()
        } else {
            String::new()
        }
    });

    let subject_id = role.id.clone();
    let on_role_check = Callback::new(move |keys: Vec<String>| {
        on_check.run((subject_id.clone(), keys));
    });

    view! {
        <li class="permission-row">
            <div class="permission-row__title">{role.name.clone()}</div>
            <div class="permission-row__actions">
                <Popup
                    open=open
                    trigger=move || view! {
                        <Button variant="link" size="sm" class=label_class>
                            {move || t(level.get().label_key())}
                        </Button>
                    }
                >
                    <CheckTree
                        items=column_items
                        checked_keys=checked
                        on_check=on_role_check
                        disabled=disabled
                        scope=role.id.clone()
                    />
                </Popup>
            </div>
        </li>
    }
}
