use crate::domain::a003_chart::store::use_workbench_store;
use crate::shared::i18n::use_i18n_prefix;
use crate::shared::modal::Modal;
use crate::shared::picker_aggregate::{AggregatePickerResult, GenericAggregatePicker};
use contracts::domain::a004_dashboard::DashboardSummary;
use leptos::prelude::*;

/// Dashboard row in the picker
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardPickerItem {
    pub id: String,
    pub name: String,
}

impl From<DashboardSummary> for DashboardPickerItem {
    fn from(dashboard: DashboardSummary) -> Self {
        Self {
            id: dashboard.id,
            name: dashboard.name,
        }
    }
}

impl AggregatePickerResult for DashboardPickerItem {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Dialog for choosing the dashboard a chart is saved into.
///
/// While the chart has no `backend_chart_id` yet a hint is shown; confirming
/// still hands the chosen dashboard to `on_ok`.
#[component]
pub fn SaveToDashboard(
    #[prop(into)]
    org_id: Signal<String>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    visible: Signal<bool>,
    /// Receives the chosen dashboard id
    on_ok: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(into)]
    backend_chart_id: Signal<Option<String>>,
) -> impl IntoView {
    let store = use_workbench_store();
    let t = use_i18n_prefix("viz.saveToDashboard");

    let dashboards = store.dashboards_for_org(org_id);
    let items = Signal::derive(move || {
        dashboards
            .get()
            .into_iter()
            .map(DashboardPickerItem::from)
            .collect::<Vec<_>>()
    });
    let chart_unsaved = Signal::derive(move || backend_chart_id.get().is_none());

    view! {
        <Show when=move || visible.get()>
            <Modal title=title on_close=on_cancel>
                <Show when=move || chart_unsaved.get()>
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{move || t("unsaved")}</span>
                    </div>
                </Show>
                <GenericAggregatePicker
                    items=items
                    on_confirm=move |item: DashboardPickerItem| on_ok.run(item.id)
                    on_cancel=move |_| on_cancel.run(())
                    confirm_label=Signal::derive(move || t("confirm"))
                    cancel_label=Signal::derive(move || t("cancel"))
                    empty_label=Signal::derive(move || t("empty"))
                />
            </Modal>
        </Show>
    }
}
